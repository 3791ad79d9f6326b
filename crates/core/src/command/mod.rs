//! Describing runner invocations for markers

pub mod command_builder;
pub mod run_command;

// Re-export commonly used types
pub use command_builder::CommandBuilder;
pub use run_command::RunCommand;
