pub mod analyze;
pub mod command;
pub mod init;

pub use analyze::analyze_command;
pub use command::command_command;
pub use init::init_command;
