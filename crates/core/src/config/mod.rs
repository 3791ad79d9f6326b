//! Configuration management for robot-runnables

mod settings;

// Re-export main types
pub use settings::{CONFIG_FILE_NAMES, Config, DEFAULT_RUNNER_COMMAND, RunnerConfig};
