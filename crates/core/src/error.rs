use std::io;

/// Errors that can occur at the fallible edges of robot-runnables.
///
/// Classification itself never fails: a node that does not qualify simply
/// yields no marker.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Document tree error: {0}")]
    TreeError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("No runnable found at line {0}")]
    NoRunnableFound(u32),

    #[error("Not a suite file: {0}")]
    NotASuite(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for robot-runnables operations
pub type Result<T> = std::result::Result<T, Error>;
