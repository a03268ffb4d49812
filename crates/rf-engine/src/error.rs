//! Error types for the scene engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while running a story.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A caller broke the argument contract of an operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The player interrupted a blocking prompt.
    #[error("interrupted by user")]
    UserInterrupt,

    /// Reading from or writing to the terminal failed.
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Whether this error is a player interrupt rather than a fault.
    pub fn is_interrupt(&self) -> bool {
        matches!(self, Self::UserInterrupt)
    }
}
