//! Error types for TTS functionality

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// TTS error types
#[derive(Error, Debug)]
pub enum TtsError {
    /// No executable exists at the configured path
    #[error("TTS executable not found: {}", path.display())]
    ExecutableNotFound { path: PathBuf },

    /// Invalid combination of synthesis arguments
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The external tool wrote to stderr; carries the captured text
    #[error("external tool error: {0}")]
    ToolError(String),

    /// The child process exceeded the configured time budget
    #[error("external tool timed out after {0:?}")]
    Timeout(Duration),

    /// IO error (process spawning, stream capture)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for TTS operations
pub type TtsResult<T> = Result<T, TtsError>;
