use std::io;
use std::process::ExitStatus;

/// Errors that can occur while driving the transformation tool
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("transformation tool failed ({status}): {command}")]
    ProcessFailed { command: String, status: ExitStatus },
}

/// Result type alias for codemod-runner operations
pub type Result<T> = std::result::Result<T, Error>;
