//! Error types for htest
//!
//! Every failure stops the run and maps to a distinct exit code.

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

use hypotest::error::HypotestError;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Not a file (e.g., directory)
    #[error("Not a file: {0}")]
    NotAFile(PathBuf),

    /// Data file could not be interpreted as a numeric column
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Sample or parameter rejected by the analysis
    #[error("{0}")]
    Analysis(HypotestError),

    /// Configuration file could not be read or parsed
    #[error("Config error: {0}")]
    Config(HypotestError),

    /// JSON output failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound(_) | Self::NotAFile(_) => ExitCode::from(3),
            Self::InvalidData(_) => ExitCode::from(4),
            Self::Analysis(_) => ExitCode::from(5),
            Self::Config(_) => ExitCode::from(6),
            Self::Io(_) => ExitCode::from(7),
            Self::Serialization(_) => ExitCode::from(1),
        }
    }
}

impl From<HypotestError> for CliError {
    fn from(e: HypotestError) -> Self {
        match e {
            HypotestError::Io(io) => Self::Io(io),
            other => Self::Analysis(other),
        }
    }
}
