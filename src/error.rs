//! Error types for hypotest operations.
//!
//! Invalid input is surfaced immediately; nothing is retried or partially
//! returned.

use thiserror::Error;

/// Result type alias for hypotest operations.
pub type Result<T> = std::result::Result<T, HypotestError>;

/// Main error type for hypotest operations.
///
/// # Examples
///
/// ```
/// use hypotest::error::HypotestError;
///
/// let err = HypotestError::InvalidInput("t-test requires at least 2 observations".into());
/// assert!(err.to_string().contains("at least 2"));
/// ```
#[derive(Debug, Error)]
pub enum HypotestError {
    /// Sample or parameter outside the domain of the computation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A distribution could not be constructed or evaluated.
    #[error("Distribution error: {0}")]
    Distribution(String),

    /// I/O error (config file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl HypotestError {
    /// Shorthand for [`HypotestError::InvalidInput`].
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Returns true for [`HypotestError::InvalidInput`].
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
