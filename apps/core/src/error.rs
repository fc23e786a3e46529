use thiserror::Error;

/// Crate-wide error type. The classification operations themselves are total
/// and never fail; the only fallible surface is configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntentError {
    /// Represents configuration-related errors (e.g., zero thresholds).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<validator::ValidationErrors> for IntentError {
    fn from(err: validator::ValidationErrors) -> Self {
        IntentError::Config(format!("Validation errors: {}", err))
    }
}
