//! Configuration and credential errors.

use derive_more::{Display, Error};

/// A configuration file, credential, or client setting could not be used.
///
/// # Examples
///
/// ```
/// use penman_error::ConfigError;
///
/// let err = ConfigError::new("GEMINI_API_KEY not set");
/// assert_eq!(err.message(), "GEMINI_API_KEY not set");
/// assert!(err.to_string().starts_with("Configuration Error: GEMINI_API_KEY not set"));
/// ```
#[derive(Debug, Clone, Display, Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    message: String,
    line: u32,
    file: &'static str,
}

impl ConfigError {
    /// Create a configuration error recording the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// What went wrong.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Source line that raised the error.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Source file that raised the error.
    pub fn file(&self) -> &'static str {
        self.file
    }
}
