//! Error types for the Penman library.
//!
//! Each domain gets a `*ErrorKind` enum describing what went wrong and a
//! wrapper struct recording where the error was raised. [`PenmanError`]
//! aggregates them for callers that only want one error type.

mod config;
mod generation;

pub use config::ConfigError;
pub use generation::{GenerationError, GenerationErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum PenmanErrorKind {
    /// Generation failure, classified
    Generation(GenerationError),
    /// Configuration error
    Config(ConfigError),
}

impl std::fmt::Display for PenmanErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PenmanErrorKind::Generation(e) => write!(f, "{}", e),
            PenmanErrorKind::Config(e) => write!(f, "{}", e),
        }
    }
}

/// Penman error with kind discrimination.
///
/// # Examples
///
/// ```
/// use penman_error::{GenerationError, GenerationErrorKind, PenmanError};
///
/// let err: PenmanError = GenerationError::new(GenerationErrorKind::SafetyBlocked {
///     reason: "SAFETY".to_string(),
/// })
/// .into();
/// assert!(err.is_safety_blocked());
/// ```
#[derive(Debug)]
pub struct PenmanError(Box<PenmanErrorKind>);

impl PenmanError {
    /// Create a new error from a kind.
    pub fn new(kind: PenmanErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PenmanErrorKind {
        &self.0
    }

    /// The generation failure classification, if this is a generation error.
    pub fn generation_kind(&self) -> Option<&GenerationErrorKind> {
        match self.kind() {
            PenmanErrorKind::Generation(e) => Some(e.kind()),
            PenmanErrorKind::Config(_) => None,
        }
    }

    /// True when the remote service declined to produce output.
    pub fn is_safety_blocked(&self) -> bool {
        matches!(
            self.generation_kind(),
            Some(GenerationErrorKind::SafetyBlocked { .. })
        )
    }
}

impl std::fmt::Display for PenmanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Penman Error: {}", self.0)
    }
}

impl std::error::Error for PenmanError {}

// Generic From implementation for any type that converts to PenmanErrorKind
impl<T> From<T> for PenmanError
where
    T: Into<PenmanErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Penman operations.
pub type PenmanResult<T> = std::result::Result<T, PenmanError>;
