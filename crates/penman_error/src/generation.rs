//! Classified failures of a single generation attempt.

use derive_more::{Display, Error};

/// Why a generation attempt produced no text.
///
/// A safety block is an expected outcome of the configured harm thresholds
/// and is kept apart from transport problems so callers can present it
/// differently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum GenerationErrorKind {
    /// Required parameters were missing or blank
    #[display("Invalid parameters: {}", _0)]
    InvalidParameters(String),

    /// The remote service could not be reached or did not answer
    #[display("Transport failure: {}", _0)]
    TransportFailure(String),

    /// The remote service rejected the credential
    #[display("Authentication failed (HTTP {}): {}", status_code, message)]
    AuthenticationFailure {
        /// HTTP status code
        status_code: u16,
        /// Message reported by the service
        message: String,
    },

    /// The remote service withheld output because a harm threshold was triggered
    #[display("Blocked by safety filters: {}", reason)]
    SafetyBlocked {
        /// Block or finish reason reported by the service
        reason: String,
    },

    /// The response could not be turned into text
    #[display("Unexpected response: {}", _0)]
    UnexpectedResponse(String),
}

impl GenerationErrorKind {
    /// Short stable label, used for log fields and metric attributes.
    pub fn label(&self) -> &'static str {
        match self {
            GenerationErrorKind::InvalidParameters(_) => "invalid_parameters",
            GenerationErrorKind::TransportFailure(_) => "transport_failure",
            GenerationErrorKind::AuthenticationFailure { .. } => "authentication_failure",
            GenerationErrorKind::SafetyBlocked { .. } => "safety_blocked",
            GenerationErrorKind::UnexpectedResponse(_) => "unexpected_response",
        }
    }
}

/// Generation error with location tracking.
///
/// # Examples
///
/// ```
/// use penman_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::TransportFailure(
///     "connection refused".to_string(),
/// ));
/// assert_eq!(err.kind().label(), "transport_failure");
/// assert!(format!("{}", err).contains("connection refused"));
/// ```
#[derive(Debug, Clone, Display, Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    kind: GenerationErrorKind,
    line: u32,
    file: &'static str,
}

impl GenerationError {
    /// Create a new generation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GenerationErrorKind {
        &self.kind
    }
}

impl<T> From<T> for GenerationError
where
    T: Into<GenerationErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}
