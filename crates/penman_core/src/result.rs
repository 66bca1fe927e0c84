//! Generated output.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Token usage reported by the remote service.
///
/// # Examples
///
/// ```
/// use penman_core::TokenUsage;
///
/// let usage = TokenUsage::new(150, 650, 800);
/// assert_eq!(*usage.prompt_tokens(), 150);
/// assert_eq!(*usage.total_tokens(), 800);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct TokenUsage {
    /// Tokens in the prompt
    prompt_tokens: u64,
    /// Tokens in the generated candidate
    candidates_tokens: u64,
    /// Total tokens billed
    total_tokens: u64,
}

impl TokenUsage {
    /// Creates new token usage data.
    pub fn new(prompt_tokens: u64, candidates_tokens: u64, total_tokens: u64) -> Self {
        Self {
            prompt_tokens,
            candidates_tokens,
            total_tokens,
        }
    }
}

/// Text produced by a successful generation, unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GenerationResult {
    /// The generated text
    text: String,
    /// Token usage, when the service reports it
    usage: Option<TokenUsage>,
}

impl GenerationResult {
    /// Wraps generated text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: None,
        }
    }

    /// Attaches token usage.
    pub fn with_usage(mut self, usage: Option<TokenUsage>) -> Self {
        self.usage = usage;
        self
    }

    /// Consumes the result, returning the text.
    pub fn into_text(self) -> String {
        self.text
    }
}
