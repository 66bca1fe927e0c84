//! Connection settings for the Gemini client.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Public Gemini REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";
/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Where and how the client talks to Gemini.
///
/// The API key is deliberately not part of this struct; it is passed to
/// [`GeminiClient::new`](crate::GeminiClient::new) separately.
///
/// # Examples
///
/// ```
/// use penman_models::GeminiConfig;
///
/// let config = GeminiConfig::builder()
///     .model("gemini-1.5-pro")
///     .timeout_secs(30u64)
///     .build()
///     .unwrap();
/// assert_eq!(config.model(), "gemini-1.5-pro");
/// assert_eq!(config.base_url(), "https://generativelanguage.googleapis.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GeminiConfig {
    /// Model identifier
    #[serde(default = "default_model")]
    #[builder(default = "default_model()")]
    model: String,
    /// Base URL, without the `/v1beta` path
    #[serde(default = "default_base_url")]
    #[builder(default = "default_base_url()")]
    base_url: String,
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    #[builder(default = "default_timeout_secs()")]
    timeout_secs: u64,
}

impl GeminiConfig {
    /// Creates a new builder for GeminiConfig.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
    }

    /// Full `generateContent` URL for the configured model.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
