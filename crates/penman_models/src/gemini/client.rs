//! HTTP client for the Gemini `generateContent` endpoint.

use crate::gemini::{GeminiConfig, conversions, metrics::GenerationMetrics};
use async_trait::async_trait;
use penman_core::{GenerationRequest, GenerationResult};
use penman_error::{ConfigError, GenerationError, GenerationErrorKind, PenmanResult};
use penman_interface::TextGenerator;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error, instrument};

const PROVIDER: &str = "gemini";

/// Client for Google Gemini text generation.
///
/// Each [`generate`](TextGenerator::generate) call performs exactly one HTTP
/// request. Nothing is cached and nothing is retried.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    config: GeminiConfig,
    endpoint: String,
    metrics: GenerationMetrics,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &"<redacted>")
            .field("config", &self.config)
            .finish()
    }
}

impl GeminiClient {
    /// Creates a client with an already-resolved API key.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the key is blank or the HTTP client
    /// cannot be constructed.
    #[instrument(skip(api_key), fields(model = %config.model(), base_url = %config.base_url()))]
    pub fn new(api_key: impl Into<String>, config: GeminiConfig) -> PenmanResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::new("Gemini API key is empty").into());
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(*config.timeout_secs()))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to create HTTP client: {}", e)))?;

        let endpoint = config.endpoint();
        debug!(endpoint = %endpoint, "Created Gemini client");

        Ok(Self {
            client,
            api_key,
            config,
            endpoint,
            metrics: GenerationMetrics::new(),
        })
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    async fn send(&self, req: &GenerationRequest) -> Result<GenerationResult, GenerationError> {
        let body = conversions::to_generate_content_request(req);

        debug!(
            model = %self.config.model(),
            prompt_len = req.prompt_text().len(),
            temperature = *req.sampling_config().temperature(),
            "Sending request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(provider = PROVIDER, error = ?e, "HTTP request failed");
                GenerationError::new(GenerationErrorKind::TransportFailure(describe(&e)))
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            error!(provider = PROVIDER, status = %status, error = ?e, "Failed to read response body");
            GenerationError::new(GenerationErrorKind::TransportFailure(describe(&e)))
        })?;

        debug!(status = %status, body_len = text.len(), "Received response");
        conversions::interpret_response(status.as_u16(), &text)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(skip(self, request), fields(provider = PROVIDER, model = %self.config.model()))]
    async fn generate(&self, request: &GenerationRequest) -> PenmanResult<GenerationResult> {
        let started = Instant::now();
        let outcome = self.send(request).await;
        self.metrics
            .record(self.config.model(), &outcome, started.elapsed());

        if let Err(e) = &outcome {
            error!(kind = e.kind().label(), error = %e.kind(), "Generation failed");
        }
        outcome.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}

fn describe(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("Request timed out: {}", e)
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else {
        format!("Request failed: {}", e)
    }
}
