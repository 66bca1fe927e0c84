//! The inbound generation operation.

use penman_core::{GenerationParameters, GenerationRequest, GenerationResult, RequestBuilder};
use penman_error::PenmanResult;
use penman_interface::TextGenerator;
use std::time::{Duration, Instant};
use tracing::{info, instrument, warn};

/// Turns content parameters into a blog post using a [`TextGenerator`].
///
/// Holds no state besides the generator; every call is independent.
#[derive(Debug, Clone)]
pub struct BlogWriter<G> {
    generator: G,
}

impl<G: TextGenerator> BlogWriter<G> {
    /// Creates a writer around a configured generator.
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Returns the underlying generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Builds the request that [`generate`](Self::generate) would send,
    /// without sending it.
    pub fn prepare(&self, params: &GenerationParameters) -> GenerationRequest {
        RequestBuilder::build(params)
    }

    /// Builds the request and sends it once.
    ///
    /// # Errors
    ///
    /// Returns the generator's classified failure unchanged. No text is
    /// returned alongside an error.
    #[instrument(
        skip_all,
        fields(
            topic = %params.topic(),
            provider = self.generator.provider_name(),
            model = %self.generator.model_name()
        )
    )]
    pub async fn generate(&self, params: &GenerationParameters) -> PenmanResult<GenerationResult> {
        let request = RequestBuilder::build(params);
        let started = Instant::now();
        let outcome = self.generator.generate(&request).await;
        log_generation(params, &outcome, started.elapsed());
        outcome
    }
}

/// Structured record of one generation, success or failure.
fn log_generation(
    params: &GenerationParameters,
    outcome: &PenmanResult<GenerationResult>,
    elapsed: Duration,
) {
    let elapsed_ms = elapsed.as_millis() as u64;
    match outcome {
        Ok(result) => info!(
            topic = %params.topic(),
            word_count = *params.word_count(),
            audience = %params.audience(),
            tone = %params.tone(),
            complexity = %params.complexity(),
            language = %params.language(),
            seo_keywords = ?params.seo_keywords(),
            creativity = params.creativity(),
            content_focus = %params.content_focus(),
            text_len = result.text().len(),
            outcome = "success",
            elapsed_ms,
            "Blog generated"
        ),
        Err(e) => warn!(
            topic = %params.topic(),
            word_count = *params.word_count(),
            audience = %params.audience(),
            tone = %params.tone(),
            complexity = %params.complexity(),
            language = %params.language(),
            seo_keywords = ?params.seo_keywords(),
            creativity = params.creativity(),
            content_focus = %params.content_focus(),
            outcome = e.generation_kind().map(|k| k.label()).unwrap_or("error"),
            elapsed_ms,
            "Blog generation failed"
        ),
    }
}
