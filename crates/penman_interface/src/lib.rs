//! Trait definitions for the Penman library.
//!
//! [`TextGenerator`] is the seam between request construction and whatever
//! remote service turns a prompt into text. The production implementation
//! lives in `penman_models`; tests substitute their own.

use async_trait::async_trait;
use penman_core::{GenerationRequest, GenerationResult};
use penman_error::PenmanResult;

/// A remote text-generation service.
///
/// Implementations perform exactly one round-trip per call and never retry.
/// On failure they return a classified
/// [`GenerationError`](penman_error::GenerationError) and no text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends the request and returns the generated text unmodified.
    async fn generate(&self, request: &GenerationRequest) -> PenmanResult<GenerationResult>;

    /// Provider name, for logging.
    fn provider_name(&self) -> &'static str;

    /// Model identifier, for logging.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T> TextGenerator for std::sync::Arc<T>
where
    T: TextGenerator + ?Sized,
{
    async fn generate(&self, request: &GenerationRequest) -> PenmanResult<GenerationResult> {
        (**self).generate(request).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
