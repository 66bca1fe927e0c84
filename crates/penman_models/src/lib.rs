//! Remote text-generation service integrations for Penman.
//!
//! Currently one provider: Google Gemini over its `generateContent` REST
//! endpoint. Each call is a single round-trip with no retry; every failure is
//! classified into a [`GenerationErrorKind`](penman_error::GenerationErrorKind).

mod gemini;

pub use gemini::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, GeminiClient, GeminiConfig,
    GeminiConfigBuilder, GenerateContentRequest, GenerateContentResponse, interpret_response,
    to_generate_content_request,
};
