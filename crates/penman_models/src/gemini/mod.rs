//! Google Gemini `generateContent` integration.

mod client;
mod config;
mod conversions;
mod dto;
mod metrics;

pub use client::GeminiClient;
pub use config::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, GeminiConfig, GeminiConfigBuilder,
};
pub use conversions::{interpret_response, to_generate_content_request};
pub use dto::{GenerateContentRequest, GenerateContentResponse};
