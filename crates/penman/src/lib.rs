//! Parameterised blog post generation.
//!
//! Collect a topic, a length and a handful of stylistic choices into
//! [`GenerationParameters`], hand them to a [`BlogWriter`], and get the
//! generated post back or a classified failure.
//!
//! ```no_run
//! use penman::{Audience, BlogWriter, GeminiClient, GeminiConfig, GenerationParameters, Tone};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new("api-key", GeminiConfig::default())?;
//! let writer = BlogWriter::new(client);
//!
//! let params = GenerationParameters::builder()
//!     .topic("Quantum Computing")
//!     .word_count(500)
//!     .audience(Audience::Researchers)
//!     .tone(Tone::Academic)
//!     .build()?;
//!
//! let post = writer.generate(&params).await?;
//! println!("{}", post.text());
//! # Ok(())
//! # }
//! ```

pub mod cli;
mod config;
mod writer;

pub use config::{API_KEY_ENV, PenmanConfig, StyleDefaults};
pub use writer::BlogWriter;

pub use penman_core::{
    Audience, Complexity, ContentFocus, CreativityBucket, GenerationParameters,
    GenerationParametersBuilder, GenerationRequest, GenerationResult, Language, RequestBuilder,
    SamplingConfig, Tone, TokenUsage, init_observability, shutdown_observability,
};
pub use penman_error::{
    ConfigError, GenerationError, GenerationErrorKind, PenmanError, PenmanErrorKind, PenmanResult,
};
pub use penman_interface::TextGenerator;
pub use penman_models::{GeminiClient, GeminiConfig};
