//! Core data types for the Penman blog generation library.
//!
//! This crate turns a set of content parameters into a finished generation
//! request (prompt text plus sampling and safety configuration). Nothing here
//! performs I/O.

mod builder;
mod observability;
mod parameters;
mod request;
mod result;

pub use builder::{CreativityBucket, RequestBuilder, seo_instructions, temperature_for};
pub use observability::{init_observability, shutdown_observability};
pub use parameters::{
    ADVISORY_WORD_COUNT, Audience, Complexity, ContentFocus, GenerationParameters,
    GenerationParametersBuilder, Language, Tone,
};
pub use request::{
    GenerationRequest, HarmBlockThreshold, HarmCategory, MAX_OUTPUT_TOKENS, RESPONSE_MIME_TYPE,
    SamplingConfig, TOP_K, TOP_P, safety_policy,
};
pub use result::{GenerationResult, TokenUsage};
