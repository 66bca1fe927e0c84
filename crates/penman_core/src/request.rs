//! The finished request handed to a text generator.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Nucleus sampling cutoff, fixed for every request.
pub const TOP_P: f32 = 0.95;
/// Top-k sampling cutoff, fixed for every request.
pub const TOP_K: u32 = 40;
/// Output token ceiling, fixed for every request.
pub const MAX_OUTPUT_TOKENS: u32 = 8192;
/// The generator is asked for plain text.
pub const RESPONSE_MIME_TYPE: &str = "text/plain";

/// Harm categories the remote service filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HarmCategory {
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
}

/// Severity at which a harm category starts being blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HarmBlockThreshold {
    #[serde(rename = "BLOCK_LOW_AND_ABOVE")]
    BlockLowAndAbove,
    #[serde(rename = "BLOCK_MEDIUM_AND_ABOVE")]
    BlockMediumAndAbove,
    #[serde(rename = "BLOCK_ONLY_HIGH")]
    BlockOnlyHigh,
    #[serde(rename = "BLOCK_NONE")]
    BlockNone,
}

/// The fixed safety policy: hate speech is blocked from low severity, the
/// other categories from medium severity.
pub fn safety_policy() -> BTreeMap<HarmCategory, HarmBlockThreshold> {
    BTreeMap::from([
        (HarmCategory::HateSpeech, HarmBlockThreshold::BlockLowAndAbove),
        (
            HarmCategory::SexuallyExplicit,
            HarmBlockThreshold::BlockMediumAndAbove,
        ),
        (
            HarmCategory::DangerousContent,
            HarmBlockThreshold::BlockMediumAndAbove,
        ),
        (HarmCategory::Harassment, HarmBlockThreshold::BlockMediumAndAbove),
    ])
}

/// Sampling knobs sent alongside the prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct SamplingConfig {
    /// Sampling temperature in 0.1..=1.0, derived from creativity
    temperature: f32,
    /// Nucleus sampling cutoff
    top_p: f32,
    /// Top-k sampling cutoff
    top_k: u32,
    /// Maximum tokens to generate
    max_output_tokens: u32,
    /// Requested response MIME type
    response_mime_type: String,
}

impl SamplingConfig {
    /// Sampling configuration with the given temperature and the fixed
    /// top-p, top-k, token ceiling and MIME type.
    pub fn with_temperature(temperature: f32) -> Self {
        Self {
            temperature,
            top_p: TOP_P,
            top_k: TOP_K,
            max_output_tokens: MAX_OUTPUT_TOKENS,
            response_mime_type: RESPONSE_MIME_TYPE.to_string(),
        }
    }
}

/// A fully formed generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct GenerationRequest {
    /// Interpolated natural-language instruction
    prompt_text: String,
    /// Sampling configuration
    sampling_config: SamplingConfig,
    /// Harm category thresholds
    safety_thresholds: BTreeMap<HarmCategory, HarmBlockThreshold>,
}

impl GenerationRequest {
    /// Assembles a request from its parts.
    ///
    /// Most callers want [`crate::RequestBuilder::build`], which derives all
    /// three parts from the user's parameters.
    pub fn new(
        prompt_text: impl Into<String>,
        sampling_config: SamplingConfig,
        safety_thresholds: BTreeMap<HarmCategory, HarmBlockThreshold>,
    ) -> Self {
        Self {
            prompt_text: prompt_text.into(),
            sampling_config,
            safety_thresholds,
        }
    }
}
