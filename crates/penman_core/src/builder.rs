//! Prompt construction.
//!
//! [`RequestBuilder::build`] is a pure function of its input: the same
//! parameters always produce a byte-identical prompt and the same sampling
//! configuration.

use crate::{GenerationParameters, GenerationRequest, SamplingConfig, safety_policy};
use tracing::instrument;

/// Maps a creativity level to a sampling temperature.
///
/// Linear from 0.1 at level 0 to 1.0 at level 10. Out-of-range levels are
/// clamped first, so the result always lies in 0.1..=1.0.
///
/// # Examples
///
/// ```
/// use penman_core::temperature_for;
///
/// assert_eq!(temperature_for(0), 0.1);
/// assert!((temperature_for(5) - 0.55).abs() < 1e-6);
/// assert_eq!(temperature_for(10), 1.0);
/// assert_eq!(temperature_for(-3), 0.1);
/// ```
pub fn temperature_for(creativity: i32) -> f32 {
    let level = creativity.clamp(0, 10) as f32;
    (0.1 + level * 0.09).clamp(0.1, 1.0)
}

/// One of three instruction fragments selected by creativity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CreativityBucket {
    /// Levels 0 through 3
    #[display("low")]
    Low,
    /// Levels 4 through 7
    #[display("medium")]
    Medium,
    /// Levels 8 through 10
    #[display("high")]
    High,
}

impl CreativityBucket {
    /// Selects the bucket for a level. Out-of-range levels are clamped.
    pub fn for_level(creativity: i32) -> Self {
        match creativity.clamp(0, 10) {
            0..=3 => CreativityBucket::Low,
            4..=7 => CreativityBucket::Medium,
            _ => CreativityBucket::High,
        }
    }

    /// The instruction fragment inserted into the prompt.
    pub fn instruction(&self) -> &'static str {
        match self {
            CreativityBucket::Low => "prioritize factual, straightforward content",
            CreativityBucket::Medium => "include engaging examples or analogies",
            CreativityBucket::High => {
                "incorporate storytelling, unique perspectives, and innovative insights"
            }
        }
    }
}

/// Sentence telling the model which SEO keywords to use.
///
/// Keywords are joined with `", "` in insertion order. Blank entries and
/// repeats are dropped, keeping the first occurrence.
///
/// # Examples
///
/// ```
/// use penman_core::seo_instructions;
///
/// let keywords = vec!["AI".to_string(), "Sustainability".to_string()];
/// assert_eq!(
///     seo_instructions(&keywords),
///     "SEO Keywords to integrate naturally: AI, Sustainability"
/// );
/// assert_eq!(seo_instructions(&[]), "SEO Keywords: None required.");
/// ```
pub fn seo_instructions(keywords: &[String]) -> String {
    let mut unique: Vec<&str> = Vec::with_capacity(keywords.len());
    for keyword in keywords.iter().map(|k| k.trim()) {
        if !keyword.is_empty() && !unique.contains(&keyword) {
            unique.push(keyword);
        }
    }

    if unique.is_empty() {
        "SEO Keywords: None required.".to_string()
    } else {
        format!("SEO Keywords to integrate naturally: {}", unique.join(", "))
    }
}

/// Builds generation requests from user parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestBuilder;

impl RequestBuilder {
    /// Produces the prompt, sampling configuration and safety policy for
    /// one set of parameters.
    ///
    /// Never fails: creativity is clamped rather than rejected.
    #[instrument(skip_all, fields(topic = %params.topic(), creativity = params.creativity()))]
    pub fn build(params: &GenerationParameters) -> GenerationRequest {
        let temperature = temperature_for(params.creativity());
        let prompt_text = render_prompt(params);

        tracing::debug!(
            temperature,
            prompt_len = prompt_text.len(),
            "Built generation request"
        );

        GenerationRequest::new(
            prompt_text,
            SamplingConfig::with_temperature(temperature),
            safety_policy(),
        )
    }
}

fn render_prompt(params: &GenerationParameters) -> String {
    let complexity = params.complexity();
    let tone = params.tone();
    let audience = params.audience();
    let language = params.language();
    let focus = params.content_focus();
    let creativity = params.creativity();
    let bucket = CreativityBucket::for_level(creativity);

    format!(
        "Compose a {complexity} level blog post with a {tone} tone, targeting {audience} audience.\n\
         \n\
         Content Specifications:\n\
         - Primary Topic: '{topic}'\n\
         - Language: {language}\n\
         - Approximate Length: {word_count} words\n\
         - Content Focus: {focus}\n\
         \n\
         Special Instructions:\n\
         - {seo}\n\
         - Creativity Level: {creativity}/10, so {fragment}.\n\
         - Write the entire post in {language}.\n\
         \n\
         Write a comprehensive, engaging, and well-structured blog post that:\n\
         1. Provides deep insights into the topic\n\
         2. Maintains a {tone} writing style throughout\n\
         3. Is accessible to {audience} audience\n\
         4. Uses clear, precise language\n\
         5. Takes a {focus} approach to the material\n",
        topic = params.topic(),
        word_count = params.word_count(),
        seo = seo_instructions(params.seo_keywords()),
        fragment = bucket.instruction(),
    )
}
