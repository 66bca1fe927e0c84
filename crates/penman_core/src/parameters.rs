//! User-supplied content parameters.

use derive_builder::Builder;
use derive_getters::Getters;
use penman_error::{GenerationError, GenerationErrorKind};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Word counts outside this range are flagged to the user but still accepted.
pub const ADVISORY_WORD_COUNT: RangeInclusive<u32> = 100..=2000;

/// Who the post is written for.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Audience {
    /// Academic and industrial researchers
    Researchers,
    /// Practising data scientists
    #[strum(to_string = "Data Scientists", serialize = "DataScientists", serialize = "data-scientists")]
    DataScientists,
    /// General readership
    #[strum(to_string = "Common People", serialize = "CommonPeople", serialize = "common-people")]
    CommonPeople,
}

/// Writing tone.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Tone {
    #[default]
    Professional,
    Conversational,
    Academic,
    Inspirational,
    Technical,
    Storytelling,
}

/// Expected reader expertise.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Complexity {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

/// Output language.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
    Portuguese,
    Chinese,
    Hindi,
}

/// Primary kind of content.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum ContentFocus {
    #[default]
    Informative,
    Persuasive,
    Narrative,
    Analytical,
    Exploratory,
}

/// Everything the user chose for one blog post.
///
/// Constructed once per request through [`GenerationParameters::builder`].
/// `topic`, `word_count` and `audience` are required; every other field has
/// a default (Professional, Intermediate, English, no keywords, creativity 5,
/// Informative).
///
/// # Examples
///
/// ```
/// use penman_core::{Audience, GenerationParameters, Tone};
///
/// let params = GenerationParameters::builder()
///     .topic("Quantum Computing")
///     .word_count(500)
///     .audience(Audience::Researchers)
///     .tone(Tone::Academic)
///     .keyword("qubits")
///     .creativity(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(params.creativity(), 10);
/// assert_eq!(params.seo_keywords(), &vec!["qubits".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Builder)]
#[builder(build_fn(private, name = "build_unchecked", validate = "Self::validate"))]
pub struct GenerationParameters {
    /// Main subject of the post
    #[builder(setter(into))]
    topic: String,
    /// Desired approximate length in words
    word_count: u32,
    /// Target readership
    audience: Audience,
    /// Writing tone
    #[builder(default)]
    tone: Tone,
    /// Expected reader expertise
    #[builder(default)]
    complexity: Complexity,
    /// Output language
    #[builder(default)]
    language: Language,
    /// Keywords to weave in, in insertion order
    #[builder(default, setter(each(name = "keyword", into)))]
    seo_keywords: Vec<String>,
    /// Creativity level, clamped into 0..=10
    #[builder(default = "5", setter(custom))]
    #[getter(skip)]
    creativity: i32,
    /// Primary kind of content
    #[builder(default)]
    content_focus: ContentFocus,
}

impl GenerationParameters {
    /// Creates a new builder for GenerationParameters.
    pub fn builder() -> GenerationParametersBuilder {
        GenerationParametersBuilder::default()
    }

    /// Creativity level in 0..=10.
    pub fn creativity(&self) -> i32 {
        self.creativity.clamp(0, 10)
    }

    /// True when the word count falls outside [`ADVISORY_WORD_COUNT`].
    pub fn word_count_advisory(&self) -> bool {
        !ADVISORY_WORD_COUNT.contains(&self.word_count)
    }
}

impl GenerationParametersBuilder {
    /// Sets the creativity level. Values outside 0..=10 are clamped.
    pub fn creativity(&mut self, level: i32) -> &mut Self {
        self.creativity = Some(level.clamp(0, 10));
        self
    }

    /// Builds the parameters, rejecting missing or blank required fields.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationErrorKind::InvalidParameters`] when `topic`,
    /// `word_count` or `audience` is absent, the topic is blank, or the word
    /// count is zero.
    #[track_caller]
    pub fn build(&self) -> Result<GenerationParameters, GenerationError> {
        self.build_unchecked().map_err(|e| {
            tracing::warn!(error = %e, "Rejected incomplete generation parameters");
            GenerationError::new(GenerationErrorKind::InvalidParameters(e.to_string()))
        })
    }

    fn validate(&self) -> Result<(), String> {
        if let Some(topic) = &self.topic {
            if topic.trim().is_empty() {
                return Err("topic must not be blank".to_string());
            }
        }
        if self.word_count == Some(0) {
            return Err("word_count must be positive".to_string());
        }
        Ok(())
    }
}
