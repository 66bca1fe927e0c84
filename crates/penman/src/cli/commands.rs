//! Command-line argument definitions.

use crate::StyleDefaults;
use clap::{Args, Parser, Subcommand};
use penman_core::{
    Audience, Complexity, ContentFocus, GenerationParameters, Language, Tone,
};
use penman_error::GenerationError;
use std::path::PathBuf;

/// Generate blog posts with Gemini.
#[derive(Parser, Debug)]
#[command(name = "penman")]
#[command(about = "Generate blog posts from a topic and a few style choices")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a blog post and print it
    Generate(BlogArgs),
    /// Print the prompt and sampling configuration without calling the service
    Prompt(BlogArgs),
}

/// What to write about and how.
#[derive(Args, Debug, Clone)]
pub struct BlogArgs {
    /// Blog topic
    #[arg(long)]
    pub topic: String,

    /// Approximate number of words
    #[arg(long = "words")]
    pub word_count: u32,

    /// Target audience (researchers, data-scientists, common-people)
    #[arg(long)]
    pub audience: Audience,

    /// Writing tone
    #[arg(long)]
    pub tone: Option<Tone>,

    /// Reader expertise
    #[arg(long)]
    pub complexity: Option<Complexity>,

    /// Output language
    #[arg(long)]
    pub language: Option<Language>,

    /// SEO keyword to weave in (repeatable)
    #[arg(long = "keyword")]
    pub keywords: Vec<String>,

    /// Creativity level, 0 to 10
    #[arg(long, allow_negative_numbers = true)]
    pub creativity: Option<i32>,

    /// Primary content focus
    #[arg(long = "focus")]
    pub content_focus: Option<ContentFocus>,
}

impl BlogArgs {
    /// Builds parameters, filling unset choices from `defaults` and then
    /// from the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` for a blank topic or a zero word count.
    pub fn to_parameters(
        &self,
        defaults: &StyleDefaults,
    ) -> Result<GenerationParameters, GenerationError> {
        let mut builder = GenerationParameters::builder();
        builder
            .topic(self.topic.clone())
            .word_count(self.word_count)
            .audience(self.audience)
            .seo_keywords(self.keywords.clone());

        if let Some(tone) = self.tone.or(defaults.tone) {
            builder.tone(tone);
        }
        if let Some(complexity) = self.complexity.or(defaults.complexity) {
            builder.complexity(complexity);
        }
        if let Some(language) = self.language.or(defaults.language) {
            builder.language(language);
        }
        if let Some(creativity) = self.creativity.or(defaults.creativity) {
            builder.creativity(creativity);
        }
        if let Some(focus) = self.content_focus.or(defaults.content_focus) {
            builder.content_focus(focus);
        }

        builder.build()
    }
}
