//! Tests for parameter construction and validation.

use penman_core::{
    Audience, Complexity, ContentFocus, GenerationParameters, Language, Tone,
};
use penman_error::GenerationErrorKind;
use std::str::FromStr;

#[test]
fn test_defaults_apply() {
    let params = GenerationParameters::builder()
        .topic("Compilers")
        .word_count(300)
        .audience(Audience::Researchers)
        .build()
        .expect("valid parameters");

    assert_eq!(*params.tone(), Tone::Professional);
    assert_eq!(*params.complexity(), Complexity::Intermediate);
    assert_eq!(*params.language(), Language::English);
    assert_eq!(*params.content_focus(), ContentFocus::Informative);
    assert_eq!(params.creativity(), 5);
    assert!(params.seo_keywords().is_empty());
}

#[test]
fn test_missing_required_fields_are_rejected() {
    let missing_topic = GenerationParameters::builder()
        .word_count(300)
        .audience(Audience::Researchers)
        .build();
    let missing_count = GenerationParameters::builder()
        .topic("Compilers")
        .audience(Audience::Researchers)
        .build();
    let missing_audience = GenerationParameters::builder()
        .topic("Compilers")
        .word_count(300)
        .build();

    for result in [missing_topic, missing_count, missing_audience] {
        let err = result.expect_err("incomplete parameters must be rejected");
        assert!(matches!(
            err.kind(),
            GenerationErrorKind::InvalidParameters(_)
        ));
    }
}

#[test]
fn test_blank_topic_and_zero_words_are_rejected() {
    let blank = GenerationParameters::builder()
        .topic("   ")
        .word_count(300)
        .audience(Audience::Researchers)
        .build();
    assert!(matches!(
        blank.expect_err("blank topic").kind(),
        GenerationErrorKind::InvalidParameters(_)
    ));

    let zero = GenerationParameters::builder()
        .topic("Compilers")
        .word_count(0)
        .audience(Audience::Researchers)
        .build();
    assert!(matches!(
        zero.expect_err("zero words").kind(),
        GenerationErrorKind::InvalidParameters(_)
    ));
}

#[test]
fn test_word_count_advisory() {
    let build = |words| {
        GenerationParameters::builder()
            .topic("Compilers")
            .word_count(words)
            .audience(Audience::Researchers)
            .build()
            .expect("valid parameters")
    };

    assert!(build(50).word_count_advisory());
    assert!(!build(100).word_count_advisory());
    assert!(!build(2000).word_count_advisory());
    assert!(build(2001).word_count_advisory());
}

#[test]
fn test_enum_labels_parse_case_insensitively() {
    assert_eq!(Audience::DataScientists.to_string(), "Data Scientists");
    assert_eq!(Audience::CommonPeople.to_string(), "Common People");
    assert_eq!(
        Audience::from_str("data-scientists").expect("parse"),
        Audience::DataScientists
    );
    assert_eq!(Tone::from_str("storytelling").expect("parse"), Tone::Storytelling);
    assert_eq!(Language::from_str("HINDI").expect("parse"), Language::Hindi);
    assert!(ContentFocus::from_str("Whimsical").is_err());
}
