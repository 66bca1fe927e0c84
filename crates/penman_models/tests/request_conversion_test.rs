//! Tests for building the `generateContent` body from a generation request.

use penman_core::{Audience, GenerationParameters, RequestBuilder, Tone};
use penman_models::to_generate_content_request;

fn request(creativity: i32) -> penman_core::GenerationRequest {
    let params = GenerationParameters::builder()
        .topic("Edge Inference")
        .word_count(900)
        .audience(Audience::CommonPeople)
        .tone(Tone::Conversational)
        .creativity(creativity)
        .build()
        .expect("valid parameters");
    RequestBuilder::build(&params)
}

#[test]
fn test_body_has_one_user_turn_with_the_prompt() -> anyhow::Result<()> {
    let req = request(5);
    let body = to_generate_content_request(&req);

    assert_eq!(body.contents().len(), 1);
    let json = serde_json::to_value(&body)?;
    assert_eq!(json["contents"][0]["role"], "user");
    assert_eq!(
        json["contents"][0]["parts"][0]["text"].as_str(),
        Some(req.prompt_text().as_str())
    );
    Ok(())
}

#[test]
fn test_sampling_fields_use_camel_case_names() -> anyhow::Result<()> {
    let json = serde_json::to_value(to_generate_content_request(&request(10)))?;
    let config = &json["generationConfig"];

    assert!((config["temperature"].as_f64().expect("temperature") - 1.0).abs() < 1e-6);
    assert!((config["topP"].as_f64().expect("topP") - 0.95).abs() < 1e-6);
    assert_eq!(config["topK"], 40);
    assert_eq!(config["maxOutputTokens"], 8192);
    assert_eq!(config["responseMimeType"], "text/plain");
    Ok(())
}

#[test]
fn test_every_safety_threshold_becomes_a_setting() -> anyhow::Result<()> {
    let req = request(0);
    let body = to_generate_content_request(&req);

    assert_eq!(body.safety_settings().len(), req.safety_thresholds().len());
    let json = serde_json::to_value(&body)?;
    let settings = json["safetySettings"].as_array().expect("safety settings");
    for category in [
        "HARM_CATEGORY_SEXUALLY_EXPLICIT",
        "HARM_CATEGORY_DANGEROUS_CONTENT",
        "HARM_CATEGORY_HARASSMENT",
    ] {
        assert!(
            settings
                .iter()
                .any(|s| s["category"] == category && s["threshold"] == "BLOCK_MEDIUM_AND_ABOVE"),
            "missing {category}"
        );
    }
    Ok(())
}
