//! Tests for the Gemini client against a local stub server.

mod test_utils;

use penman_core::{Audience, GenerationParameters, RequestBuilder};
use penman_error::GenerationErrorKind;
use penman_interface::TextGenerator;
use penman_models::{GeminiClient, GeminiConfig};
use std::time::Duration;
use test_utils::{StubBehavior, StubServer, closed_port_url};

fn sample_request() -> penman_core::GenerationRequest {
    let params = GenerationParameters::builder()
        .topic("Quantum Computing")
        .word_count(500)
        .audience(Audience::Researchers)
        .keyword("qubits")
        .build()
        .expect("valid parameters");
    RequestBuilder::build(&params)
}

fn client_for(base_url: &str, timeout_secs: u64) -> anyhow::Result<GeminiClient> {
    let config = GeminiConfig::builder()
        .base_url(base_url)
        .model("test-model")
        .timeout_secs(timeout_secs)
        .build()?;
    Ok(GeminiClient::new("test-key", config)?)
}

const SUCCESS_BODY: &str = r#"{
  "candidates": [{
    "content": {"role": "model", "parts": [{"text": "Qubits are "}, {"text": "strange."}]},
    "finishReason": "STOP"
  }],
  "usageMetadata": {"promptTokenCount": 120, "candidatesTokenCount": 4, "totalTokenCount": 124}
}"#;

#[tokio::test]
async fn test_successful_generation_returns_text_unmodified() -> anyhow::Result<()> {
    let server = StubServer::respond(200, SUCCESS_BODY).await?;
    let client = client_for(server.base_url(), 5)?;

    let result = client.generate(&sample_request()).await?;

    assert_eq!(result.text(), "Qubits are strange.");
    let usage = result.usage().expect("usage reported");
    assert_eq!(*usage.total_tokens(), 124);
    assert_eq!(server.connections(), 1);
    Ok(())
}

#[tokio::test]
async fn test_request_carries_prompt_sampling_and_safety() -> anyhow::Result<()> {
    let server = StubServer::respond(200, SUCCESS_BODY).await?;
    let client = client_for(server.base_url(), 5)?;

    client.generate(&sample_request()).await?;

    let raw = server.last_request().expect("request captured");
    let lower = raw.to_lowercase();
    assert!(raw.starts_with("POST /v1beta/models/test-model:generateContent"));
    assert!(lower.contains("x-goog-api-key: test-key"));

    let body_start = raw.find("\r\n\r\n").expect("request head") + 4;
    let body: serde_json::Value = serde_json::from_str(&raw[body_start..])?;
    let prompt = body["contents"][0]["parts"][0]["text"]
        .as_str()
        .expect("prompt text");
    assert!(prompt.contains("Quantum Computing"));
    assert!(prompt.contains("qubits"));
    assert_eq!(body["generationConfig"]["topK"], 40);
    assert_eq!(body["generationConfig"]["maxOutputTokens"], 8192);
    assert_eq!(body["generationConfig"]["responseMimeType"], "text/plain");

    let settings = body["safetySettings"].as_array().expect("safety settings");
    assert_eq!(settings.len(), 4);
    assert!(settings.iter().any(|s| {
        s["category"] == "HARM_CATEGORY_HATE_SPEECH" && s["threshold"] == "BLOCK_LOW_AND_ABOVE"
    }));
    Ok(())
}

#[tokio::test]
async fn test_safety_block_is_not_a_transport_failure() -> anyhow::Result<()> {
    let server =
        StubServer::respond(200, r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#).await?;
    let client = client_for(server.base_url(), 5)?;

    let err = client
        .generate(&sample_request())
        .await
        .expect_err("blocked prompt must not succeed");

    assert!(err.is_safety_blocked());
    assert!(matches!(
        err.generation_kind(),
        Some(GenerationErrorKind::SafetyBlocked { reason }) if reason == "SAFETY"
    ));
    Ok(())
}

#[tokio::test]
async fn test_safety_finish_reason_discards_partial_text() -> anyhow::Result<()> {
    let body = r#"{"candidates": [{
        "content": {"parts": [{"text": "Partial"}]},
        "finishReason": "SAFETY"
    }]}"#;
    let server = StubServer::respond(200, body).await?;
    let client = client_for(server.base_url(), 5)?;

    let err = client
        .generate(&sample_request())
        .await
        .expect_err("partial text must not be returned");
    assert!(err.is_safety_blocked());
    Ok(())
}

#[tokio::test]
async fn test_rejected_credential_is_authentication_failure() -> anyhow::Result<()> {
    let body = r#"{"error": {
        "code": 400,
        "message": "API key not valid. Please pass a valid API key.",
        "status": "INVALID_ARGUMENT",
        "details": [{"reason": "API_KEY_INVALID"}]
    }}"#;
    let server = StubServer::respond(400, body).await?;
    let client = client_for(server.base_url(), 5)?;

    let err = client
        .generate(&sample_request())
        .await
        .expect_err("invalid key");
    assert!(matches!(
        err.generation_kind(),
        Some(GenerationErrorKind::AuthenticationFailure { status_code: 400, .. })
    ));
    Ok(())
}

#[tokio::test]
async fn test_refused_connection_is_transport_failure() -> anyhow::Result<()> {
    let client = client_for(&closed_port_url()?, 5)?;

    let err = client
        .generate(&sample_request())
        .await
        .expect_err("nothing is listening");
    assert!(matches!(
        err.generation_kind(),
        Some(GenerationErrorKind::TransportFailure(_))
    ));
    Ok(())
}

#[tokio::test]
async fn test_timeout_is_transport_failure_without_retry() -> anyhow::Result<()> {
    let server = StubServer::start(StubBehavior::Hang).await?;
    let client = client_for(server.base_url(), 1)?;

    let err = client
        .generate(&sample_request())
        .await
        .expect_err("server never answers");
    assert!(matches!(
        err.generation_kind(),
        Some(GenerationErrorKind::TransportFailure(_))
    ));

    // Give a hypothetical retry time to arrive before counting.
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(server.connections(), 1);
    Ok(())
}

#[tokio::test]
async fn test_server_error_is_attempted_once() -> anyhow::Result<()> {
    let server = StubServer::respond(
        503,
        r#"{"error": {"code": 503, "message": "overloaded", "status": "UNAVAILABLE"}}"#,
    )
    .await?;
    let client = client_for(server.base_url(), 5)?;

    let err = client
        .generate(&sample_request())
        .await
        .expect_err("service unavailable");
    assert!(matches!(
        err.generation_kind(),
        Some(GenerationErrorKind::TransportFailure(_))
    ));
    assert_eq!(server.connections(), 1);
    Ok(())
}

#[test]
fn test_blank_api_key_is_rejected() {
    let result = GeminiClient::new("  ", GeminiConfig::default());
    assert!(result.is_err());
}

#[test]
fn test_debug_output_hides_api_key() -> anyhow::Result<()> {
    let client = GeminiClient::new("super-secret", GeminiConfig::default())?;
    let debug = format!("{:?}", client);
    assert!(!debug.contains("super-secret"));
    assert_eq!(client.provider_name(), "gemini");
    assert_eq!(client.model_name(), "gemini-2.0-flash-exp");
    Ok(())
}
