//! Type conversions between Penman and Gemini formats, and classification
//! of Gemini responses.

use crate::gemini::dto::{
    ApiErrorEnvelope, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    Part, SafetySetting,
};
use penman_core::{GenerationRequest, GenerationResult, TokenUsage};
use penman_error::{GenerationError, GenerationErrorKind};
use tracing::{debug, warn};

/// Finish reasons that mean the output was withheld by a content filter.
const SAFETY_FINISH_REASONS: &[&str] = &["SAFETY", "PROHIBITED_CONTENT", "BLOCKLIST", "SPII"];

/// Converts a Penman request into a `generateContent` body.
pub fn to_generate_content_request(req: &GenerationRequest) -> GenerateContentRequest {
    let sampling = req.sampling_config();

    let contents = vec![Content {
        role: Some("user".to_string()),
        parts: vec![Part {
            text: Some(req.prompt_text().clone()),
        }],
    }];

    let generation_config = GenerationConfig {
        temperature: *sampling.temperature(),
        top_p: *sampling.top_p(),
        top_k: *sampling.top_k(),
        max_output_tokens: *sampling.max_output_tokens(),
        response_mime_type: sampling.response_mime_type().clone(),
    };

    let safety_settings = req
        .safety_thresholds()
        .iter()
        .map(|(category, threshold)| SafetySetting {
            category: *category,
            threshold: *threshold,
        })
        .collect::<Vec<_>>();

    GenerateContentRequest::new(contents, generation_config, safety_settings)
}

/// Interprets a received HTTP response.
///
/// Success yields the first candidate's text, its parts concatenated in
/// order. A prompt block or a safety finish reason yields `SafetyBlocked`
/// even when partial text is present. Credential rejections yield
/// `AuthenticationFailure`; timeouts, throttling and server errors yield
/// `TransportFailure`; anything else yields `UnexpectedResponse`.
///
/// # Examples
///
/// ```
/// use penman_models::interpret_response;
/// use penman_error::GenerationErrorKind;
///
/// let ok = interpret_response(
///     200,
///     r#"{"candidates":[{"content":{"parts":[{"text":"Hello"}]},"finishReason":"STOP"}]}"#,
/// )
/// .unwrap();
/// assert_eq!(ok.text(), "Hello");
///
/// let blocked = interpret_response(200, r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#)
///     .unwrap_err();
/// assert!(matches!(blocked.kind(), GenerationErrorKind::SafetyBlocked { .. }));
/// ```
pub fn interpret_response(status: u16, body: &str) -> Result<GenerationResult, GenerationError> {
    if (200..300).contains(&status) {
        from_success_body(body)
    } else {
        Err(classify_error_status(status, body))
    }
}

fn from_success_body(body: &str) -> Result<GenerationResult, GenerationError> {
    let response: GenerateContentResponse = serde_json::from_str(body).map_err(|e| {
        warn!(error = %e, "Response body is not a generateContent response");
        GenerationError::new(GenerationErrorKind::UnexpectedResponse(format!(
            "Failed to parse JSON: {}",
            e
        )))
    })?;

    if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|feedback| feedback.block_reason.clone())
    {
        warn!(reason = %reason, "Prompt blocked by safety filters");
        return Err(GenerationError::new(GenerationErrorKind::SafetyBlocked {
            reason,
        }));
    }

    let candidate = response.candidates.first().ok_or_else(|| {
        GenerationError::new(GenerationErrorKind::UnexpectedResponse(
            "No candidates in response".to_string(),
        ))
    })?;

    if let Some(reason) = candidate
        .finish_reason
        .as_deref()
        .filter(|reason| SAFETY_FINISH_REASONS.contains(reason))
    {
        warn!(reason = %reason, "Candidate withheld by safety filters");
        return Err(GenerationError::new(GenerationErrorKind::SafetyBlocked {
            reason: reason.to_string(),
        }));
    }

    let text = candidate
        .content
        .as_ref()
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|part| part.text.as_deref())
                .collect::<String>()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(GenerationError::new(
            GenerationErrorKind::UnexpectedResponse(format!(
                "Candidate contained no text (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("none")
            )),
        ));
    }

    let usage = response.usage_metadata.as_ref().and_then(|u| {
        match (
            u.prompt_token_count,
            u.candidates_token_count,
            u.total_token_count,
        ) {
            (Some(prompt), Some(candidates), Some(total)) => {
                Some(TokenUsage::new(prompt, candidates, total))
            }
            _ => None,
        }
    });

    debug!(text_len = text.len(), ?usage, "Extracted generated text");
    Ok(GenerationResult::new(text).with_usage(usage))
}

fn classify_error_status(status: u16, body: &str) -> GenerationError {
    let error = serde_json::from_str::<ApiErrorEnvelope>(body)
        .map(|envelope| envelope.error)
        .unwrap_or_default();
    let message = error
        .message
        .clone()
        .unwrap_or_else(|| body.trim().to_string());

    let kind = match status {
        401 | 403 => GenerationErrorKind::AuthenticationFailure {
            status_code: status,
            message,
        },
        400 if reports_invalid_key(body, error.status.as_deref(), &message) => {
            GenerationErrorKind::AuthenticationFailure {
                status_code: status,
                message,
            }
        }
        408 | 429 | 500..=599 => {
            GenerationErrorKind::TransportFailure(format!("HTTP {}: {}", status, message))
        }
        _ => GenerationErrorKind::UnexpectedResponse(format!("HTTP {}: {}", status, message)),
    };

    warn!(status, kind = kind.label(), "Gemini returned an error status");
    GenerationError::new(kind)
}

fn reports_invalid_key(body: &str, status: Option<&str>, message: &str) -> bool {
    matches!(status, Some("UNAUTHENTICATED") | Some("PERMISSION_DENIED"))
        || body.contains("API_KEY_INVALID")
        || message.contains("API key not valid")
}
