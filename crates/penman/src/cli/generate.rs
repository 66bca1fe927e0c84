//! Generate and prompt command handlers.

use super::BlogArgs;
use crate::{BlogWriter, PenmanConfig};
use penman_core::{ADVISORY_WORD_COUNT, GenerationParameters};
use penman_error::{GenerationErrorKind, PenmanError, PenmanResult};
use penman_interface::TextGenerator;
use tracing::{debug, info, warn};

/// Handles the generate command: builds parameters, calls the service once
/// and prints the text to stdout.
#[tracing::instrument(skip_all, fields(topic = %args.topic))]
pub async fn handle_generate_command<G: TextGenerator>(
    args: &BlogArgs,
    config: &PenmanConfig,
    writer: &BlogWriter<G>,
) -> PenmanResult<()> {
    let params = args.to_parameters(&config.defaults)?;
    advise_on_length(&params);

    info!("Generating blog post");
    let result = writer.generate(&params).await?;
    println!("{}", result.text());

    if let Some(usage) = result.usage() {
        info!(
            prompt_tokens = *usage.prompt_tokens(),
            candidates_tokens = *usage.candidates_tokens(),
            total_tokens = *usage.total_tokens(),
            "Token usage"
        );
    }
    Ok(())
}

/// Handles the prompt command: prints the request that generate would send.
#[tracing::instrument(skip_all, fields(topic = %args.topic))]
pub fn handle_prompt_command(args: &BlogArgs, config: &PenmanConfig) -> PenmanResult<()> {
    let params = args.to_parameters(&config.defaults)?;
    advise_on_length(&params);

    let request = penman_core::RequestBuilder::build(&params);
    let sampling = request.sampling_config();

    println!("{}", request.prompt_text());
    println!("---");
    println!("model: {}", config.gemini.model());
    println!("temperature: {:.2}", sampling.temperature());
    println!("top_p: {}", sampling.top_p());
    println!("top_k: {}", sampling.top_k());
    println!("max_output_tokens: {}", sampling.max_output_tokens());
    for (category, threshold) in request.safety_thresholds() {
        println!("safety: {:?} -> {:?}", category, threshold);
    }
    Ok(())
}

/// User-facing banner for a failed command.
pub fn render_failure(err: &PenmanError) -> String {
    match err.generation_kind() {
        Some(GenerationErrorKind::InvalidParameters(detail)) => {
            format!("Please fill in all the fields ({}).", detail)
        }
        Some(GenerationErrorKind::SafetyBlocked { reason }) => format!(
            "The post was blocked by content safety filters ({}). Try rephrasing the topic.",
            reason
        ),
        Some(GenerationErrorKind::AuthenticationFailure { .. }) => {
            "The Gemini API rejected the API key. Check GEMINI_API_KEY.".to_string()
        }
        Some(kind @ GenerationErrorKind::TransportFailure(_))
        | Some(kind @ GenerationErrorKind::UnexpectedResponse(_)) => {
            format!("Generation failed: {}", kind)
        }
        None => format!("{}", err),
    }
}

/// Prints the failure banner to stderr.
///
/// The banner is the only user-visible report; the full error goes to the
/// debug log.
pub fn report_failure(err: &PenmanError) {
    debug!(error = %err, "Command failed");
    eprintln!("{}", render_failure(err));
}

fn advise_on_length(params: &GenerationParameters) {
    if params.word_count_advisory() {
        warn!(word_count = *params.word_count(), "Word count outside advisory range");
        eprintln!(
            "warning: {} words is outside the recommended range of {} to {}; continuing anyway",
            params.word_count(),
            ADVISORY_WORD_COUNT.start(),
            ADVISORY_WORD_COUNT.end()
        );
    }
}
