//! Penman - generate blog posts from a topic and a handful of style choices.

use clap::Parser;
use penman::cli::{Cli, Commands, handle_generate_command, handle_prompt_command, report_failure};
use penman::{API_KEY_ENV, BlogWriter, GeminiClient, PenmanConfig, PenmanResult};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    if let Err(e) = penman::init_observability("penman", 60) {
        error!(error = %e, "Failed to initialize metrics");
    }

    let outcome = run(cli).await;
    if let Err(e) = penman::shutdown_observability() {
        error!(error = %e, "Failed to flush metrics");
    }

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_failure(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> PenmanResult<()> {
    let config = PenmanConfig::load(cli.config.as_deref())?;
    info!(model = %config.gemini.model(), "Configuration loaded");

    match cli.command {
        Commands::Prompt(args) => handle_prompt_command(&args, &config),
        Commands::Generate(args) => {
            let api_key = config.resolve_api_key(std::env::var(API_KEY_ENV).ok())?;
            let client = GeminiClient::new(api_key, config.gemini.clone())?;
            let writer = BlogWriter::new(client);
            handle_generate_command(&args, &config, &writer).await
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
