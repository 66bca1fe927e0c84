//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the penman binary.

mod commands;
mod generate;

pub use commands::{BlogArgs, Cli, Commands};
pub use generate::{
    handle_generate_command, handle_prompt_command, render_failure, report_failure,
};
