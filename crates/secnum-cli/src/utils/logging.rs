//! Logging initialization and configuration.
//!
//! This module handles setting up the tracing subscriber and color control
//! based on CLI flags and environment variables.

use anyhow::Result;
use colored::control as color_control;
use is_terminal::IsTerminal;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::cli::Cli;

/// Initialize the logging subsystem based on CLI flags.
///
/// Machine-readable output (JSON/JSONL) drops logging to errors only unless
/// `--verbose` was given, so stdout stays parseable.
pub fn initialize_logging(cli: &Cli) -> Result<()> {
    let machine_output = cli
        .command
        .format()
        .is_some_and(crate::output::OutputFormat::is_machine_readable);

    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet || machine_output {
        Level::ERROR
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(std::io::stderr().is_terminal() && !cli.no_color)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Color control: disable when requested, NO_COLOR is set, stdout is piped, or machine output
    let env_no_color = std::env::var_os("NO_COLOR").is_some();
    if cli.no_color || env_no_color || machine_output || !std::io::stdout().is_terminal() {
        color_control::set_override(false);
    }
    Ok(())
}
