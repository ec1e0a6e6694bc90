//! secnum CLI - numbered outlines for markdown documents
//!
//! Command implementations live in [`commands`]; argument definitions in
//! [`cli`].

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod output;
mod utils;

use cli::{Cli, Commands};
use utils::logging::initialize_logging;
use utils::settings::resolve_outline_config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let config_path = cli.config.as_deref();

    match &cli.command {
        Commands::Outline {
            files,
            format,
            all,
            continue_numbering,
            depths,
        } => {
            let config = resolve_outline_config(config_path, depths, *continue_numbering)?;
            commands::print_outline(files, config, *format, *all)?;
        },

        Commands::Annotate {
            file,
            output,
            depths,
        } => {
            let config = resolve_outline_config(config_path, depths, false)?;
            commands::annotate_file(file, output.as_ref(), config)?;
        },
    }

    Ok(())
}
