//! # CLI Structure and Argument Parsing
//!
//! ```bash
//! # Numbered outline of one or more documents
//! secnum outline README.md docs/guide.md
//! secnum outline README.md --format json
//!
//! # Treat `##` as top-level and number down to `###`
//! secnum outline README.md --top-level 2 --max-depth 3
//!
//! # Rewrite a document with numbers inserted into its headings
//! secnum annotate README.md --output README.numbered.md
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Main CLI structure for the `secnum` command
#[derive(Parser, Clone, Debug)]
#[command(name = "secnum")]
#[command(version)]
#[command(about = "secnum - Hierarchical section numbers for markdown", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Path to configuration file. Also via `SECNUM_CONFIG`.
    #[arg(long, global = true, value_name = "FILE", env = "SECNUM_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Depth options that override the `[outline]` config section
#[derive(clap::Args, Clone, Debug, Default)]
pub struct DepthArgs {
    /// Markdown depth numbered as a top-level section (1-6)
    #[arg(long, value_name = "DEPTH")]
    pub top_level: Option<u8>,

    /// Deepest markdown depth that receives a number (1-6)
    #[arg(long, value_name = "DEPTH")]
    pub max_depth: Option<u8>,
}

/// Available subcommands for the `secnum` CLI
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Print the numbered outline of markdown files
    Outline {
        /// Markdown files, numbered in the order given
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Also list headings outside the numbered depth range
        #[arg(long)]
        all: bool,

        /// Continue numbering across files instead of restarting at 1
        #[arg(long)]
        continue_numbering: bool,

        #[command(flatten)]
        depths: DepthArgs,
    },

    /// Insert section numbers into a markdown file's headings
    Annotate {
        /// Markdown file to annotate
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Write to this path instead of stdout
        #[arg(short = 'o', long, value_name = "PATH")]
        output: Option<PathBuf>,

        #[command(flatten)]
        depths: DepthArgs,
    },
}

impl Commands {
    /// Output format requested by the command, if it has one.
    pub const fn format(&self) -> Option<OutputFormat> {
        match self {
            Self::Outline { format, .. } => Some(*format),
            Self::Annotate { .. } => None,
        }
    }
}
