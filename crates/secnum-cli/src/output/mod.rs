//! # Output Formatting
//!
//! - **Text**: indented outline with colored numbers
//! - **JSON**: one pretty-printed array with an object per file
//! - **JSONL**: one JSON object per heading, tagged with its file
//!
//! ```bash
//! secnum outline guide.md --format jsonl | jq -r '.number'
//! ```

mod json;
mod text;

use anyhow::Result;
use secnum_core::Outline;
use serde::Serialize;
use std::io::Write;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Output format options supported by the CLI
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Indented text outline (default)
    Text,
    /// Single JSON array
    Json,
    /// Newline-delimited JSON, one heading per line
    Jsonl,
}

impl OutputFormat {
    /// Whether the format is meant for machines rather than terminals.
    pub const fn is_machine_readable(self) -> bool {
        matches!(self, Self::Json | Self::Jsonl)
    }
}

/// An outline paired with the file it came from.
#[derive(Debug, Serialize)]
pub struct FileOutline<'a> {
    pub file: String,
    #[serde(flatten)]
    pub outline: &'a Outline,
}

/// Render outlines in the requested format.
pub fn write_outlines<W: Write>(
    out: &mut W,
    outlines: &[FileOutline<'_>],
    format: OutputFormat,
    include_unnumbered: bool,
    top_level: u8,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            TextFormatter::new(top_level, include_unnumbered).write(out, outlines)
        },
        OutputFormat::Json => JsonFormatter::write_array(out, outlines, include_unnumbered),
        OutputFormat::Jsonl => JsonFormatter::write_lines(out, outlines, include_unnumbered),
    }
}
