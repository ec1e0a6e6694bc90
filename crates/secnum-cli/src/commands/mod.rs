//! Command implementations for the secnum CLI

mod annotate;
mod outline;

pub use annotate::execute as annotate_file;
pub use outline::execute as print_outline;

use anyhow::{Context, Result};
use std::path::Path;

fn read_markdown(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
