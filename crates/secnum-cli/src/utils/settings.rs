//! Resolve numbering settings from config files and CLI flags.
//!
//! Precedence: command-line flags, then `--config`/`SECNUM_CONFIG`, then the
//! platform config file, then built-in defaults.

use anyhow::{Context, Result};
use secnum_core::{Config, OutlineConfig};
use std::path::Path;

use crate::cli::DepthArgs;

/// Load the config file and apply flag overrides.
///
/// `continue_numbering` only turns `reset_per_document` off; when `false` the
/// config file decides.
pub fn resolve_outline_config(
    config_path: Option<&Path>,
    args: &DepthArgs,
    continue_numbering: bool,
) -> Result<OutlineConfig> {
    let config = match config_path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };

    let resolved = apply_overrides(config.outline, args, continue_numbering);
    resolved.validate().context("Invalid numbering options")?;
    tracing::debug!(?resolved, "resolved outline config");
    Ok(resolved)
}

fn apply_overrides(
    mut outline: OutlineConfig,
    args: &DepthArgs,
    continue_numbering: bool,
) -> OutlineConfig {
    if let Some(top_level) = args.top_level {
        outline.top_level = top_level;
        // Keep at least the top level numbered when only --top-level is given.
        if args.max_depth.is_none() && outline.max_depth < top_level {
            outline.max_depth = top_level;
        }
    }
    if let Some(max_depth) = args.max_depth {
        outline.max_depth = max_depth;
    }
    if continue_numbering {
        outline.reset_per_document = false;
    }
    outline
}
