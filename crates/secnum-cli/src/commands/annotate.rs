use anyhow::{Context, Result};
use secnum_core::{HeadingParser, OutlineBuilder, OutlineConfig};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Rewrite `file` with section numbers inserted into its headings.
pub fn execute(file: &Path, output: Option<&PathBuf>, config: OutlineConfig) -> Result<()> {
    let source = super::read_markdown(file)?;
    let doc = HeadingParser::new()?.parse(&source)?;
    let outline = OutlineBuilder::new(config).build(&doc);
    let annotated = outline.annotate(&source);

    match output {
        Some(path) => {
            std::fs::write(path, &annotated)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(
                path = %path.display(),
                numbered = outline.numbered().count(),
                "wrote annotated document"
            );
        },
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(annotated.as_bytes())?;
            out.flush()?;
        },
    }
    Ok(())
}
