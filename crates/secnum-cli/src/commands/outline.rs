use anyhow::Result;
use secnum_core::{HeadingParser, Outline, OutlineBuilder, OutlineConfig};
use std::io::Write;
use std::path::PathBuf;

use crate::output::{FileOutline, OutputFormat, write_outlines};

/// Number the headings of each file in order and print the outlines.
pub fn execute(
    files: &[PathBuf],
    config: OutlineConfig,
    format: OutputFormat,
    include_unnumbered: bool,
) -> Result<()> {
    let mut parser = HeadingParser::new()?;
    let mut builder = OutlineBuilder::new(config);

    let mut built: Vec<(String, Outline)> = Vec::with_capacity(files.len());
    for path in files {
        let source = super::read_markdown(path)?;
        let doc = parser.parse(&source)?;
        let outline = builder.build(&doc);
        tracing::debug!(
            file = %path.display(),
            headings = outline.entries.len(),
            numbered = outline.numbered().count(),
            "built outline"
        );
        built.push((path.display().to_string(), outline));
    }

    let outlines: Vec<FileOutline<'_>> = built
        .iter()
        .map(|(file, outline)| FileOutline {
            file: file.clone(),
            outline,
        })
        .collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_outlines(
        &mut out,
        &outlines,
        format,
        include_unnumbered,
        builder.config().top_level,
    )?;
    out.flush()?;
    Ok(())
}
