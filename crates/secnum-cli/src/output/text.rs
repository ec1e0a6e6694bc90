//! Text output formatting

use anyhow::Result;
use colored::Colorize;
use secnum_core::OutlineEntry;
use std::io::Write;

use super::FileOutline;

pub struct TextFormatter {
    top_level: u8,
    include_unnumbered: bool,
}

impl TextFormatter {
    pub const fn new(top_level: u8, include_unnumbered: bool) -> Self {
        Self {
            top_level,
            include_unnumbered,
        }
    }

    pub fn write<W: Write>(&self, out: &mut W, outlines: &[FileOutline<'_>]) -> Result<()> {
        let show_headers = outlines.len() > 1;

        for (idx, fo) in outlines.iter().enumerate() {
            if show_headers {
                if idx > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "{}", fo.file.bold())?;
            }

            let mut printed = 0usize;
            for entry in &fo.outline.entries {
                if let Some(line) = self.format_entry(entry) {
                    writeln!(out, "{line}")?;
                    printed += 1;
                }
            }

            if printed == 0 {
                writeln!(out, "{}", "(no numbered headings)".dimmed())?;
            }
        }
        Ok(())
    }

    fn format_entry(&self, entry: &OutlineEntry) -> Option<String> {
        let indent = "  ".repeat(usize::from(entry.depth.saturating_sub(self.top_level)));
        let location = format!("L{}", entry.line).bright_black();

        match &entry.number {
            Some(number) => Some(format!(
                "{indent}{} {}  {location}",
                number.green().bold(),
                entry.text
            )),
            None if self.include_unnumbered => Some(format!(
                "{indent}{} {}  {location}",
                "-".dimmed(),
                entry.text.dimmed()
            )),
            None => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secnum_core::{HeadingParser, Outline, OutlineBuilder, OutlineConfig};

    fn render(sources: &[(&str, &str)], include_unnumbered: bool) -> String {
        colored::control::set_override(false);
        let mut parser = HeadingParser::new().unwrap();
        let mut builder = OutlineBuilder::new(OutlineConfig::default());
        let built: Vec<(String, Outline)> = sources
            .iter()
            .map(|(file, src)| {
                let doc = parser.parse(src).unwrap();
                ((*file).to_string(), builder.build(&doc))
            })
            .collect();
        let outlines: Vec<FileOutline<'_>> = built
            .iter()
            .map(|(file, outline)| FileOutline {
                file: file.clone(),
                outline,
            })
            .collect();

        let mut buf = Vec::new();
        TextFormatter::new(1, include_unnumbered)
            .write(&mut buf, &outlines)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_single_file_outline() {
        let text = render(&[("a.md", "# Intro\n## Goals\n### Aside\n")], false);
        assert_eq!(text, "1 Intro  L1\n  1.1 Goals  L2\n");
    }

    #[test]
    fn test_unnumbered_entries_shown_with_all() {
        let text = render(&[("a.md", "# Intro\n### Aside\n")], true);
        assert_eq!(text, "1 Intro  L1\n    - Aside  L2\n");
    }

    #[test]
    fn test_multiple_files_get_headers() {
        let text = render(&[("a.md", "# A\n"), ("b.md", "plain\n")], false);
        assert_eq!(text, "a.md\n1 A  L1\n\nb.md\n(no numbered headings)\n");
    }
}
