//! JSON output formatting

use anyhow::Result;
use secnum_core::{Outline, OutlineEntry};
use serde::Serialize;
use std::io::Write;

use super::FileOutline;

pub struct JsonFormatter;

#[derive(Serialize)]
struct EntryLine<'a> {
    file: &'a str,
    #[serde(flatten)]
    entry: &'a OutlineEntry,
}

impl JsonFormatter {
    /// Pretty-printed array with one object per file.
    pub fn write_array<W: Write>(
        out: &mut W,
        outlines: &[FileOutline<'_>],
        include_unnumbered: bool,
    ) -> Result<()> {
        if include_unnumbered {
            serde_json::to_writer_pretty(&mut *out, outlines)?;
        } else {
            let filtered: Vec<Outline> = outlines
                .iter()
                .map(|fo| Outline {
                    entries: fo.outline.numbered().cloned().collect(),
                    diagnostics: fo.outline.diagnostics.clone(),
                })
                .collect();
            let views: Vec<FileOutline<'_>> = outlines
                .iter()
                .zip(&filtered)
                .map(|(fo, outline)| FileOutline {
                    file: fo.file.clone(),
                    outline,
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &views)?;
        }
        writeln!(out)?;
        Ok(())
    }

    /// One compact object per heading.
    pub fn write_lines<W: Write>(
        out: &mut W,
        outlines: &[FileOutline<'_>],
        include_unnumbered: bool,
    ) -> Result<()> {
        for fo in outlines {
            for entry in &fo.outline.entries {
                if entry.number.is_none() && !include_unnumbered {
                    continue;
                }
                let line = EntryLine {
                    file: &fo.file,
                    entry,
                };
                serde_json::to_writer(&mut *out, &line)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secnum_core::{HeadingParser, OutlineBuilder, OutlineConfig};
    use serde_json::Value;

    fn outline(source: &str) -> Outline {
        let doc = HeadingParser::new().unwrap().parse(source).unwrap();
        OutlineBuilder::new(OutlineConfig::default()).build(&doc)
    }

    #[test]
    fn test_lines_tag_each_heading_with_file() {
        let built = outline("# A\n## a\n### skipped\n");
        let outlines = [FileOutline {
            file: "doc.md".into(),
            outline: &built,
        }];

        let mut buf = Vec::new();
        JsonFormatter::write_lines(&mut buf, &outlines, false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let rows: Vec<Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["file"], "doc.md");
        assert_eq!(rows[0]["number"], "1");
        assert_eq!(rows[1]["number"], "1.1");
        assert_eq!(rows[1]["anchor"], "a");
    }

    #[test]
    fn test_array_keeps_unnumbered_when_requested() {
        let built = outline("# A\n### deep\n");
        let outlines = [FileOutline {
            file: "doc.md".into(),
            outline: &built,
        }];

        let mut buf = Vec::new();
        JsonFormatter::write_array(&mut buf, &outlines, true).unwrap();
        let json: Value = serde_json::from_slice(&buf).unwrap();
        let entries = json[0]["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[1]["number"].is_null());

        let mut buf = Vec::new();
        JsonFormatter::write_array(&mut buf, &outlines, false).unwrap();
        let json: Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(json[0]["entries"].as_array().unwrap().len(), 1);
    }
}
