//! Numbered outlines built from parsed headings.
//!
//! [`OutlineBuilder`] maps each heading's markdown depth onto a counter level
//! and asks its [`SectionCounter`] for a number. Depth `top_level` becomes
//! level 1; deeper headings up to `max_depth` become subsections. Headings
//! outside that window stay in the outline without a number and leave the
//! counter untouched.
//!
//! ```rust
//! use secnum_core::{HeadingParser, OutlineBuilder, OutlineConfig};
//!
//! let source = "# Intro\n## Goals\n# Usage\n## Flags\n";
//! let doc = HeadingParser::new()?.parse(source)?;
//! let outline = OutlineBuilder::new(OutlineConfig::default()).build(&doc);
//!
//! let numbers: Vec<_> = outline.entries.iter().filter_map(|e| e.number.as_deref()).collect();
//! assert_eq!(numbers, ["1", "1.1", "2", "2.2"]);
//! assert!(outline.annotate(source).starts_with("# 1 Intro\n## 1.1 Goals\n"));
//! # Ok::<(), secnum_core::Error>(())
//! ```

use crate::{
    Diagnostic, DiagnosticSeverity, HeadingStyle, OutlineConfig, ParsedDocument, SectionCounter,
    heading,
};
use serde::{Deserialize, Serialize};

/// One heading in a numbered outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Section number, or `None` when the depth is outside the numbered window.
    pub number: Option<String>,
    /// Markdown depth, 1 through 6.
    pub depth: u8,
    /// Counter level passed for this heading (`depth - top_level + 1`).
    pub level: i64,
    pub text: String,
    /// Anchor slug for linking.
    pub anchor: String,
    /// 1-based source line.
    pub line: usize,
    pub style: HeadingStyle,
    /// Byte offset in the source where the number is inserted.
    #[serde(skip)]
    pub number_offset: usize,
}

/// Numbered headings for one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Outline {
    pub entries: Vec<OutlineEntry>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Outline {
    /// Entries that received a number.
    pub fn numbered(&self) -> impl Iterator<Item = &OutlineEntry> {
        self.entries.iter().filter(|entry| entry.number.is_some())
    }

    /// Rewrite `source` with each numbered heading prefixed by its number.
    ///
    /// ATX headings get the number after the marker (`## 1.1 Setup`); setext
    /// headings get it in front of their content. Container prefixes such as
    /// `> ` or `- ` stay in front. `source` must be the text this outline was
    /// built from; entries whose offset does not fit it are skipped.
    pub fn annotate(&self, source: &str) -> String {
        let mut inserts: Vec<(usize, &str, HeadingStyle)> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let number = entry.number.as_deref()?;
                source
                    .is_char_boundary(entry.number_offset)
                    .then_some((entry.number_offset, number, entry.style))
            })
            .collect();
        inserts.sort_by_key(|(offset, ..)| *offset);

        let extra: usize = inserts.iter().map(|(_, number, _)| number.len() + 1).sum();
        let mut output = String::with_capacity(source.len() + extra);
        let mut copied = 0;
        for (offset, number, style) in inserts {
            output.push_str(&source[copied..offset]);
            match style {
                HeadingStyle::Atx => {
                    output.push(' ');
                    output.push_str(number);
                },
                HeadingStyle::Setext => {
                    output.push_str(number);
                    output.push(' ');
                },
            }
            copied = offset;
        }
        output.push_str(&source[copied..]);
        output
    }
}

/// Assigns section numbers to parsed documents.
///
/// One builder can number several documents in sequence. With
/// `reset_per_document` disabled the counter carries over between calls.
#[derive(Debug, Clone)]
pub struct OutlineBuilder {
    config: OutlineConfig,
    counter: SectionCounter,
}

impl OutlineBuilder {
    pub const fn new(config: OutlineConfig) -> Self {
        Self {
            config,
            counter: SectionCounter::new(),
        }
    }

    pub const fn config(&self) -> &OutlineConfig {
        &self.config
    }

    /// Current counter state.
    pub const fn counter(&self) -> &SectionCounter {
        &self.counter
    }

    /// Number every heading in `doc`.
    pub fn build(&mut self, doc: &ParsedDocument) -> Outline {
        if self.config.reset_per_document {
            self.counter.reset();
        }

        let top_level = i64::from(self.config.top_level);
        let entries: Vec<OutlineEntry> = doc
            .headings
            .iter()
            .map(|heading| {
                let level = i64::from(heading.depth) - top_level + 1;
                let in_window = heading.depth >= self.config.top_level
                    && heading.depth <= self.config.max_depth;
                let number = in_window.then(|| self.counter.increment_and_get(level));

                if let Some(number) = &number {
                    tracing::debug!(line = heading.line, %number, text = %heading.text, "numbered heading");
                }

                OutlineEntry {
                    number,
                    depth: heading.depth,
                    level,
                    text: heading.text.clone(),
                    anchor: heading::slugify(&heading.text),
                    line: heading.line,
                    style: heading.style,
                    number_offset: heading.number_offset,
                }
            })
            .collect();

        let mut diagnostics = doc.diagnostics.clone();
        let skipped = entries.iter().filter(|e| e.number.is_none()).count();
        if skipped > 0 {
            diagnostics.push(Diagnostic {
                severity: DiagnosticSeverity::Info,
                message: format!(
                    "{skipped} heading(s) outside numbered depths {}-{}",
                    self.config.top_level, self.config.max_depth
                ),
                line: None,
            });
        }

        Outline {
            entries,
            diagnostics,
        }
    }
}
