use serde::{Deserialize, Serialize};

/// How a heading is written in the markdown source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingStyle {
    /// `#`-prefixed heading.
    Atx,
    /// Heading underlined with `===` or `---`.
    Setext,
}

/// A heading found in a markdown document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Markdown depth, 1 through 6.
    pub depth: u8,
    /// Display text with links, anchors, and entities cleaned up.
    pub text: String,
    /// 1-based line of the heading's first line.
    pub line: usize,
    /// Source syntax.
    pub style: HeadingStyle,
    /// Byte offset in the source where a section number belongs.
    ///
    /// For ATX headings this is the end of the `#` run; for setext headings,
    /// the start of the content. Container prefixes (`> `, `- `) come before it.
    #[serde(skip)]
    pub number_offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    pub message: String,
    pub line: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Warn,
    Info,
}

/// Result of parsing one markdown document.
#[derive(Debug, Clone, Default)]
pub struct ParsedDocument {
    /// Headings in document order.
    pub headings: Vec<Heading>,
    pub diagnostics: Vec<Diagnostic>,
    pub line_count: usize,
}
