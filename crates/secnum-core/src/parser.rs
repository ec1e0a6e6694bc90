use crate::heading::display_text;
use crate::{Diagnostic, DiagnosticSeverity, Error, Heading, HeadingStyle, ParsedDocument, Result};
use tree_sitter::{Node, Parser, TreeCursor};

/// Tree-sitter based extractor for markdown headings.
///
/// Reuse one parser across documents; tree-sitter keeps internal buffers
/// between calls.
pub struct HeadingParser {
    parser: Parser,
}

impl HeadingParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_md::LANGUAGE.into())
            .map_err(|e| Error::Parse(format!("Failed to set language: {e}")))?;

        Ok(Self { parser })
    }

    /// Extract every ATX and setext heading from `text` in document order.
    pub fn parse(&mut self, text: &str) -> Result<ParsedDocument> {
        let tree = self
            .parser
            .parse(text, None)
            .ok_or_else(|| Error::Parse("Failed to parse markdown".into()))?;

        let root = tree.root_node();
        let mut diagnostics = Vec::new();

        if root.has_error() {
            diagnostics.push(Diagnostic {
                severity: DiagnosticSeverity::Warn,
                message: "Parse tree contains errors, some headings may be missed".into(),
                line: None,
            });
        }

        let mut headings = Vec::new();
        let mut cursor = root.walk();
        walk_tree(&mut cursor, |node| {
            if let Some(heading) = heading_from_node(node, text) {
                headings.push(heading);
            }
        });

        if headings.is_empty() {
            diagnostics.push(Diagnostic {
                severity: DiagnosticSeverity::Warn,
                message: "No headings found in document".into(),
                line: Some(1),
            });
        }

        for diagnostic in &diagnostics {
            tracing::warn!(line = ?diagnostic.line, "{}", diagnostic.message);
        }

        Ok(ParsedDocument {
            headings,
            diagnostics,
            line_count: text.lines().count(),
        })
    }
}

fn walk_tree<F>(cursor: &mut TreeCursor, mut callback: F)
where
    F: FnMut(Node),
{
    loop {
        let node = cursor.node();
        callback(node);

        if cursor.goto_first_child() {
            continue;
        }

        if cursor.goto_next_sibling() {
            continue;
        }

        loop {
            if !cursor.goto_parent() {
                return;
            }
            if cursor.goto_next_sibling() {
                break;
            }
        }
    }
}

fn heading_from_node(node: Node, text: &str) -> Option<Heading> {
    let (depth, style, marker) = match node.kind() {
        "atx_heading" => {
            let (depth, marker) = atx_marker(node)?;
            (depth, HeadingStyle::Atx, Some(marker))
        },
        "setext_heading" => (setext_depth(node)?, HeadingStyle::Setext, None),
        _ => return None,
    };

    let content = node.child_by_field_name("heading_content");
    let raw = match content {
        Some(content) => text[content.byte_range()]
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
        None if style == HeadingStyle::Atx => text[node.byte_range()]
            .trim()
            .trim_start_matches('#')
            .to_string(),
        None => return None,
    };

    let number_offset = match (marker, content) {
        (Some(marker), _) => skip_while(text, marker.start_byte(), |b| b == b'#'),
        (None, Some(content)) => {
            skip_while(text, content.start_byte(), |b| b == b' ' || b == b'\t')
        },
        (None, None) => return None,
    };

    Some(Heading {
        depth,
        text: display_text(&raw),
        line: node.start_position().row + 1,
        style,
        number_offset,
    })
}

fn skip_while(text: &str, start: usize, pred: impl Fn(u8) -> bool) -> usize {
    start
        + text.as_bytes()[start..]
            .iter()
            .take_while(|&&b| pred(b))
            .count()
}

fn atx_marker(node: Node) -> Option<(u8, Node)> {
    let mut cursor = node.walk();
    node.children(&mut cursor).find_map(|child| {
        let depth = match child.kind() {
            "atx_h1_marker" => 1,
            "atx_h2_marker" => 2,
            "atx_h3_marker" => 3,
            "atx_h4_marker" => 4,
            "atx_h5_marker" => 5,
            "atx_h6_marker" => 6,
            _ => return None,
        };
        Some((depth, child))
    })
}

fn setext_depth(node: Node) -> Option<u8> {
    let mut cursor = node.walk();
    node.children(&mut cursor).find_map(|child| match child.kind() {
        "setext_h1_underline" => Some(1),
        "setext_h2_underline" => Some(2),
        _ => None,
    })
}
