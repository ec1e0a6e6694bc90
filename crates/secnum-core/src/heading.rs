//! Heading text cleanup and anchor slugs.

use html_escape::decode_html_entities;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Clean raw heading markup into display text.
///
/// - Markdown links (`[Label](url)`) are reduced to `Label`
/// - Empty HTML anchors (`<a id="foo"></a>`) and surrounding tags are removed
/// - HTML entities are decoded
/// - A closing ATX sequence (`## Title ##`) is dropped
pub fn display_text(raw: &str) -> String {
    let without_closing = strip_closing_sequence(raw.trim());
    let stripped = strip_links_and_anchors(without_closing);
    decode_html_entities(&stripped).trim().to_string()
}

/// Build a lowercase, hyphen-separated anchor slug.
///
/// Diacritics are removed and every run of non-alphanumeric characters
/// becomes a single `-`.
///
/// ```rust
/// use secnum_core::heading::slugify;
///
/// assert_eq!(slugify("Getting Started: Über-fast!"), "getting-started-uber-fast");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for ch in text.nfkd() {
        if is_combining_mark(ch) {
            continue;
        }
        for lower in ch.to_lowercase() {
            if lower.is_alphanumeric() {
                if pending_dash && !slug.is_empty() {
                    slug.push('-');
                }
                pending_dash = false;
                slug.push(lower);
            } else {
                pending_dash = true;
            }
        }
    }

    slug
}

fn strip_closing_sequence(text: &str) -> &str {
    let trimmed = text.trim_end_matches('#');
    if trimmed.len() == text.len() {
        return text;
    }
    // A closing sequence must be preceded by whitespace, otherwise it is content (`C#`).
    if trimmed.is_empty() || trimmed.ends_with([' ', '\t']) {
        trimmed.trim_end()
    } else {
        text
    }
}

fn strip_links_and_anchors(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let bytes = input.as_bytes();
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'[' => {
                if let Some((label_end, link_end)) = find_markdown_link(bytes, i) {
                    output.push_str(&input[copied..i]);
                    output.push_str(&input[i + 1..label_end]);
                    i = link_end + 1;
                    copied = i;
                    continue;
                }
                i += 1;
            },
            b'<' => {
                if let Some(next_gt) = memchr::memchr(b'>', &bytes[i + 1..]).map(|pos| pos + i + 1)
                {
                    let tag = input[i + 1..next_gt].trim().to_ascii_lowercase();
                    if tag.starts_with("a ") || tag == "a" || tag.starts_with("/a") {
                        output.push_str(&input[copied..i]);
                        i = next_gt + 1;
                        copied = i;
                        continue;
                    }
                }
                i += 1;
            },
            _ => i += 1,
        }
    }

    output.push_str(&input[copied..]);
    output
}

fn find_markdown_link(bytes: &[u8], start: usize) -> Option<(usize, usize)> {
    let mut idx = start + 1;
    while idx < bytes.len() {
        match bytes[idx] {
            b'\\' => idx += 2,
            b']' => {
                if bytes.get(idx + 1) == Some(&b'(') {
                    return find_matching_paren(bytes, idx + 2).map(|close| (idx, close));
                }
                return None;
            },
            _ => idx += 1,
        }
    }
    None
}

fn find_matching_paren(bytes: &[u8], mut pos: usize) -> Option<usize> {
    let mut depth = 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            b'(' => {
                depth += 1;
                pos += 1;
            },
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(pos);
                }
                pos += 1;
            },
            _ => pos += 1,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_reduced_to_labels() {
        assert_eq!(
            display_text("See [the guide](https://example.com/a_(b)) now"),
            "See the guide now"
        );
    }

    #[test]
    fn test_unclosed_link_is_kept() {
        assert_eq!(display_text("[not a link"), "[not a link");
        assert_eq!(display_text("[label] (gap)"), "[label] (gap)");
    }

    #[test]
    fn test_anchor_tags_removed() {
        assert_eq!(
            display_text("<a id=\"setup\"></a>Setup <b>bold</b>"),
            "Setup <b>bold</b>"
        );
    }

    #[test]
    fn test_entities_decoded() {
        assert_eq!(display_text("Fish &amp; Chips"), "Fish & Chips");
    }

    #[test]
    fn test_closing_sequence_dropped() {
        assert_eq!(display_text("Title ##"), "Title");
        assert_eq!(display_text("Learn C#"), "Learn C#");
        assert_eq!(display_text("##"), "");
    }

    #[test]
    fn test_non_ascii_preserved() {
        assert_eq!(display_text("Résumé [über](x) 日本"), "Résumé über 日本");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello, World"), "hello-world");
        assert_eq!(slugify("  --Leading and trailing--  "), "leading-and-trailing");
        assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
        assert_eq!(slugify("v1.2 API"), "v1-2-api");
        assert_eq!(slugify("!!!"), "");
    }
}
