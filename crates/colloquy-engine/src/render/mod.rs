//! Message content rendering: raw chat-message text to typed display blocks.
//!
//! The grammar is a small, fixed one — the shape a chat assistant's
//! structured replies follow — not general markdown: headings, flat lists,
//! inline links, and bold text, with no nesting. Parsing is a pure,
//! synchronous transform over the message string; callers re-invoke it on
//! every render pass and never cache or mutate the result.

pub mod classify;
mod inline;
pub mod types;

use std::sync::LazyLock;

use regex::Regex;

use classify::{ChunkKind, classify_chunk};
pub use types::{Block, Span};

/// Delimiter between paragraph-level chunks: one blank line.
const CHUNK_DELIMITER: &str = "\n\n";

/// Leading run of digits, periods, dashes, and spaces that marks a list
/// item line.
static ITEM_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d.\- ]+").expect("invalid item-marker regex"));

/// Parses one message's full text into its ordered display blocks.
///
/// Every input has a defined output: empty text yields no blocks, and each
/// blank-line-delimited chunk yields exactly one block in source order. A
/// chunk matching no marker falls through to a default paragraph, so
/// malformed markers degrade rather than fail.
pub fn parse_message(text: &str) -> Vec<Block> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(CHUNK_DELIMITER).map(parse_chunk).collect()
}

fn parse_chunk(chunk: &str) -> Block {
    match classify_chunk(chunk) {
        ChunkKind::Heading { level } => Block::Heading {
            level,
            // The marker is `level` hashes plus one space, all ASCII.
            text: chunk[level as usize + 1..].to_string(),
        },
        ChunkKind::BulletList => Block::List {
            ordered: false,
            items: list_items(chunk),
        },
        ChunkKind::NumberedList => Block::List {
            ordered: true,
            items: list_items(chunk),
        },
        ChunkKind::LinkParagraph => Block::LinkParagraph {
            spans: inline::link_spans(chunk),
        },
        ChunkKind::Paragraph => Block::Paragraph {
            spans: inline::bold_spans(chunk),
        },
    }
}

/// One item per line of the chunk, leading marker run stripped.
fn list_items(chunk: &str) -> Vec<String> {
    chunk
        .split('\n')
        .map(|line| ITEM_MARKER.replace(line, "").into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn heading_keeps_embedded_newlines() {
        // Marker detection looks only at the chunk start; a heading chunk
        // with interior line breaks stays one heading.
        assert_eq!(
            parse_message("## A\nB"),
            vec![Block::Heading {
                level: 2,
                text: "A\nB".to_string()
            }]
        );
    }

    #[test]
    fn list_items_strip_marker_runs() {
        assert_eq!(
            parse_message("1. first\n2. second\n10. tenth"),
            vec![Block::List {
                ordered: true,
                items: vec![
                    "first".to_string(),
                    "second".to_string(),
                    "tenth".to_string()
                ],
            }]
        );
    }

    #[test]
    fn bullet_items_with_extra_padding() {
        assert_eq!(
            parse_message("-  one\n- two"),
            vec![Block::List {
                ordered: false,
                items: vec!["one".to_string(), "two".to_string()],
            }]
        );
    }

    #[test]
    fn empty_input_yields_no_blocks() {
        assert_eq!(parse_message(""), Vec::new());
    }

    #[test]
    fn interior_blank_runs_become_empty_paragraphs() {
        // Three consecutive newlines split into "a" and "\nb"; four split
        // into "a", "", "b". Every chunk still yields exactly one block.
        assert_eq!(
            parse_message("a\n\n\n\nb"),
            vec![
                Block::Paragraph {
                    spans: vec![Span::Text("a".to_string())]
                },
                Block::Paragraph {
                    spans: vec![Span::Text("".to_string())]
                },
                Block::Paragraph {
                    spans: vec![Span::Text("b".to_string())]
                },
            ]
        );
    }
}
