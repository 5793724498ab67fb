use std::sync::LazyLock;

use regex::Regex;

use super::inline;

/// `1.`-style prefix opening a numbered list chunk.
static NUMBERED_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.").expect("invalid numbered-list regex"));

/// Classification of a paragraph-level chunk.
///
/// Patterns aren't mutually exclusive on a syntactic level (a chunk can hold
/// both a link pattern and bold markers), so classification is first-match-
/// wins over a fixed priority: heading markers, then list markers, then the
/// link pattern, then the default paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
    Heading { level: u8 },
    BulletList,
    NumberedList,
    LinkParagraph,
    Paragraph,
}

/// Classifies one chunk by its opening marker (or, for links, by a pattern
/// anywhere in the chunk). Only the chunk start is examined for heading and
/// list markers; later lines never change the classification.
pub fn classify_chunk(chunk: &str) -> ChunkKind {
    if chunk.starts_with("### ") {
        ChunkKind::Heading { level: 3 }
    } else if chunk.starts_with("## ") {
        ChunkKind::Heading { level: 2 }
    } else if chunk.starts_with("# ") {
        ChunkKind::Heading { level: 1 }
    } else if chunk.starts_with("- ") {
        ChunkKind::BulletList
    } else if NUMBERED_PREFIX.is_match(chunk) {
        ChunkKind::NumberedList
    } else if inline::contains_link(chunk) {
        ChunkKind::LinkParagraph
    } else {
        ChunkKind::Paragraph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_markers_by_length() {
        assert_eq!(classify_chunk("# A"), ChunkKind::Heading { level: 1 });
        assert_eq!(classify_chunk("## A"), ChunkKind::Heading { level: 2 });
        assert_eq!(classify_chunk("### A"), ChunkKind::Heading { level: 3 });
    }

    #[test]
    fn marker_without_trailing_space_is_not_a_heading() {
        assert_eq!(classify_chunk("#A"), ChunkKind::Paragraph);
        assert_eq!(classify_chunk("##"), ChunkKind::Paragraph);
    }

    #[test]
    fn four_hashes_is_not_a_heading() {
        // "#### " fails every marker check (the fourth hash sits where the
        // space would be), so the chunk degrades to a paragraph.
        assert_eq!(classify_chunk("#### A"), ChunkKind::Paragraph);
    }

    #[test]
    fn list_markers() {
        assert_eq!(classify_chunk("- one\n- two"), ChunkKind::BulletList);
        assert_eq!(classify_chunk("1. one\n2. two"), ChunkKind::NumberedList);
        assert_eq!(classify_chunk("12.dozen"), ChunkKind::NumberedList);
    }

    #[test]
    fn numbered_needs_digits_then_period() {
        assert_eq!(classify_chunk("1)"), ChunkKind::Paragraph);
        assert_eq!(classify_chunk(".1"), ChunkKind::Paragraph);
    }

    #[test]
    fn link_anywhere_in_chunk_wins_over_bold() {
        assert_eq!(
            classify_chunk("see **the** [docs](http://x)"),
            ChunkKind::LinkParagraph
        );
    }

    #[test]
    fn heading_beats_link() {
        assert_eq!(
            classify_chunk("# [docs](http://x)"),
            ChunkKind::Heading { level: 1 }
        );
    }

    #[test]
    fn bullet_beats_link() {
        assert_eq!(classify_chunk("- [docs](http://x)"), ChunkKind::BulletList);
    }

    #[test]
    fn unclosed_link_falls_through_to_paragraph() {
        assert_eq!(classify_chunk("see [docs](http://x"), ChunkKind::Paragraph);
    }
}
