use std::sync::LazyLock;

use regex::Regex;

use super::types::Span;

/// `[label](url)` — lazy groups, so the label and url stop at the first
/// closer and never cross a line break.
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("invalid link regex"));

/// Two-character delimiter bounding bold text.
const BOLD_DELIMITER: &str = "**";

/// Whether the chunk contains a complete link pattern anywhere.
pub(crate) fn contains_link(chunk: &str) -> bool {
    LINK.is_match(chunk)
}

/// Splits a link-bearing chunk into alternating `Text` and `Link` spans.
///
/// Non-matching segments are kept as `Text` spans in original order, even
/// when empty (a chunk that starts or ends with a link, or holds two
/// adjacent links, produces empty text segments between them). No other
/// inline processing applies: bold markers in a link chunk stay literal.
pub(crate) fn link_spans(chunk: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut last = 0;
    for caps in LINK.captures_iter(chunk) {
        let Some(m) = caps.get(0) else { continue };
        spans.push(Span::Text(chunk[last..m.start()].to_string()));
        spans.push(Span::Link {
            label: caps[1].to_string(),
            url: caps[2].to_string(),
        });
        last = m.end();
    }
    spans.push(Span::Text(chunk[last..].to_string()));
    spans
}

/// Splits a default paragraph chunk on `**` delimiters.
///
/// Even split positions are literal text, odd positions render bold. An odd
/// number of delimiters is not specially handled: the trailing unterminated
/// segment lands on an odd position and becomes bold by position alone.
pub(crate) fn bold_spans(chunk: &str) -> Vec<Span> {
    chunk
        .split(BOLD_DELIMITER)
        .enumerate()
        .map(|(i, segment)| {
            if i % 2 == 1 {
                Span::Bold(segment.to_string())
            } else {
                Span::Text(segment.to_string())
            }
        })
        .collect()
}
