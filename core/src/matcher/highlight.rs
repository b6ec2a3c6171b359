//! Greedy subsequence highlighting of matched filename characters
//!
//! This is deliberately not the scoring algorithm. It walks the text once,
//! consuming the normalized query character by character (gaps allowed), and
//! emits a span every time the whole query has been consumed. Multi-word
//! queries never complete because a single text character never normalizes to
//! a space.

use super::text::{normalize, normalize_char};
use serde::{Deserialize, Serialize};

/// Half-open range of character (not byte) indices into the original text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
}

/// A run of the original text, flagged when it falls inside a span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

/// Compute the spans of `text` to emphasise for `query`
pub fn highlight_spans(text: &str, query: &str) -> Vec<HighlightSpan> {
    let target: Vec<char> = normalize(query).chars().collect();
    if target.is_empty() {
        return Vec::new();
    }

    let mut spans = Vec::new();
    let mut pos = 0;
    let mut run_start = 0;

    for (i, ch) in text.chars().enumerate() {
        if normalize_char(ch) != Some(target[pos]) {
            continue;
        }

        if pos == 0 {
            run_start = i;
        }
        pos += 1;

        if pos == target.len() {
            spans.push(HighlightSpan {
                start: run_start,
                end: i + 1,
            });
            pos = 0;
        }
    }

    spans
}

/// Split `text` into alternating plain and highlighted segments
pub fn segments<'a>(text: &'a str, spans: &[HighlightSpan]) -> Vec<Segment<'a>> {
    // Byte offset of every char boundary, including the end of the text.
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(b, _)| b)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_count = boundaries.len() - 1;

    let mut result = Vec::new();
    let mut cursor = 0;

    for span in spans {
        let start = span.start.min(char_count).max(cursor);
        let end = span.end.min(char_count);
        if start >= end {
            continue;
        }

        if cursor < start {
            result.push(Segment {
                text: &text[boundaries[cursor]..boundaries[start]],
                highlighted: false,
            });
        }
        result.push(Segment {
            text: &text[boundaries[start]..boundaries[end]],
            highlighted: true,
        });
        cursor = end;
    }

    if cursor < char_count {
        result.push(Segment {
            text: &text[boundaries[cursor]..],
            highlighted: false,
        });
    }

    result
}

/// Wrap every highlighted span of `text` between `open` and `close`
pub fn render_highlighted(text: &str, query: &str, open: &str, close: &str) -> String {
    let spans = highlight_spans(text, query);

    let mut out = String::with_capacity(text.len());
    for segment in segments(text, &spans) {
        if segment.highlighted {
            out.push_str(open);
            out.push_str(segment.text);
            out.push_str(close);
        } else {
            out.push_str(segment.text);
        }
    }
    out
}
