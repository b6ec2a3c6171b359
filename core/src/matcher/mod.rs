//! Filename matching: normalization, scoring, ranking and highlighting
//!
//! Everything here is pure. The same (filename, query) pair always produces
//! the same score, and nothing is cached between calls.

pub mod highlight;
pub mod scoring;
pub mod text;

pub use highlight::{highlight_spans, render_highlighted, segments, HighlightSpan, Segment};
pub use scoring::{rank, score, MatchResult, PreparedQuery};
pub use text::normalize;

/// Stateless matcher handle for hosts that prefer a value over free functions
#[derive(Debug, Clone, Copy, Default)]
pub struct TextMatcher;

impl TextMatcher {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, text: &str) -> String {
        normalize(text)
    }

    pub fn score(&self, filename: &str, query: &str) -> u32 {
        score(filename, query)
    }

    pub fn rank<S: AsRef<str>>(&self, filenames: &[S], query: &str) -> Vec<MatchResult> {
        rank(filenames, query)
    }

    pub fn highlight_spans(&self, text: &str, query: &str) -> Vec<HighlightSpan> {
        highlight_spans(text, query)
    }
}
