//! Text normalization shared by scoring and highlighting

use regex::Regex;
use std::sync::LazyLock;

/// Anything that is neither a word character nor whitespace
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("static pattern is valid"));

/// Normalize text for searching
///
/// Underscores and hyphens become spaces, every character outside the
/// Unicode word/whitespace classes is dropped, the result is lowercased and
/// whitespace runs collapse to single spaces with no leading or trailing
/// space.
pub fn normalize(text: &str) -> String {
    let spaced = text.replace(['_', '-'], " ");
    let stripped = NON_WORD.replace_all(&spaced, "");
    let lowered = stripped.to_lowercase();

    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a single character, returning it only if it normalizes to
/// exactly one character
pub(crate) fn normalize_char(ch: char) -> Option<char> {
    let mut buf = [0u8; 4];
    let normalized = normalize(ch.encode_utf8(&mut buf));

    let mut chars = normalized.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
