//! Formatting of search results and rename summaries

use colored::Colorize;
use medialens_core::matcher::{highlight_spans, segments};
use medialens_core::{Document, MatchResult, RenameOutcome};
use unicode_width::UnicodeWidthStr;

/// Display width of `text`, counting wide characters as two columns
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Pad `text` with spaces to `width` display columns
///
/// `styled` is what gets printed (it may carry escape codes); the padding is
/// computed from the plain `text`.
pub fn pad_to_width(text: &str, styled: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(text));
    format!("{}{}", styled, " ".repeat(padding))
}

/// Filename with the characters matched by `query` styled
pub fn highlight_filename(filename: &str, query: &str) -> String {
    let spans = highlight_spans(filename, query);
    segments(filename, &spans)
        .into_iter()
        .map(|segment| {
            if segment.highlighted {
                segment.text.black().on_yellow().to_string()
            } else {
                segment.text.to_string()
            }
        })
        .collect()
}

/// One line per match: highlighted filename, aligned score
pub fn format_match_table(matches: &[MatchResult], query: &str) -> Vec<String> {
    let name_width = matches
        .iter()
        .map(|m| display_width(&m.filename))
        .max()
        .unwrap_or(0);
    let score_width = matches
        .iter()
        .map(|m| m.score.to_string().len())
        .max()
        .unwrap_or(0);

    matches
        .iter()
        .map(|m| {
            let name = pad_to_width(&m.filename, &highlight_filename(&m.filename, query), name_width);
            let score = format!("{:>width$}", m.score, width = score_width);
            format!("{}  {}", name, score.dimmed())
        })
        .collect()
}

/// The message shown after a rename
pub fn format_rename_summary(outcome: &RenameOutcome) -> String {
    let count = outcome.matched_document_count;
    format!(
        "Renamed file and updated {} note{}: from {} to {}",
        count,
        if count == 1 { "" } else { "s" },
        outcome.original_name,
        outcome.new_name
    )
}

/// The open note as the editor shows it after a rename, one line per field
pub fn format_open_note(document: &Document) -> Vec<String> {
    std::iter::once(format!("Note {}:", document.id))
        .chain(
            document
                .fields
                .iter()
                .enumerate()
                .map(|(index, field)| format!("  [{}] {}", index, field)),
        )
        .collect()
}
