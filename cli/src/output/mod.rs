//! Terminal output for the CLI
//!
//! Formatting lives in [`formatters`]; commands print what it returns.

pub mod formatters;

pub use formatters::{format_match_table, format_open_note, format_rename_summary};
