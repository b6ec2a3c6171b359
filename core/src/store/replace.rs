//! Search-and-replace engine shared by every document store

use crate::error::{Result, StoreError};
use regex::{NoExpand, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// How the search text is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceMode {
    /// Treat the search text literally rather than as a regular expression
    pub literal: bool,

    /// Match case exactly
    pub case_sensitive: bool,
}

impl ReplaceMode {
    /// Literal, case-sensitive matching
    pub const LITERAL: ReplaceMode = ReplaceMode {
        literal: true,
        case_sensitive: true,
    };

    /// Regular expression, case-sensitive matching
    pub const PATTERN: ReplaceMode = ReplaceMode {
        literal: false,
        case_sensitive: true,
    };

    pub fn ignore_case(mut self) -> Self {
        self.case_sensitive = false;
        self
    }
}

impl Default for ReplaceMode {
    fn default() -> Self {
        Self::LITERAL
    }
}

#[derive(Debug)]
enum Strategy {
    /// Plain substring replacement
    Plain { search: String },
    /// Compiled expression; literal replacements never expand `$` groups
    Expression { regex: Regex, expand: bool },
}

/// A compiled search/replace operation
#[derive(Debug)]
pub struct Replacer {
    strategy: Strategy,
    replacement: String,
}

impl Replacer {
    pub fn new(search: &str, replacement: &str, mode: ReplaceMode) -> Result<Self> {
        if search.is_empty() {
            return Err(StoreError::EmptySearch.into());
        }

        let strategy = if mode.literal && mode.case_sensitive {
            Strategy::Plain {
                search: search.to_string(),
            }
        } else {
            let pattern = if mode.literal {
                regex::escape(search)
            } else {
                search.to_string()
            };
            let regex = RegexBuilder::new(&pattern)
                .case_insensitive(!mode.case_sensitive)
                .build()
                .map_err(|e| StoreError::InvalidPattern {
                    pattern: search.to_string(),
                    message: e.to_string(),
                })?;
            Strategy::Expression {
                regex,
                expand: !mode.literal,
            }
        };

        Ok(Self {
            strategy,
            replacement: replacement.to_string(),
        })
    }

    /// Apply to one string, returning the new text only if it changed
    pub fn apply(&self, text: &str) -> Option<String> {
        let replaced = match &self.strategy {
            Strategy::Plain { search } => {
                if !text.contains(search.as_str()) {
                    return None;
                }
                text.replace(search.as_str(), &self.replacement)
            }
            Strategy::Expression { regex, expand } => {
                if !regex.is_match(text) {
                    return None;
                }
                if *expand {
                    regex.replace_all(text, self.replacement.as_str()).into_owned()
                } else {
                    regex
                        .replace_all(text, NoExpand(&self.replacement))
                        .into_owned()
                }
            }
        };

        (replaced != text).then_some(replaced)
    }

    /// Apply to every field, returning the full new field list if any changed
    pub fn apply_fields(&self, fields: &[String]) -> Option<Vec<String>> {
        let mut changed = false;
        let updated = fields
            .iter()
            .map(|field| match self.apply(field) {
                Some(new) => {
                    changed = true;
                    new
                }
                None => field.clone(),
            })
            .collect();

        changed.then_some(updated)
    }
}
