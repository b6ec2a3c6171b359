//! Relevance scoring and ranking of filenames against a query

use super::text::normalize;
use serde::{Deserialize, Serialize};

/// Bonus when the normalized query appears contiguously in the filename
pub const SUBSTRING_BONUS: u32 = 1000;

/// Bonus when the normalized filename starts with the normalized query
pub const PREFIX_BONUS: u32 = 500;

/// Per-word bonus when every query word is present
pub const ALL_WORDS_BONUS: u32 = 100;

/// Per-word bonus when only some query words are present
pub const SOME_WORDS_BONUS: u32 = 10;

/// A filename that matched a query, with its relevance score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Filename as it appears in the media folder
    pub filename: String,

    /// Relevance score, always greater than zero for a returned match
    pub score: u32,
}

/// A query normalized once and reused across every candidate
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    normalized: String,
    words: Vec<String>,
}

impl PreparedQuery {
    /// Normalize and split a raw query
    pub fn new(query: &str) -> Self {
        let normalized = normalize(query);
        let words = normalized
            .split(' ')
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();

        Self { normalized, words }
    }

    /// Whether the query has no words left after normalization
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The normalized query text
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Score a filename against this query
    pub fn score(&self, filename: &str) -> u32 {
        if self.is_empty() {
            return 0;
        }

        let normalized_filename = normalize(filename);
        let mut score = 0;

        if normalized_filename.contains(&self.normalized) {
            score += SUBSTRING_BONUS;
        }

        if normalized_filename.starts_with(&self.normalized) {
            score += PREFIX_BONUS;
        }

        let words_found = self
            .words
            .iter()
            .filter(|word| normalized_filename.contains(word.as_str()))
            .count() as u32;

        if words_found as usize == self.words.len() {
            score += ALL_WORDS_BONUS * words_found;
        } else {
            score += SOME_WORDS_BONUS * words_found;
        }

        score
    }
}

/// Score a single filename against a query; zero means no match
pub fn score(filename: &str, query: &str) -> u32 {
    PreparedQuery::new(query).score(filename)
}

/// Rank filenames against a query
///
/// Zero-score filenames are dropped. The sort is stable, so equal scores keep
/// the order of `filenames`. Duplicate names are scored independently.
pub fn rank<S: AsRef<str>>(filenames: &[S], query: &str) -> Vec<MatchResult> {
    let prepared = PreparedQuery::new(query);
    if prepared.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<MatchResult> = filenames
        .iter()
        .filter_map(|filename| {
            let filename = filename.as_ref();
            let score = prepared.score(filename);
            (score > 0).then(|| MatchResult {
                filename: filename.to_string(),
                score,
            })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_scores_zero() {
        assert_eq!(score("cat.png", ""), 0);
        assert_eq!(score("cat.png", "  _-. "), 0);
        assert!(rank(&["cat.png", "dog.png"], "").is_empty());
        assert!(rank(&["cat.png"], "?!").is_empty());
    }

    #[test]
    fn test_additive_rule() {
        assert_eq!(score("cat_photo.png", "cat"), 1600);
        assert_eq!(score("catalog.png", "cat"), 1600);
        // substring but not prefix
        assert_eq!(score("my_cat.png", "cat"), 1100);
        // all words present, not contiguous
        assert_eq!(score("photo_of_cat.png", "cat photo"), 200);
        // one of two words present
        assert_eq!(score("cat.png", "cat dog"), 10);
        assert_eq!(score("dog.png", "cat"), 0);
    }

    #[test]
    fn test_query_is_normalized() {
        assert_eq!(score("Cat_Photo.png", "CAT-photo"), 1700);
        assert_eq!(score("cat_photo.png", "  cat   photo "), 1700);
    }

    #[test]
    fn test_rank_example_tie_keeps_input_order() {
        let files = ["cat_photo.png", "dog.png", "catalog.png"];
        let results = rank(&files, "cat");

        assert_eq!(
            results,
            vec![
                MatchResult {
                    filename: "cat_photo.png".to_string(),
                    score: 1600
                },
                MatchResult {
                    filename: "catalog.png".to_string(),
                    score: 1600
                },
            ]
        );

        let reversed = ["catalog.png", "dog.png", "cat_photo.png"];
        let names: Vec<_> = rank(&reversed, "cat")
            .into_iter()
            .map(|m| m.filename)
            .collect();
        assert_eq!(names, vec!["catalog.png", "cat_photo.png"]);
    }

    #[test]
    fn test_rank_orders_by_score_descending() {
        let files = ["old_cat.png", "a_cat_photo.png", "cat_photo.png", "photo.png"];
        let results = rank(&files, "cat photo");
        let names: Vec<_> = results.iter().map(|m| m.filename.as_str()).collect();

        assert_eq!(
            names,
            vec!["cat_photo.png", "a_cat_photo.png", "old_cat.png", "photo.png"]
        );
        assert_eq!(results[0].score, 1700);
        assert_eq!(results[1].score, 1200);
        assert_eq!(results[2].score, 10);
        assert_eq!(results[3].score, 10);
    }

    #[test]
    fn test_rank_keeps_duplicates() {
        let files = ["cat.png", "cat.png"];
        assert_eq!(rank(&files, "cat").len(), 2);
    }

    #[test]
    fn test_rank_accepts_owned_strings() {
        let files = vec!["Cat.PNG".to_string()];
        let results = rank(&files, "cat");
        assert_eq!(results[0].filename, "Cat.PNG");
    }
}
