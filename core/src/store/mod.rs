//! Document corpus abstraction
//!
//! The corpus belongs to the host. The rest of the crate only sees it through
//! [`DocumentStore`], which lists note ids, reads and writes note fields and
//! performs literal search-and-replace over a set of notes.

pub mod memory;
pub mod replace;
pub mod sqlite;

pub use memory::MemoryStore;
pub use replace::{ReplaceMode, Replacer};
pub use sqlite::SqliteStore;

use crate::error::{Result, StoreError};
use serde::{Deserialize, Serialize};

/// Identifier of a note in the corpus
pub type DocumentId = i64;

/// A note: an id and its ordered text fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub fields: Vec<String>,
}

impl Document {
    pub fn new<S: Into<String>>(id: DocumentId, fields: impl IntoIterator<Item = S>) -> Self {
        Self {
            id,
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Append text to the end of one field
    pub fn append_to_field(&mut self, index: usize, text: &str) -> Result<()> {
        let id = self.id;
        let field = self
            .fields
            .get_mut(index)
            .ok_or(StoreError::FieldOutOfRange { id, index })?;
        field.push_str(text);
        Ok(())
    }
}

/// Storage of notes that the rename protocol rewrites
pub trait DocumentStore {
    /// Ids of every note in the corpus
    fn document_ids(&self) -> Result<Vec<DocumentId>>;

    /// Load one note
    fn document(&self, id: DocumentId) -> Result<Document>;

    /// Replace all fields of one note
    fn update_fields(&mut self, id: DocumentId, fields: Vec<String>) -> Result<()>;

    /// Replace `search` with `replacement` in every field of the given notes
    ///
    /// Returns the ids of the notes that actually changed, each at most once.
    fn search_and_replace(
        &mut self,
        ids: &[DocumentId],
        search: &str,
        replacement: &str,
        mode: ReplaceMode,
    ) -> Result<Vec<DocumentId>> {
        let replacer = Replacer::new(search, replacement, mode)?;
        let mut changed = Vec::new();

        for &id in ids {
            let document = self.document(id)?;
            if let Some(fields) = replacer.apply_fields(&document.fields) {
                self.update_fields(id, fields)?;
                changed.push(id);
            }
        }

        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_to_field() {
        let mut doc = Document::new(7, ["front", "back"]);
        doc.append_to_field(1, "<img src=\"a.png\">").unwrap();
        assert_eq!(doc.fields[1], "back<img src=\"a.png\">");

        let err = doc.append_to_field(2, "x").unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Store(StoreError::FieldOutOfRange { id: 7, index: 2 })
        ));
    }
}
