//! In-memory document store

use super::{Document, DocumentId, DocumentStore};
use crate::error::{Result, StoreError};

/// Documents held in a vector, in insertion order
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: Vec<Document>,
}

impl MemoryStore {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    pub fn insert(&mut self, document: Document) {
        self.documents.push(document);
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    fn find_mut(&mut self, id: DocumentId) -> Result<&mut Document> {
        self.documents
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| StoreError::DocumentNotFound { id }.into())
    }
}

impl DocumentStore for MemoryStore {
    fn document_ids(&self) -> Result<Vec<DocumentId>> {
        Ok(self.documents.iter().map(|d| d.id).collect())
    }

    fn document(&self, id: DocumentId) -> Result<Document> {
        self.documents
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| StoreError::DocumentNotFound { id }.into())
    }

    fn update_fields(&mut self, id: DocumentId, fields: Vec<String>) -> Result<()> {
        self.find_mut(id)?.fields = fields;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ReplaceMode;

    #[test]
    fn test_search_and_replace_reports_changed_ids() {
        let mut store = MemoryStore::new(vec![
            Document::new(1, ["<img src=\"a.png\">", "a.png"]),
            Document::new(2, ["nothing here"]),
            Document::new(3, ["", "<img src=\"a.png\">"]),
        ]);

        let ids = store.document_ids().unwrap();
        let changed = store
            .search_and_replace(&ids, "src=\"a.png\"", "src=\"b.png\"", ReplaceMode::LITERAL)
            .unwrap();

        assert_eq!(changed, vec![1, 3]);
        assert_eq!(store.documents()[0].fields[0], "<img src=\"b.png\">");
        // Only the literal form is replaced, not the bare name.
        assert_eq!(store.documents()[0].fields[1], "a.png");
        assert_eq!(store.documents()[1].fields[0], "nothing here");
    }

    #[test]
    fn test_restricted_to_given_ids() {
        let mut store = MemoryStore::new(vec![
            Document::new(1, ["x"]),
            Document::new(2, ["x"]),
        ]);
        let changed = store
            .search_and_replace(&[2], "x", "y", ReplaceMode::LITERAL)
            .unwrap();
        assert_eq!(changed, vec![2]);
        assert_eq!(store.document(1).unwrap().fields[0], "x");
    }

    #[test]
    fn test_missing_document() {
        let mut store = MemoryStore::default();
        assert!(store.document(9).is_err());
        assert!(store.update_fields(9, vec![]).is_err());
        assert!(store
            .search_and_replace(&[9], "x", "y", ReplaceMode::LITERAL)
            .is_err());
    }
}
