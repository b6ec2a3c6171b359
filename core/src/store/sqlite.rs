//! SQLite-backed store over a flashcard collection's note table
//!
//! Notes keep their fields in one `flds` column joined by U+001F. Every
//! changed note gets a fresh `mod` stamp and `usn = -1` so the host's sync
//! picks it up.

use super::{Document, DocumentId, DocumentStore, ReplaceMode, Replacer};
use crate::error::{Result, StoreError};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tracing::debug;

/// Separator between fields inside the `flds` column
pub const FIELD_SEPARATOR: &str = "\x1f";

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS notes (
    id   INTEGER PRIMARY KEY,
    mod  INTEGER NOT NULL,
    usn  INTEGER NOT NULL,
    flds TEXT NOT NULL
);";

/// Document store backed by a SQLite `notes` table
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a collection file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening collection at {}", path.display());
        Self::with_connection(Connection::open(path)?)
    }

    /// Open a throwaway collection in memory
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Add a note and return its id
    pub fn add_note<S: AsRef<str>>(&mut self, fields: &[S]) -> Result<DocumentId> {
        self.conn.execute(
            "INSERT INTO notes (mod, usn, flds) VALUES (?1, -1, ?2)",
            params![Utc::now().timestamp(), join_fields(fields)],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Modification stamp of a note
    pub fn modified(&self, id: DocumentId) -> Result<i64> {
        self.conn
            .query_row("SELECT mod FROM notes WHERE id = ?1", params![id], |row| {
                row.get(0)
            })
            .optional()?
            .ok_or_else(|| StoreError::DocumentNotFound { id }.into())
    }
}

fn split_fields(flds: &str) -> Vec<String> {
    flds.split(FIELD_SEPARATOR).map(str::to_string).collect()
}

fn join_fields<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|field| field.as_ref())
        .collect::<Vec<&str>>()
        .join(FIELD_SEPARATOR)
}

impl DocumentStore for SqliteStore {
    fn document_ids(&self) -> Result<Vec<DocumentId>> {
        let mut stmt = self.conn.prepare("SELECT id FROM notes ORDER BY id")?;
        let ids = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<DocumentId>, _>>()?;
        Ok(ids)
    }

    fn document(&self, id: DocumentId) -> Result<Document> {
        let flds: String = self
            .conn
            .query_row("SELECT flds FROM notes WHERE id = ?1", params![id], |row| {
                row.get(0)
            })
            .optional()?
            .ok_or(StoreError::DocumentNotFound { id })?;

        Ok(Document {
            id,
            fields: split_fields(&flds),
        })
    }

    fn update_fields(&mut self, id: DocumentId, fields: Vec<String>) -> Result<()> {
        let updated = self.conn.execute(
            "UPDATE notes SET flds = ?1, mod = ?2, usn = -1 WHERE id = ?3",
            params![join_fields(&fields), Utc::now().timestamp(), id],
        )?;
        if updated == 0 {
            return Err(StoreError::DocumentNotFound { id }.into());
        }
        Ok(())
    }

    fn search_and_replace(
        &mut self,
        ids: &[DocumentId],
        search: &str,
        replacement: &str,
        mode: ReplaceMode,
    ) -> Result<Vec<DocumentId>> {
        let replacer = Replacer::new(search, replacement, mode)?;
        let stamp = Utc::now().timestamp();
        let mut changed = Vec::new();

        let tx = self.conn.transaction()?;
        {
            let mut select = tx.prepare("SELECT flds FROM notes WHERE id = ?1")?;
            let mut update =
                tx.prepare("UPDATE notes SET flds = ?1, mod = ?2, usn = -1 WHERE id = ?3")?;

            for &id in ids {
                let flds: String = select
                    .query_row(params![id], |row| row.get(0))
                    .optional()?
                    .ok_or(StoreError::DocumentNotFound { id })?;

                if let Some(fields) = replacer.apply_fields(&split_fields(&flds)) {
                    update.execute(params![join_fields(&fields), stamp, id])?;
                    changed.push(id);
                }
            }
        }
        tx.commit()?;

        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fields_round_trip_through_separator() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let id = store.add_note(&["front", "back <b>x</b>", ""]).unwrap();

        let doc = store.document(id).unwrap();
        assert_eq!(doc.fields, vec!["front", "back <b>x</b>", ""]);
        assert_eq!(store.document_ids().unwrap(), vec![id]);
    }

    #[test]
    fn test_search_and_replace_marks_notes_for_sync() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let hit = store.add_note(&["<img src=\"a.png\">", "x"]).unwrap();
        let miss = store.add_note(&["plain"]).unwrap();
        store
            .conn
            .execute("UPDATE notes SET mod = 0, usn = 5", [])
            .unwrap();

        let ids = store.document_ids().unwrap();
        let changed = store
            .search_and_replace(&ids, "src=\"a.png\"", "src=\"b.png\"", ReplaceMode::LITERAL)
            .unwrap();

        assert_eq!(changed, vec![hit]);
        assert_eq!(store.document(hit).unwrap().fields[0], "<img src=\"b.png\">");
        assert!(store.modified(hit).unwrap() > 0);
        assert_eq!(store.modified(miss).unwrap(), 0);

        let usn: i64 = store
            .conn
            .query_row("SELECT usn FROM notes WHERE id = ?1", params![hit], |r| r.get(0))
            .unwrap();
        assert_eq!(usn, -1);
    }

    #[test]
    fn test_missing_note_aborts_whole_call() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let id = store.add_note(&["src=\"a.png\""]).unwrap();

        let result = store.search_and_replace(
            &[id, 999],
            "src=\"a.png\"",
            "src=\"b.png\"",
            ReplaceMode::LITERAL,
        );
        assert!(result.is_err());
        // transaction was rolled back
        assert_eq!(store.document(id).unwrap().fields[0], "src=\"a.png\"");
    }

    #[test]
    fn test_update_fields_and_persistence() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("collection.anki2");

        let id = {
            let mut store = SqliteStore::open(&path).unwrap();
            let id = store.add_note(&["a"]).unwrap();
            store
                .update_fields(id, vec!["b".to_string(), "c".to_string()])
                .unwrap();
            id
        };

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.document(id).unwrap().fields, vec!["b", "c"]);
        assert!(store.document(id + 1).is_err());
    }
}
