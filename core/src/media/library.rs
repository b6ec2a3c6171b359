//! Snapshot of the media folder used for one search session

use super::{DirectoryListing, FileRenamer, MediaFile, MediaFolder};
use crate::error::{RenameError, Result};
use crate::matcher::{MatchResult, TextMatcher};
use crate::rename::{OpenEditor, RenameCoordinator, RenameOutcome};
use crate::store::DocumentStore;
use std::path::PathBuf;

/// Images listed once from a folder, searched without touching disk
///
/// The snapshot is immutable between [`refresh`](Self::refresh) calls. A
/// rename through [`rename`](Self::rename) re-lists the folder afterwards,
/// whether it succeeded or not.
pub struct MediaLibrary<F = MediaFolder> {
    folder: F,
    files: Vec<MediaFile>,
    matcher: TextMatcher,
}

impl<F: DirectoryListing + FileRenamer> MediaLibrary<F> {
    /// List the folder and build a snapshot
    pub fn open(folder: F) -> Result<Self> {
        let mut library = Self {
            folder,
            files: Vec::new(),
            matcher: TextMatcher::new(),
        };
        library.refresh()?;
        Ok(library)
    }

    /// Re-list the folder
    pub fn refresh(&mut self) -> Result<()> {
        self.files = self
            .folder
            .list()?
            .into_iter()
            .map(MediaFile::new)
            .collect();
        Ok(())
    }

    pub fn folder(&self) -> &F {
        &self.folder
    }

    /// Files in discovery order
    pub fn files(&self) -> &[MediaFile] {
        &self.files
    }

    pub fn filenames(&self) -> Vec<String> {
        self.files.iter().map(|f| f.filename.clone()).collect()
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.files.iter().any(|f| f.filename == filename)
    }

    /// Rank the snapshot against a query
    pub fn search(&self, query: &str) -> Vec<MatchResult> {
        self.matcher.rank(&self.files, query)
    }

    /// Rename an image, rewrite references in `store`, then re-list
    ///
    /// `original_name` must be in the snapshot. The new name is checked
    /// against everything in the folder right now, not just the images.
    pub fn rename(
        &mut self,
        store: &mut dyn DocumentStore,
        original_name: &str,
        proposed_base: &str,
        editor: Option<&mut dyn OpenEditor>,
    ) -> Result<RenameOutcome> {
        if !self.contains(original_name) {
            return Err(RenameError::FileNotFound {
                name: original_name.to_string(),
            }
            .into());
        }

        let entries = self.folder.list_entries()?;
        let result = RenameCoordinator::new(store, &self.folder).perform_rename(
            original_name,
            proposed_base,
            &entries,
            editor,
        );

        // The corpus may have changed even when the move failed
        let refreshed = self.refresh();
        let outcome = result?;
        refreshed?;
        Ok(outcome)
    }
}

impl MediaLibrary<MediaFolder> {
    pub fn path_of(&self, file: &MediaFile) -> PathBuf {
        file.absolute_path(self.folder.root())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Document, MemoryStore};
    use std::cell::RefCell;
    use std::fs;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn library_with(files: &[&str]) -> (TempDir, MediaLibrary) {
        let dir = TempDir::new().unwrap();
        for name in files {
            fs::write(dir.path().join(name), b"img").unwrap();
        }
        let library = MediaLibrary::open(MediaFolder::new(dir.path())).unwrap();
        (dir, library)
    }

    fn corpus() -> MemoryStore {
        MemoryStore::new(vec![Document::new(1, ["<img src=\"a.png\">"])])
    }

    /// Folder whose moves always fail; the listing is shared with the test
    struct StuckFolder {
        names: Rc<RefCell<Vec<String>>>,
    }

    impl DirectoryListing for StuckFolder {
        fn list(&self) -> Result<Vec<String>> {
            Ok(self.names.borrow().clone())
        }

        fn list_entries(&self) -> Result<Vec<String>> {
            self.list()
        }
    }

    impl FileRenamer for StuckFolder {
        fn exists(&self, filename: &str) -> bool {
            self.names.borrow().iter().any(|n| n == filename)
        }

        fn rename(&self, _from: &str, _to: &str) -> Result<()> {
            Err(std::io::Error::from(std::io::ErrorKind::PermissionDenied).into())
        }
    }

    #[test]
    fn test_search_over_snapshot() {
        let (_dir, library) = library_with(&["cat_photo.png", "catalog.png", "dog.png"]);

        let names: Vec<_> = library
            .search("cat")
            .into_iter()
            .map(|m| m.filename)
            .collect();
        // discovery order is alphabetical, and the tie keeps it
        assert_eq!(names, vec!["cat_photo.png", "catalog.png"]);
        assert!(library.search("").is_empty());
    }

    #[test]
    fn test_snapshot_is_stale_until_refresh() {
        let (dir, mut library) = library_with(&["a.png"]);
        fs::write(dir.path().join("b.png"), b"img").unwrap();

        assert!(!library.contains("b.png"));
        library.refresh().unwrap();
        assert!(library.contains("b.png"));
        assert_eq!(library.filenames(), vec!["a.png", "b.png"]);
    }

    #[test]
    fn test_rename_relists() {
        let (dir, mut library) = library_with(&["a.png"]);
        let mut store = corpus();

        let outcome = library.rename(&mut store, "a.png", "b", None).unwrap();

        assert_eq!(outcome.new_name, "b.png");
        assert_eq!(outcome.matched_document_count, 1);
        assert!(library.contains("b.png"));
        assert!(!library.contains("a.png"));
        assert!(dir.path().join("b.png").is_file());
        assert_eq!(
            library.path_of(&library.files()[0]),
            dir.path().join("b.png")
        );
    }

    #[test]
    fn test_rename_onto_hidden_file_is_a_collision() {
        let (dir, mut library) = library_with(&["a.png", ".b.png"]);
        let mut store = corpus();

        let err = library.rename(&mut store, "a.png", ".b", None).unwrap_err();

        assert_eq!(
            err.as_rename(),
            Some(&RenameError::NameCollision {
                name: ".b.png".to_string()
            })
        );
        assert_eq!(store.documents(), corpus().documents());
        assert!(dir.path().join("a.png").is_file());
    }

    #[test]
    fn test_rename_onto_directory_is_a_collision() {
        let (dir, mut library) = library_with(&["a.png"]);
        fs::create_dir(dir.path().join("b.png")).unwrap();
        let mut store = corpus();

        let err = library.rename(&mut store, "a.png", "b", None).unwrap_err();

        assert_eq!(
            err.as_rename(),
            Some(&RenameError::NameCollision {
                name: "b.png".to_string()
            })
        );
        assert_eq!(store.documents(), corpus().documents());
        assert!(dir.path().join("a.png").is_file());
    }

    #[test]
    fn test_failed_move_still_refreshes_snapshot() {
        let names = Rc::new(RefCell::new(vec!["a.png".to_string()]));
        let mut library = MediaLibrary::open(StuckFolder {
            names: Rc::clone(&names),
        })
        .unwrap();
        names.borrow_mut().push("c.png".to_string());
        let mut store = corpus();

        let err = library.rename(&mut store, "a.png", "b", None).unwrap_err();

        assert!(err.as_rename().is_none());
        assert_eq!(store.documents()[0].fields[0], "<img src=\"b.png\">");
        assert!(library.contains("c.png"));
    }

    #[test]
    fn test_rename_of_file_outside_snapshot() {
        let (dir, mut library) = library_with(&["a.png"]);
        fs::write(dir.path().join("late.png"), b"img").unwrap();
        let mut store = corpus();

        let err = library.rename(&mut store, "late.png", "b", None).unwrap_err();
        assert_eq!(
            err.as_rename(),
            Some(&RenameError::FileNotFound {
                name: "late.png".to_string()
            })
        );
    }
}
