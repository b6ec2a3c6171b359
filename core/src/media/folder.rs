//! Filesystem-backed media folder

use super::{DirectoryListing, FileRenamer};
use crate::config::MediaSettings;
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// The media folder of a collection
#[derive(Debug, Clone)]
pub struct MediaFolder {
    root: PathBuf,
    settings: MediaSettings,
}

impl MediaFolder {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            settings: MediaSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: MediaSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of a file in this folder
    pub fn path_of(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    fn is_listed(&self, filename: &str) -> bool {
        if !self.settings.include_hidden && filename.starts_with('.') {
            return false;
        }

        Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.settings.is_image_extension(e))
    }
}

impl DirectoryListing for MediaFolder {
    /// Image filenames directly inside the folder, sorted by name
    fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }

            let Some(name) = entry.file_name().to_str() else {
                warn!("Skipping non UTF-8 filename: {:?}", entry.file_name());
                continue;
            };

            if self.is_listed(name) {
                names.push(name.to_string());
            }
        }

        debug!("Listed {} images in {}", names.len(), self.root.display());
        Ok(names)
    }

    fn list_entries(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            if let Some(name) = entry?.file_name().to_str() {
                names.push(name.to_string());
            }
        }

        Ok(names)
    }
}

impl FileRenamer for MediaFolder {
    fn exists(&self, filename: &str) -> bool {
        self.path_of(filename).is_file()
    }

    fn rename(&self, from: &str, to: &str) -> Result<()> {
        std::fs::rename(self.path_of(from), self.path_of(to))?;
        Ok(())
    }
}
