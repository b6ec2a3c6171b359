//! Media folder access: listing images, renaming files, image markup

pub mod folder;
pub mod library;

pub use folder::MediaFolder;
pub use library::MediaLibrary;

use crate::error::Result;
use crate::store::Document;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// An image discovered in the media folder
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaFile {
    /// Name of the file, unique within the folder
    pub filename: String,
}

impl MediaFile {
    pub fn new<S: Into<String>>(filename: S) -> Self {
        Self {
            filename: filename.into(),
        }
    }

    /// Absolute path of this file under `root`
    pub fn absolute_path(&self, root: &Path) -> PathBuf {
        root.join(&self.filename)
    }
}

impl AsRef<str> for MediaFile {
    fn as_ref(&self) -> &str {
        &self.filename
    }
}

/// Something that can list the filenames currently in the media folder
pub trait DirectoryListing {
    /// Images offered for search
    fn list(&self) -> Result<Vec<String>>;

    /// Every name present in the folder, whatever its kind
    ///
    /// A new name must not clash with any of these.
    fn list_entries(&self) -> Result<Vec<String>>;
}

/// Something that can check for and move files inside the media folder
pub trait FileRenamer {
    /// Whether a file with this name currently exists
    fn exists(&self, filename: &str) -> bool;

    /// Move `from` to `to`; fails if `from` is missing
    fn rename(&self, from: &str, to: &str) -> Result<()>;
}

/// Markup that embeds an image in a note field
pub fn image_tag(filename: &str) -> String {
    format!("<img src=\"{}\">", filename)
}

/// Append an image tag for `filename` to a field of `document`
pub fn insert_image(document: &mut Document, field: usize, filename: &str) -> Result<()> {
    document.append_to_field(field, &image_tag(filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_tag() {
        assert_eq!(image_tag("cat photo.png"), "<img src=\"cat photo.png\">");
    }

    #[test]
    fn test_insert_image() {
        let mut doc = Document::new(1, ["Front", "Back"]);
        insert_image(&mut doc, 0, "cat.png").unwrap();
        assert_eq!(doc.fields[0], "Front<img src=\"cat.png\">");
        assert!(insert_image(&mut doc, 5, "cat.png").is_err());
    }

    #[test]
    fn test_absolute_path() {
        let file = MediaFile::new("a.png");
        assert_eq!(
            file.absolute_path(Path::new("/media")),
            PathBuf::from("/media/a.png")
        );
    }
}
