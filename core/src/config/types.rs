//! Configuration types for medialens core
//!
//! Core only accepts fully resolved, validated configuration.
//! All discovery, loading, and merging happens in CLI layer.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Extensions treated as images when listing the media folder
pub const DEFAULT_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp", "svg"];

/// Settings that decide which files of the media folder are listed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSettings {
    /// Image extensions, lowercase, without the leading dot
    pub image_extensions: Vec<String>,

    /// Whether dot-files are listed
    #[serde(default)]
    pub include_hidden: bool,
}

impl Default for MediaSettings {
    fn default() -> Self {
        Self {
            image_extensions: DEFAULT_IMAGE_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            include_hidden: false,
        }
    }
}

impl MediaSettings {
    /// Replace the extension list; entries are lowercased and stripped of dots
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.image_extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_lowercase())
            .collect();
        self
    }

    pub fn with_hidden_files(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Whether `extension` (without dot, any case) is an image extension
    pub fn is_image_extension(&self, extension: &str) -> bool {
        let extension = extension.to_lowercase();
        self.image_extensions.iter().any(|e| *e == extension)
    }
}

/// A fully resolved configuration ready for use by core
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedConfig {
    /// The media folder to browse
    pub media_dir: PathBuf,

    /// Collection file holding the notes, if any
    pub collection: Option<PathBuf>,

    /// Listing settings
    #[serde(default)]
    pub media: MediaSettings,

    /// Cap on the number of search results shown
    pub max_results: Option<usize>,
}

impl ResolvedConfig {
    pub fn new(media_dir: PathBuf) -> Self {
        Self {
            media_dir,
            collection: None,
            media: MediaSettings::default(),
            max_results: None,
        }
    }

    pub fn with_collection(mut self, collection: PathBuf) -> Self {
        self.collection = Some(collection);
        self
    }

    pub fn with_media_settings(mut self, media: MediaSettings) -> Self {
        self.media = media;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.media_dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "media_dir".to_string(),
            });
        }

        if self.media.image_extensions.is_empty() {
            return Err(ConfigError::MissingField {
                field: "image_extensions".to_string(),
            });
        }

        if let Some(bad) = self
            .media
            .image_extensions
            .iter()
            .find(|e| e.is_empty() || e.contains(['.', '/', '\\']))
        {
            return Err(ConfigError::InvalidValue {
                field: "image_extensions".to_string(),
                value: bad.clone(),
            });
        }

        if self.max_results == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "max_results".to_string(),
                value: "0".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_extensions() {
        let settings = MediaSettings::default();
        assert!(settings.is_image_extension("PNG"));
        assert!(settings.is_image_extension("svg"));
        assert!(!settings.is_image_extension("mp3"));
    }

    #[test]
    fn test_with_extensions_normalizes() {
        let settings = MediaSettings::default().with_extensions([".TIFF", "avif"]);
        assert_eq!(settings.image_extensions, vec!["tiff", "avif"]);
        assert!(settings.is_image_extension("tiff"));
        assert!(!settings.is_image_extension("png"));
    }

    #[test]
    fn test_validate() {
        let config = ResolvedConfig::new(PathBuf::from("/media"));
        assert!(config.validate().is_ok());

        let empty = ResolvedConfig::new(PathBuf::new());
        assert!(matches!(
            empty.validate(),
            Err(ConfigError::MissingField { .. })
        ));

        let bad_ext = ResolvedConfig::new(PathBuf::from("/media"))
            .with_media_settings(MediaSettings::default().with_extensions(["p/ng"]));
        assert!(matches!(
            bad_ext.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));

        let zero = ResolvedConfig::new(PathBuf::from("/media")).with_max_results(0);
        assert!(zero.validate().is_err());
    }
}
