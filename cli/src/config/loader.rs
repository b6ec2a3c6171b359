//! CLI configuration loader for medialens
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./medialens.json or ./.medialens/config.json
//! 3. XDG config: $XDG_CONFIG_HOME/medialens/config.json or the platform config dir
//! 4. Environment variables only (no files)

use anyhow::{anyhow, Context, Result};
use medialens_core::{MediaSettings, ResolvedConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the media folder
pub const MEDIA_DIR_ENV: &str = "MEDIALENS_MEDIA_DIR";

/// Environment variable naming the collection database
pub const COLLECTION_ENV: &str = "MEDIALENS_COLLECTION";

/// Raw configuration file format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawConfig {
    /// Media folder (`~` is expanded)
    pub media_dir: Option<String>,
    /// Collection database holding the notes (optional for list/search)
    pub collection: Option<String>,
    /// Extensions treated as images (optional, defaults to the common ones)
    pub image_extensions: Option<Vec<String>>,
    /// Whether dot-files are listed
    #[serde(default)]
    pub include_hidden: bool,
    /// Default cap on search results
    pub max_results: Option<usize>,
}

/// CLI configuration loader
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Flag overrides
    media_dir_override: Option<PathBuf>,
    collection_override: Option<PathBuf>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            config_override: None,
            media_dir_override: None,
            collection_override: None,
        }
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set media folder override
    pub fn with_media_dir_override(mut self, path: PathBuf) -> Self {
        self.media_dir_override = Some(path);
        self
    }

    /// Set collection override
    pub fn with_collection_override(mut self, path: PathBuf) -> Self {
        self.collection_override = Some(path);
        self
    }

    /// Load and resolve configuration
    pub async fn load(&self) -> Result<ResolvedConfig> {
        // Step 1: Find and load base configuration
        let mut config = if let Some(override_path) = &self.config_override {
            self.load_from_path(override_path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?
        } else {
            self.search_and_load().await?
        };

        // Step 2: Apply flag overrides
        if let Some(media_dir) = &self.media_dir_override {
            config.media_dir = Some(media_dir.to_string_lossy().into_owned());
        }
        if let Some(collection) = &self.collection_override {
            config.collection = Some(collection.to_string_lossy().into_owned());
        }

        // Step 3: Resolve to final config
        self.resolve_config(config)
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<RawConfig> {
        if let Some(config) = self.try_load_cwd().await? {
            return Ok(config);
        }

        if let Some(config) = self.try_load_xdg().await? {
            return Ok(config);
        }

        Ok(self.load_env_only())
    }

    /// Try loading from current working directory
    async fn try_load_cwd(&self) -> Result<Option<RawConfig>> {
        let cwd = std::env::current_dir()?;

        let medialens_json = cwd.join("medialens.json");
        if medialens_json.exists() {
            return Ok(Some(self.load_file(&medialens_json).await?));
        }

        let dir_config = cwd.join(".medialens").join("config.json");
        if dir_config.exists() {
            return Ok(Some(self.load_file(&dir_config).await?));
        }

        Ok(None)
    }

    /// Try loading from XDG config directory
    async fn try_load_xdg(&self) -> Result<Option<RawConfig>> {
        if let Some(config_dir) = self.get_xdg_config_dir() {
            let config_path = config_dir.join("medialens").join("config.json");
            if config_path.exists() {
                return Ok(Some(self.load_file(&config_path).await?));
            }
        }
        Ok(None)
    }

    /// Build a configuration from environment variables only
    fn load_env_only(&self) -> RawConfig {
        RawConfig {
            media_dir: std::env::var(MEDIA_DIR_ENV).ok(),
            collection: std::env::var(COLLECTION_ENV).ok(),
            ..RawConfig::default()
        }
    }

    /// Load configuration from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<RawConfig> {
        if path.is_file() {
            self.load_file(path).await
        } else if path.is_dir() {
            let config_file = path.join("config.json");
            if config_file.exists() {
                self.load_file(&config_file).await
            } else {
                Err(anyhow!(
                    "No config.json found in directory: {}",
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<RawConfig> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Get XDG config directory
    fn get_xdg_config_dir(&self) -> Option<PathBuf> {
        std::env::var_os("XDG_CONFIG_HOME")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::config_dir)
    }

    /// Resolve raw config to ResolvedConfig
    fn resolve_config(&self, config: RawConfig) -> Result<ResolvedConfig> {
        let media_dir = config.media_dir.as_deref().ok_or_else(|| {
            anyhow!(
                "No media folder configured. Pass --media-dir, set {} or create a medialens.json file",
                MEDIA_DIR_ENV
            )
        })?;

        let mut media = MediaSettings::default().with_hidden_files(config.include_hidden);
        if let Some(extensions) = config.image_extensions {
            media = media.with_extensions(extensions);
        }

        let mut resolved =
            ResolvedConfig::new(expand_path(media_dir)).with_media_settings(media);
        if let Some(collection) = config.collection.as_deref() {
            resolved = resolved.with_collection(expand_path(collection));
        }
        if let Some(max_results) = config.max_results {
            resolved = resolved.with_max_results(max_results);
        }

        resolved
            .validate()
            .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

        Ok(resolved)
    }
}

impl Default for CliConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Expand a leading `~` to the home directory
fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}
