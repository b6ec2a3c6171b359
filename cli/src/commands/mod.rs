//! CLI command implementations

pub mod insert;
pub mod list;
pub mod rename;
pub mod search;

pub use insert::insert_command;
pub use list::list_command;
pub use rename::rename_command;
pub use search::search_command;

use anyhow::{anyhow, Context, Result};
use medialens_core::{MediaFolder, MediaLibrary, ResolvedConfig, SqliteStore};
use tracing::debug;

/// List the configured media folder
pub(crate) fn open_library(config: &ResolvedConfig) -> Result<MediaLibrary> {
    if !config.media_dir.is_dir() {
        return Err(anyhow!(
            "Media folder does not exist: {}",
            config.media_dir.display()
        ));
    }

    let folder = MediaFolder::new(&config.media_dir).with_settings(config.media.clone());
    let library = MediaLibrary::open(folder).with_context(|| {
        format!("Failed to list media folder: {}", config.media_dir.display())
    })?;
    debug!("📁 {} images in snapshot", library.files().len());
    Ok(library)
}

/// Open the configured collection
pub(crate) fn open_collection(config: &ResolvedConfig) -> Result<SqliteStore> {
    let path = config.collection.as_ref().ok_or_else(|| {
        anyhow!("No collection configured. Pass --collection or set it in medialens.json")
    })?;

    if !path.is_file() {
        return Err(anyhow!("Collection does not exist: {}", path.display()));
    }

    SqliteStore::open(path)
        .with_context(|| format!("Failed to open collection: {}", path.display()))
}
