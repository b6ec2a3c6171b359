//! Image insertion command

use anyhow::{anyhow, Context, Result};
use medialens_core::media::{image_tag, insert_image};
use medialens_core::store::{DocumentId, DocumentStore};
use tracing::info;

/// Print the tag for an image, optionally appending it to a note
pub async fn insert_command(
    config_loader: crate::config::CliConfigLoader,
    filename: String,
    note: Option<DocumentId>,
    field: usize,
) -> Result<()> {
    let config = config_loader.load().await?;
    let library = super::open_library(&config)?;

    if !library.contains(&filename) {
        return Err(anyhow!("File not found: {}", filename));
    }

    let Some(note_id) = note else {
        println!("{}", image_tag(&filename));
        return Ok(());
    };

    let mut store = super::open_collection(&config)?;
    let mut document = store
        .document(note_id)
        .with_context(|| format!("Failed to load note {}", note_id))?;
    insert_image(&mut document, field, &filename)?;
    store.update_fields(note_id, document.fields)?;

    info!("Inserted {} into note {}", filename, note_id);
    println!("Added {} to note {} (field {})", filename, note_id, field);

    Ok(())
}
