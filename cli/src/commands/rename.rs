//! Image rename command

use crate::output::{format_open_note, format_rename_summary};
use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::Input;
use medialens_core::rename::split_extension;
use medialens_core::store::{DocumentId, DocumentStore};
use medialens_core::OpenEditor;
use tracing::{debug, info};

/// Rename an image and rewrite the notes that reference it
///
/// Without `--to` the new base name is read from a prompt pre-filled with
/// the current one.
pub async fn rename_command(
    config_loader: crate::config::CliConfigLoader,
    filename: String,
    to: Option<String>,
    note: Option<DocumentId>,
) -> Result<()> {
    let config = config_loader.load().await?;
    let mut library = super::open_library(&config)?;
    let mut store = super::open_collection(&config)?;

    let proposed_base = match to {
        Some(base) => base,
        None => prompt_new_base(&filename)?,
    };

    // The note named by --note plays the part of the open editor
    let mut open_note = match note {
        Some(id) => Some(
            store
                .document(id)
                .with_context(|| format!("Failed to load note {}", id))?,
        ),
        None => None,
    };

    info!("Renaming {} to base name {}", filename, proposed_base);
    let outcome = library.rename(
        &mut store,
        &filename,
        &proposed_base,
        open_note.as_mut().map(|doc| doc as &mut dyn OpenEditor),
    )?;

    if !outcome.file_moved {
        eprintln!(
            "{} {} already exists; {} was left in place",
            "!".yellow(),
            outcome.new_name,
            outcome.original_name
        );
    }

    println!("{}", format_rename_summary(&outcome));

    if let Some(doc) = &open_note {
        debug!("Refreshed open note {}", doc.id);
        for line in format_open_note(doc) {
            println!("{}", line);
        }
    }

    Ok(())
}

/// Ask for the new base name, starting from the current one
fn prompt_new_base(filename: &str) -> Result<String> {
    let (base, _) = split_extension(filename);
    Input::<String>::new()
        .with_prompt(format!("Rename {} to", filename))
        .with_initial_text(base)
        .allow_empty(true)
        .interact_text()
        .context("Failed to read the new file name")
}
