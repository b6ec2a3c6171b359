//! # medialens CLI
//!
//! Command-line interface for medialens - fuzzy search and safe renaming
//! of the images in a flashcard media folder.
//!
//! ## Usage
//!
//! - `medialens list` - List every image in the media folder
//! - `medialens search "cat"` - Rank images against a query
//! - `medialens insert cat.png --note 42` - Add an image tag to a note
//! - `medialens rename cat.png --to kitten` - Rename an image and its references

use anyhow::Result;
use clap::{Parser, Subcommand};
use medialens_core::store::DocumentId;
use std::path::PathBuf;

mod commands;
mod config;
mod output;

use commands::{insert_command, list_command, rename_command, search_command};
use config::CliConfigLoader;

/// medialens - Find and rename the images in a flashcard media folder
#[derive(Parser)]
#[command(name = "medialens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Fuzzy image search and reference-safe renaming for flashcard media")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Media folder override
    #[arg(long, global = true)]
    media_dir: Option<PathBuf>,

    /// Collection database override
    #[arg(long, global = true)]
    collection: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every image in the media folder
    List,

    /// Rank images against a query
    Search {
        /// Text typed by the user
        query: String,

        /// Show at most this many matches
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the tag for an image, or add it to a note
    Insert {
        /// Image filename in the media folder
        filename: String,

        /// Note to append the tag to
        #[arg(long)]
        note: Option<DocumentId>,

        /// Field of the note to append to
        #[arg(long, default_value_t = 0)]
        field: usize,
    },

    /// Rename an image and update every note that references it
    Rename {
        /// Current image filename
        filename: String,

        /// New base name, without extension (prompted for when omitted)
        #[arg(long)]
        to: Option<String>,

        /// Note open for editing; shown with its references patched after the rename
        #[arg(long)]
        note: Option<DocumentId>,
    },
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(media_dir) = &cli.media_dir {
        loader = loader.with_media_dir_override(media_dir.clone());
    }

    if let Some(collection) = &cli.collection {
        loader = loader.with_collection_override(collection.clone());
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let config_loader = build_config_loader(&cli);

    match cli.command {
        Commands::List => list_command(config_loader).await,
        Commands::Search { query, limit, json } => {
            search_command(config_loader, query, limit, json).await
        }
        Commands::Insert {
            filename,
            note,
            field,
        } => insert_command(config_loader, filename, note, field).await,
        Commands::Rename { filename, to, note } => {
            rename_command(config_loader, filename, to, note).await
        }
    }
}
