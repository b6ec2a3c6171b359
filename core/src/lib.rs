//! # medialens core
//!
//! Fuzzy search over the images in a flashcard media folder, and renaming
//! of those images with every note reference rewritten to match.
//!
//! The two entry points are [`TextMatcher`] for ranking filenames against a
//! typed query and [`RenameCoordinator`] for the rename protocol. Both work
//! against traits ([`DocumentStore`], [`DirectoryListing`], [`FileRenamer`])
//! so a host can plug in its own corpus and filesystem.

// Core modules
pub mod config;
pub mod error;
pub mod matcher;
pub mod media;
pub mod rename;
pub mod store;

// Re-export commonly used types
pub use config::{MediaSettings, ResolvedConfig};
pub use error::{ConfigError, Error, RenameError, Result, StoreError};
pub use matcher::{HighlightSpan, MatchResult, TextMatcher};
pub use media::{DirectoryListing, FileRenamer, MediaFile, MediaFolder, MediaLibrary};
pub use rename::{OpenEditor, RenameCoordinator, RenameOutcome};
pub use store::{Document, DocumentId, DocumentStore, MemoryStore, SqliteStore};

/// Current version of the medialens-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
