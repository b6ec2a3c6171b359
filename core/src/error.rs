//! Error types and handling for medialens core

use thiserror::Error;

/// Result type alias for medialens operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for medialens core
#[derive(Error, Debug)]
pub enum Error {
    /// Rename validation and lookup errors
    #[error("Rename error: {0}")]
    Rename(#[from] RenameError),

    /// Document store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// SQLite database errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Directory walking errors
    #[error("Directory listing error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Errors that abort a rename before anything is mutated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenameError {
    #[error("File not found: {name}")]
    FileNotFound { name: String },

    #[error("New filename cannot be empty")]
    EmptyName,

    #[error("File '{name}' already exists")]
    NameCollision { name: String },

    #[error("'{name}' is not a plain filename")]
    InvalidName { name: String },
}

/// Document store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Document not found: {id}")]
    DocumentNotFound { id: i64 },

    #[error("Search text cannot be empty")]
    EmptySearch,

    #[error("Invalid search pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Document {id} has no field at index {index}")]
    FieldOutOfRange { id: i64, index: usize },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },
}

impl Error {
    /// The rename error behind this error, if any
    pub fn as_rename(&self) -> Option<&RenameError> {
        match self {
            Error::Rename(err) => Some(err),
            _ => None,
        }
    }
}
