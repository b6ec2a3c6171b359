//! Minimal configuration module for medialens core
//!
//! Only exports pure data types. All loading logic is in CLI layer.

pub mod types;

pub use types::{MediaSettings, ResolvedConfig, DEFAULT_IMAGE_EXTENSIONS};
