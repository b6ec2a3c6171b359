//! Renaming media files and keeping note references in step
//!
//! A rename validates the proposed name, rewrites every `src=` reference in
//! the corpus, then moves the file on disk. See [`RenameCoordinator`].

pub mod coordinator;
pub mod references;
pub mod validate;

pub use coordinator::{notify_editor, RenameCoordinator, RenameOutcome, RenameRequest};
pub use references::{
    patch_references, reference_forms, rewrite_in_store, rewrite_references,
    ReferenceRewriteResult,
};
pub use validate::{split_extension, validate_new_name};

use crate::store::Document;

/// A note currently open in an editor, which must be refreshed after a rename
pub trait OpenEditor {
    /// The fields shown in the editor
    fn fields_mut(&mut self) -> &mut Vec<String>;

    /// Redisplay after the fields were patched
    fn reload(&mut self) {}
}

impl OpenEditor for Document {
    fn fields_mut(&mut self) -> &mut Vec<String> {
        &mut self.fields
    }
}
