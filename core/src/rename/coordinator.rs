//! The rename protocol: validate, rewrite references, move the file

use super::references::{patch_references, rewrite_in_store};
use super::validate::{split_extension, validate_new_name};
use super::OpenEditor;
use crate::error::{RenameError, Result};
use crate::media::FileRenamer;
use crate::store::DocumentStore;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// A validated rename: the current name and the final new name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRequest {
    pub original_name: String,
    pub proposed_name: String,
}

/// What a completed rename did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameOutcome {
    pub original_name: String,
    pub new_name: String,

    /// Distinct notes whose fields were rewritten
    pub matched_document_count: usize,

    /// False when a file already sat at the new name and the move was skipped.
    /// References point at the new name either way.
    pub file_moved: bool,
}

/// Runs renames against a document store and a media folder
///
/// Not transactional: once references are rewritten they stay rewritten,
/// even if moving the file fails afterwards.
pub struct RenameCoordinator<'a, D: ?Sized, F: ?Sized> {
    store: &'a mut D,
    files: &'a F,
}

impl<'a, D, F> RenameCoordinator<'a, D, F>
where
    D: DocumentStore + ?Sized,
    F: FileRenamer + ?Sized,
{
    pub fn new(store: &'a mut D, files: &'a F) -> Self {
        Self { store, files }
    }

    /// Check a rename without side effects
    pub fn prepare<S: AsRef<str>>(
        &self,
        original_name: &str,
        proposed_base: &str,
        listing: &[S],
    ) -> Result<RenameRequest> {
        if !listing.iter().any(|f| f.as_ref() == original_name) {
            return Err(RenameError::FileNotFound {
                name: original_name.to_string(),
            }
            .into());
        }

        let (_, extension) = split_extension(original_name);
        let proposed_name = validate_new_name(proposed_base, extension, listing)?;

        Ok(RenameRequest {
            original_name: original_name.to_string(),
            proposed_name,
        })
    }

    /// Rename `original_name` to `proposed_base` plus its current extension
    ///
    /// `listing` is the media folder snapshot used for the existence and
    /// collision checks. When `editor` is given, its fields are patched with
    /// the same rule after the rename.
    pub fn perform_rename<S: AsRef<str>>(
        &mut self,
        original_name: &str,
        proposed_base: &str,
        listing: &[S],
        editor: Option<&mut dyn OpenEditor>,
    ) -> Result<RenameOutcome> {
        let request = self.prepare(original_name, proposed_base, listing)?;
        let RenameRequest {
            original_name,
            proposed_name: new_name,
        } = request;

        let rewrite = rewrite_in_store(&mut *self.store, &original_name, &new_name)?;

        let file_moved = if self.files.exists(&new_name) {
            warn!(
                "{} already exists; references now point at it but {} was not moved",
                new_name, original_name
            );
            false
        } else {
            self.files.rename(&original_name, &new_name)?;
            true
        };

        info!(
            "Renamed {} to {} and updated {} notes",
            original_name, new_name, rewrite.matched_document_count
        );

        if let Some(editor) = editor {
            notify_editor(editor, &original_name, &new_name);
        }

        Ok(RenameOutcome {
            original_name,
            new_name,
            matched_document_count: rewrite.matched_document_count,
            file_moved,
        })
    }
}

/// Patch the open note so it shows the new name without a reload from the store
pub fn notify_editor(editor: &mut dyn OpenEditor, original_name: &str, new_name: &str) {
    for field in editor.fields_mut().iter_mut() {
        *field = patch_references(field, original_name, new_name);
    }
    editor.reload();
}
