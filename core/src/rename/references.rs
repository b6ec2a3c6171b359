//! Rewriting `src=` references to a media file across the corpus

use crate::error::Result;
use crate::store::{Document, DocumentId, DocumentStore, ReplaceMode, Replacer};
use std::collections::HashSet;
use tracing::debug;

/// Outcome of a corpus-wide rewrite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReferenceRewriteResult {
    /// Number of distinct documents with at least one field changed
    pub matched_document_count: usize,
}

/// Literal forms under which a note can reference `filename`
///
/// Double quoted, single quoted, and unquoted (the last only when the name
/// has no space, since an unquoted attribute ends at the first space).
pub fn reference_forms(filename: &str) -> Vec<String> {
    let mut forms = vec![
        format!("src=\"{}\"", filename),
        format!("src='{}'", filename),
    ];
    if !filename.contains(' ') {
        forms.push(format!("src={}", filename));
    }
    forms
}

/// The form every reference is rewritten to
pub fn replacement_form(filename: &str) -> String {
    format!("src=\"{}\"", filename)
}

/// Apply the rewrite rule to a single string
pub fn patch_references(text: &str, original_name: &str, new_name: &str) -> String {
    let replacement = replacement_form(new_name);
    reference_forms(original_name)
        .iter()
        .fold(text.to_string(), |acc, form| acc.replace(form.as_str(), &replacement))
}

/// Rewrite every reference to `original_name` in `store`
///
/// One literal search/replace is issued per reference form over all notes.
/// A note hit by several forms is counted once.
pub fn rewrite_in_store<D>(
    store: &mut D,
    original_name: &str,
    new_name: &str,
) -> Result<ReferenceRewriteResult>
where
    D: DocumentStore + ?Sized,
{
    let ids = store.document_ids()?;
    let replacement = replacement_form(new_name);
    let mut changed: HashSet<DocumentId> = HashSet::new();

    for form in reference_forms(original_name) {
        let hits = store.search_and_replace(&ids, &form, &replacement, ReplaceMode::LITERAL)?;
        debug!("Replaced {} with {} in {} notes", form, replacement, hits.len());
        changed.extend(hits);
    }

    Ok(ReferenceRewriteResult {
        matched_document_count: changed.len(),
    })
}

/// Rewrite references in a set of documents, returning the updated documents
/// and the number of documents that changed
///
/// Documents are handled by position; their ids are carried through untouched.
pub fn rewrite_references(
    documents: &[Document],
    original_name: &str,
    new_name: &str,
) -> Result<(Vec<Document>, usize)> {
    let replacement = replacement_form(new_name);
    let replacers = reference_forms(original_name)
        .iter()
        .map(|form| Replacer::new(form, &replacement, ReplaceMode::LITERAL))
        .collect::<Result<Vec<_>>>()?;

    let mut updated = Vec::with_capacity(documents.len());
    let mut changed = 0;

    for document in documents {
        let mut fields = document.fields.clone();
        let mut touched = false;
        for replacer in &replacers {
            if let Some(next) = replacer.apply_fields(&fields) {
                fields = next;
                touched = true;
            }
        }
        if touched {
            changed += 1;
        }
        updated.push(Document {
            id: document.id,
            fields,
        });
    }

    Ok((updated, changed))
}
