//! Validation of user-proposed filenames

use crate::error::RenameError;

/// Split a filename into stem and extension (extension keeps its dot)
///
/// Leading dots never start an extension, so `.hidden` has none.
pub fn split_extension(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(i) if filename[..i].chars().any(|c| c != '.') => filename.split_at(i),
        _ => (filename, ""),
    }
}

/// Turn a proposed base name into the final filename
///
/// Surrounding whitespace is trimmed and inner spaces become underscores.
pub fn validate_new_name<S: AsRef<str>>(
    proposed_base: &str,
    extension: &str,
    existing_filenames: &[S],
) -> Result<String, RenameError> {
    let base = proposed_base.trim().replace(' ', "_");
    if base.is_empty() {
        return Err(RenameError::EmptyName);
    }

    let candidate = format!("{}{}", base, extension);
    if candidate == "." || candidate == ".." || candidate.contains(std::path::is_separator) {
        return Err(RenameError::InvalidName { name: candidate });
    }

    if existing_filenames.iter().any(|f| f.as_ref() == candidate) {
        return Err(RenameError::NameCollision { name: candidate });
    }

    Ok(candidate)
}
