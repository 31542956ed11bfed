//! Path validation
//!
//! Turns note names into file paths inside the storage directory and back.

use std::path::{Path, PathBuf};

use crate::error::NameError;

/// Suffix every note file carries
pub const NOTE_EXTENSION: &str = ".txt";

/// Longest accepted name, leaving room for the suffix in a 255-byte filename
pub const MAX_NOTE_NAME_LENGTH: usize = 255 - NOTE_EXTENSION.len();

/// Validate a note name so it can only ever address a file directly inside
/// the storage directory.
pub fn validate_note_name(name: &str) -> Result<&str, NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }

    if name.len() > MAX_NOTE_NAME_LENGTH {
        return Err(NameError::TooLong(name.len()));
    }

    // Leading dot covers "." and ".." as well as hidden temp files
    if name.starts_with('.') {
        return Err(NameError::Reserved(name.to_string()));
    }

    if let Some(c) = name
        .chars()
        .find(|c| *c == '/' || *c == '\\' || c.is_control())
    {
        return Err(NameError::InvalidCharacter(c));
    }

    Ok(name)
}

/// Resolve the file backing `name`
pub fn note_path(storage_dir: &Path, name: &str) -> Result<PathBuf, NameError> {
    let name = validate_note_name(name)?;
    Ok(storage_dir.join(format!("{name}{NOTE_EXTENSION}")))
}

/// Stem of a directory entry, if the entry looks like a note file
pub fn note_name_from_file(file_name: &str) -> Option<&str> {
    if file_name.starts_with('.') {
        return None;
    }
    file_name
        .strip_suffix(NOTE_EXTENSION)
        .filter(|stem| !stem.is_empty())
}
