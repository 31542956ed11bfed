//! Storage operations
//!
//! Handles note operations against the storage directory: list, read, create,
//! update and delete. Each note is the single file `<name>.txt`.

use log::{debug, info, warn};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

use crate::error::StorageError;
use crate::storage::filesystem::{create_atomic, write_atomic};
use crate::storage::results::{ListResult, Note, SkippedEntry};
use crate::storage::validation::{note_name_from_file, note_path};

/// Reads every note in the storage directory.
///
/// Entries that are not `<name>.txt` files are ignored. Note files that fail
/// to read are logged and reported in [`ListResult::skipped`] instead of
/// failing the listing. Order follows directory enumeration.
pub async fn list_notes(storage_dir: &Path) -> Result<ListResult, StorageError> {
    let unreadable = |source| StorageError::DirectoryUnreadable {
        path: storage_dir.to_path_buf(),
        source,
    };

    let mut read_dir = fs::read_dir(storage_dir).await.map_err(unreadable)?;
    let mut result = ListResult::default();

    while let Some(entry) = read_dir.next_entry().await.map_err(unreadable)? {
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            debug!("Ignoring non UTF-8 entry {:?}", entry.file_name());
            continue;
        };
        let Some(name) = note_name_from_file(file_name) else {
            continue;
        };

        match fs::read_to_string(entry.path()).await {
            Ok(text) => result.notes.push(Note {
                name: name.to_string(),
                text,
            }),
            Err(e) => {
                warn!("Skipping unreadable note file {file_name}: {e}");
                result.skipped.push(SkippedEntry {
                    file_name: file_name.to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    info!(
        "Listed {} notes in {} ({} skipped)",
        result.notes.len(),
        storage_dir.display(),
        result.skipped.len()
    );

    Ok(result)
}

/// Returns the text of a note
pub async fn read_note(storage_dir: &Path, name: &str) -> Result<String, StorageError> {
    let path = note_path(storage_dir, name)?;

    fs::read_to_string(&path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => StorageError::NotFound(name.to_string()),
        _ => StorageError::Io(e),
    })
}

/// Creates a note, failing with [`StorageError::AlreadyExists`] if it is present.
///
/// Existence check and write are a single filesystem step, so two racing
/// creates cannot both succeed.
pub async fn create_note(storage_dir: &Path, name: &str, text: &str) -> Result<(), StorageError> {
    let path = note_path(storage_dir, name)?;

    create_atomic(&path, text).await.map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => StorageError::AlreadyExists(name.to_string()),
        _ => StorageError::Io(e),
    })?;

    info!("Created note {name} ({} bytes)", text.len());
    Ok(())
}

/// Overwrites an existing note.
///
/// The note must exist before the write; the replacement itself is atomic so
/// readers see either the old or the new text. A delete that lands between
/// the existence check and the write is undone by the write.
pub async fn update_note(storage_dir: &Path, name: &str, text: &str) -> Result<(), StorageError> {
    let path = note_path(storage_dir, name)?;

    let existing = match fs::File::open(&path).await {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(StorageError::NotFound(name.to_string()));
        }
        Err(e) => return Err(StorageError::Io(e)),
    };
    if !existing.metadata().await?.is_file() {
        return Err(StorageError::NotFound(name.to_string()));
    }
    drop(existing);

    write_atomic(&path, text).await?;

    info!("Updated note {name} ({} bytes)", text.len());
    Ok(())
}

/// Removes a note
pub async fn delete_note(storage_dir: &Path, name: &str) -> Result<(), StorageError> {
    let path = note_path(storage_dir, name)?;

    fs::remove_file(&path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => StorageError::NotFound(name.to_string()),
        _ => StorageError::Io(e),
    })?;

    info!("Deleted note {name}");
    Ok(())
}
