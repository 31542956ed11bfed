//! File system operations
//!
//! Low-level helpers for the storage directory. Writes go through a hidden
//! temporary file in the same directory so a note is never observed half written.

use log::{info, warn};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use uuid::Uuid;

/// Create the storage directory if it does not exist yet
pub fn ensure_storage_dir(path: &Path) -> io::Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(path)?;
    info!("Created storage directory {}", path.display());
    Ok(())
}

/// Hidden sibling path used while writing `target`. Fixed length, so any
/// name short enough for a note is short enough for its temp file.
fn temp_path_for(target: &Path) -> PathBuf {
    target.with_file_name(format!(".{}.tmp", Uuid::new_v4().simple()))
}

async fn discard(temp: &Path) {
    if let Err(e) = fs::remove_file(temp).await {
        warn!("Failed to remove temporary file {}: {e}", temp.display());
    }
}

/// Replace the contents of `target` in one step
pub async fn write_atomic(target: &Path, contents: &str) -> io::Result<()> {
    let temp = temp_path_for(target);

    if let Err(e) = fs::write(&temp, contents).await {
        discard(&temp).await;
        return Err(e);
    }

    if let Err(e) = fs::rename(&temp, target).await {
        discard(&temp).await;
        return Err(e);
    }

    Ok(())
}

/// Write `target` only if it does not exist. Fails with
/// [`ErrorKind::AlreadyExists`] when another writer got there first.
pub async fn create_atomic(target: &Path, contents: &str) -> io::Result<()> {
    let temp = temp_path_for(target);

    if let Err(e) = fs::write(&temp, contents).await {
        discard(&temp).await;
        return Err(e);
    }

    // Linking fails if the target exists, unlike rename
    let linked = fs::hard_link(&temp, target).await;
    discard(&temp).await;

    match linked {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(e),
        Err(e) => {
            warn!(
                "Hard link unavailable for {} ({e}), using exclusive create",
                target.display()
            );
            create_exclusive(target, contents).await
        }
    }
}

async fn create_exclusive(target: &Path, contents: &str) -> io::Result<()> {
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(target)
        .await?;
    fill_new_file(target, file, contents).await
}

/// Write into a freshly created `target`; on failure the file is removed so
/// no truncated note is left behind.
async fn fill_new_file<W>(target: &Path, mut file: W, contents: &str) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let written = match file.write_all(contents.as_bytes()).await {
        Ok(()) => file.flush().await,
        Err(e) => Err(e),
    };
    drop(file);

    if let Err(e) = written {
        if let Err(remove_err) = fs::remove_file(target).await {
            warn!(
                "Failed to remove partial note {}: {remove_err}",
                target.display()
            );
        }
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::validation::MAX_NOTE_NAME_LENGTH;
    use std::pin::Pin;
    use std::task::{Context, Poll};
    use tempfile::TempDir;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn ensure_storage_dir_creates_nested_dirs() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("a").join("b");
        ensure_storage_dir(&dir).unwrap();
        assert!(dir.is_dir());
        ensure_storage_dir(&dir).unwrap();
    }

    #[tokio::test]
    async fn write_atomic_replaces_and_leaves_no_temp() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("foo.txt");
        std::fs::write(&target, "old").unwrap();

        write_atomic(&target, "new").await.unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "new");
        assert_eq!(entries(tmp.path()), vec!["foo.txt"]);
    }

    #[tokio::test]
    async fn create_atomic_refuses_existing_target() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("foo.txt");
        std::fs::write(&target, "original").unwrap();

        let err = create_atomic(&target, "other").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "original");
        assert_eq!(entries(tmp.path()), vec!["foo.txt"]);
    }

    #[tokio::test]
    async fn create_atomic_writes_new_file() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("foo.txt");

        create_atomic(&target, "hello").await.unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "hello");
        assert_eq!(entries(tmp.path()), vec!["foo.txt"]);
    }

    #[test]
    fn temp_files_are_hidden_fixed_length_siblings() {
        let short = temp_path_for(Path::new("/srv/notes/a.txt"));
        let long_target = format!("/srv/notes/{}.txt", "x".repeat(MAX_NOTE_NAME_LENGTH));
        let long = temp_path_for(Path::new(&long_target));

        assert_eq!(short.parent(), Some(Path::new("/srv/notes")));
        assert_eq!(long.parent(), Some(Path::new("/srv/notes")));
        let short_name = short.file_name().unwrap().to_str().unwrap();
        let long_name = long.file_name().unwrap().to_str().unwrap();
        assert!(short_name.starts_with('.'));
        assert!(short_name.ends_with(".tmp"));
        assert_eq!(short_name.len(), long_name.len());
        assert!(long_name.len() <= 255);
    }

    #[tokio::test]
    async fn longest_note_name_can_be_created_and_replaced() {
        let tmp = TempDir::new().unwrap();
        let target = tmp
            .path()
            .join(format!("{}.txt", "n".repeat(MAX_NOTE_NAME_LENGTH)));

        create_atomic(&target, "first").await.unwrap();
        write_atomic(&target, "second").await.unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "second");
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    struct BrokenWriter;

    impl AsyncWrite for BrokenWriter {
        fn poll_write(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            _buf: &[u8],
        ) -> Poll<io::Result<usize>> {
            Poll::Ready(Err(io::Error::new(ErrorKind::StorageFull, "disk full")))
        }

        fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }

        fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }
    }

    #[tokio::test]
    async fn failed_exclusive_write_removes_partial_file() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("foo.txt");
        std::fs::write(&target, "").unwrap();

        let err = fill_new_file(&target, BrokenWriter, "contents").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::StorageFull);
        assert!(!target.exists());
    }
}
