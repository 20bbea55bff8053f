//! File system helpers for staging and installing assets.
//!
//! Provides copy operations with automatic parent directory creation and an
//! idempotent directory removal.

use crate::pack::error::{Error, Result};
use std::{io, path::Path};
use tokio::fs;

/// Removes the directory and its contents if it exists.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e.into()),
    }
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Fails if the source path is a directory or doesn't exist.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if !from.is_file() {
        return Err(Error::GenericError(format!("{:?} is not a file", from)));
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir).await?;
    }
    fs::copy(from, to).await?;
    Ok(())
}

/// Recursively copies the contents of `from` into `to`, merging with
/// whatever is already there.
///
/// The source directory itself is not recreated under the destination; its
/// entries land directly in `to`, with inner structure preserved. Existing
/// files are overwritten (last writer wins).
pub async fn copy_dir_contents(from: &Path, to: &Path) -> Result<()> {
    if !from.is_dir() {
        return Err(Error::GenericError(format!(
            "{:?} is not a directory",
            from
        )));
    }

    // Clone paths for move into blocking closure
    let from = from.to_path_buf();
    let to = to.to_path_buf();

    // Offload blocking traversal to the dedicated thread pool
    tokio::task::spawn_blocking(move || {
        std::fs::create_dir_all(&to)?;

        for entry in walkdir::WalkDir::new(&from) {
            let entry =
                entry.map_err(|e| Error::GenericError(format!("walking {:?}: {}", from, e)))?;
            let rel_path = entry
                .path()
                .strip_prefix(&from)
                .map_err(|e| Error::GenericError(format!("stripping prefix: {}", e)))?;
            if rel_path.as_os_str().is_empty() {
                continue;
            }
            let dest_path = to.join(rel_path);

            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&dest_path)?;
            } else {
                if let Some(parent) = dest_path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::copy(entry.path(), &dest_path)?;
            }
        }

        Ok::<(), Error>(())
    })
    .await
    .map_err(|e| Error::GenericError(format!("directory copy task panicked: {}", e)))?
}
