//! Run-scoped staging directory.

use crate::pack::Result;
use crate::pack::utils::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Uniquely named staging directory for one packaging run.
///
/// Holds the intermediate bundle and any copied asset files. Created at
/// pipeline start and removed on every exit path: [`close`](Self::close) on
/// the normal paths, [`Drop`] as the backstop. The unique name keeps
/// concurrent runs in the same working directory from corrupting each
/// other's staged files.
#[derive(Debug)]
pub struct StagingDir {
    path: PathBuf,
    armed: bool,
}

impl StagingDir {
    /// Creates the staging directory under `parent`.
    pub async fn create(parent: &Path) -> Result<Self> {
        let path = parent.join(format!(".nodepack-{}", Uuid::new_v4()));
        tokio::fs::create_dir_all(&path).await?;
        Ok(Self { path, armed: true })
    }

    /// Returns the staging directory path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the bundled script inside the staging directory.
    pub fn bundle_path(&self) -> PathBuf {
        self.path.join("bundle.js")
    }

    /// Path of the staged assets directory.
    pub fn assets_dir(&self) -> PathBuf {
        self.path.join("assets")
    }

    /// Removes the staging directory and disarms the drop backstop.
    pub async fn close(mut self) -> Result<()> {
        self.armed = false;
        fs::remove_dir_all(&self.path).await
    }
}

impl Drop for StagingDir {
    fn drop(&mut self) {
        if self.armed {
            let _ = std::fs::remove_dir_all(&self.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn close_removes_the_directory() {
        let parent = tempfile::tempdir().unwrap();
        let staging = StagingDir::create(parent.path()).await.unwrap();
        let path = staging.path().to_path_buf();
        assert!(path.is_dir());

        staging.close().await.unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn drop_removes_the_directory_when_not_closed() {
        let parent = tempfile::tempdir().unwrap();
        let staging = StagingDir::create(parent.path()).await.unwrap();
        let path = staging.path().to_path_buf();

        drop(staging);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn two_runs_never_share_a_staging_path() {
        let parent = tempfile::tempdir().unwrap();
        let first = StagingDir::create(parent.path()).await.unwrap();
        let second = StagingDir::create(parent.path()).await.unwrap();
        assert_ne!(first.path(), second.path());
    }
}
