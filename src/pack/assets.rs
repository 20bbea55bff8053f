//! Asset staging beside the bundled script.
//!
//! Copies asset files and directory contents into a flat `assets/`
//! subdirectory of the staging area, and installs a copy next to the final
//! binary after packaging succeeds.

use crate::pack::StagingDir;
use crate::pack::error::{Context, Result};
use crate::pack::utils::fs;
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Copies each asset into the staging `assets/` directory.
///
/// Entries are processed sequentially in list order. Files land under their
/// basename; directory entries contribute their contents, merged into the
/// shared directory. Name collisions are not detected, the last writer
/// wins. Paths that do not exist are skipped with a warning and do not fail
/// the run.
///
/// Returns the number of asset entries actually staged.
pub(crate) async fn stage_assets(assets: &[PathBuf], staging: &StagingDir) -> Result<usize> {
    let assets_dir = staging.assets_dir();
    let mut staged = 0usize;

    for asset in assets {
        let asset = asset.absolutize()?.into_owned();
        if !asset.exists() {
            log::warn!("asset not found, skipping: {}", asset.display());
            continue;
        }

        if asset.is_dir() {
            fs::copy_dir_contents(&asset, &assets_dir).await?;
        } else {
            let name = asset.file_name().context("asset path has no file name")?;
            fs::copy_file(&asset, &assets_dir.join(name)).await?;
        }
        staged += 1;
    }

    Ok(staged)
}

/// Copies the staged assets next to the final binary.
///
/// Fallback for runtime environments where the snapshot-embedded assets are
/// not resolvable; runs only after packaging succeeded.
pub(crate) async fn install_assets_beside_output(
    staging: &StagingDir,
    out_file: &Path,
) -> Result<()> {
    let target = match out_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join("assets"),
        _ => PathBuf::from("assets"),
    };
    fs::copy_dir_contents(&staging.assets_dir(), &target).await
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn staging(parent: &Path) -> StagingDir {
        StagingDir::create(parent).await.unwrap()
    }

    #[tokio::test]
    async fn missing_asset_is_skipped_without_failing() {
        let dir = tempfile::tempdir().unwrap();
        let staging = staging(dir.path()).await;

        let staged = stage_assets(&[PathBuf::from("./missing-dir")], &staging)
            .await
            .unwrap();

        assert_eq!(staged, 0);
        assert!(!staging.assets_dir().exists());
    }

    #[tokio::test]
    async fn directory_contents_are_flattened_into_assets() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.json");
        std::fs::write(&config, "{}").unwrap();
        let images = dir.path().join("images");
        std::fs::create_dir(&images).unwrap();
        std::fs::write(images.join("a.png"), "png").unwrap();

        let staging = staging(dir.path()).await;
        let staged = stage_assets(&[config, images], &staging).await.unwrap();

        assert_eq!(staged, 2);
        let assets_dir = staging.assets_dir();
        assert!(assets_dir.join("config.json").is_file());
        assert!(assets_dir.join("a.png").is_file());
        assert!(!assets_dir.join("images").exists());
    }

    #[tokio::test]
    async fn colliding_names_resolve_to_the_last_writer() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first");
        let second = dir.path().join("second");
        std::fs::create_dir(&first).unwrap();
        std::fs::create_dir(&second).unwrap();
        std::fs::write(first.join("logo.svg"), "first").unwrap();
        std::fs::write(second.join("logo.svg"), "second").unwrap();

        let staging = staging(dir.path()).await;
        stage_assets(&[first, second], &staging).await.unwrap();

        assert_eq!(
            std::fs::read_to_string(staging.assets_dir().join("logo.svg")).unwrap(),
            "second"
        );
    }

    #[tokio::test]
    async fn install_places_assets_beside_the_binary() {
        let dir = tempfile::tempdir().unwrap();
        let asset = dir.path().join("config.json");
        std::fs::write(&asset, "{}").unwrap();

        let staging = staging(dir.path()).await;
        stage_assets(&[asset], &staging).await.unwrap();

        let out_file = dir.path().join("dist/app");
        install_assets_beside_output(&staging, &out_file)
            .await
            .unwrap();

        assert!(dir.path().join("dist/assets/config.json").is_file());
    }
}
