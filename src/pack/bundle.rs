//! Bundler invocation.
//!
//! Delegates module resolution, inlining and minification to the external
//! `ncc` bundler, which turns the entry script into one self-contained file
//! at the staging directory.

use crate::bail;
use crate::pack::error::{Context, Error, ErrorExt, Result};
use std::path::Path;
use tokio::process::Command;

/// Produces one self-contained script from an entry file.
///
/// Seam for the external bundler so the pipeline can be exercised with
/// substitutes in tests.
pub trait BundleEngine {
    /// Bundles `entry` for the given Node.js runtime version, writing the
    /// resulting script to `out_file`.
    fn bundle(
        &self,
        entry: &Path,
        node_version: &str,
        out_file: &Path,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// Production bundler backed by the `ncc` CLI.
///
/// Source maps are disabled and output is always minified.
#[derive(Debug, Default)]
pub struct NccBundler;

impl NccBundler {
    /// Creates a new bundler.
    pub fn new() -> Self {
        Self
    }
}

impl BundleEngine for NccBundler {
    async fn bundle(&self, entry: &Path, node_version: &str, out_file: &Path) -> Result<()> {
        let ncc = which::which("ncc").map_err(|_| Error::ToolNotFound {
            tool: "ncc".to_string(),
            package: "@vercel/ncc".to_string(),
        })?;

        let out_dir = out_file
            .parent()
            .context("bundle output path has no parent directory")?;
        let target = format!("node{}", node_version);

        log::debug!(
            "ncc build {} -o {} --target {}",
            entry.display(),
            out_dir.display(),
            target
        );

        let output = Command::new(&ncc)
            .arg("build")
            .arg(entry)
            .arg("-o")
            .arg(out_dir)
            .arg("--minify")
            .arg("--no-source-map-register")
            .arg("--target")
            .arg(&target)
            .output()
            .await
            .map_err(|e| Error::CommandFailed {
                command: "ncc build".to_string(),
                detail: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(Error::CommandFailed {
                command: "ncc build".to_string(),
                detail: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        // ncc always names its entry chunk index.js
        let emitted = out_dir.join("index.js");
        if !emitted.is_file() {
            bail!("ncc produced no bundle at {}", emitted.display());
        }
        tokio::fs::rename(&emitted, out_file)
            .await
            .fs_context("moving bundled script", &emitted)?;

        Ok(())
    }
}
