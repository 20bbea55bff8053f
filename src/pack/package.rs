//! Packager invocation.
//!
//! Hands the bundled script to the external `pkg` packager, which wraps it
//! with a Node.js runtime snapshot into standalone platform binaries.

use crate::pack::error::{Error, ErrorExt, Result};
use serde::Serialize;
use std::path::Path;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

/// Config file handed to `pkg` when assets were staged.
#[derive(Serialize)]
struct PkgConfig<'a> {
    pkg: PkgSection<'a>,
}

#[derive(Serialize)]
struct PkgSection<'a> {
    assets: [&'a str; 1],
}

/// Wraps a bundled script and a runtime snapshot into standalone binaries.
///
/// Seam for the external packager so the pipeline can be exercised with
/// substitutes in tests.
pub trait PackageEngine {
    /// Packages `bundle` for each target identifier, writing binaries at
    /// `out_file`. `assets_glob` selects staged asset files to embed in the
    /// snapshot, when assets were staged.
    fn package(
        &self,
        bundle: &Path,
        targets: &[String],
        assets_glob: Option<&str>,
        out_file: &Path,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// Production packager backed by the `pkg` CLI.
#[derive(Debug, Default)]
pub struct PkgPackager;

impl PkgPackager {
    /// Creates a new packager.
    pub fn new() -> Self {
        Self
    }
}

impl PackageEngine for PkgPackager {
    async fn package(
        &self,
        bundle: &Path,
        targets: &[String],
        assets_glob: Option<&str>,
        out_file: &Path,
    ) -> Result<()> {
        let pkg = which::which("pkg").map_err(|_| Error::ToolNotFound {
            tool: "pkg".to_string(),
            package: "pkg".to_string(),
        })?;

        let mut command = Command::new(&pkg);
        command
            .arg(bundle)
            .arg("--targets")
            .arg(targets.join(","))
            .arg("--output")
            .arg(out_file);

        if let Some(glob) = assets_glob {
            // pkg reads assets from a package.json-shaped config file
            let config_path = bundle.with_file_name("pkg.config.json");
            let config = PkgConfig {
                pkg: PkgSection { assets: [glob] },
            };
            tokio::fs::write(&config_path, serde_json::to_vec_pretty(&config)?)
                .await
                .fs_context("writing packager config", &config_path)?;
            command.arg("--config").arg(&config_path);
        }

        log::debug!("pkg --targets {} --output {}", targets.join(","), out_file.display());

        let mut child = command
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::CommandFailed {
                command: "pkg".to_string(),
                detail: e.to_string(),
            })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        // Stream stdout through the logger while capturing stderr for the
        // failure report; both streams drain before the exit status is read
        let (_, stderr_lines) = tokio::join!(
            async {
                if let Some(stdout) = stdout {
                    let mut lines = BufReader::new(stdout).lines();
                    while let Ok(Some(line)) = lines.next_line().await {
                        log::info!("pkg: {}", line);
                    }
                }
            },
            async {
                let mut captured = Vec::new();
                if let Some(stderr) = stderr {
                    let mut lines = BufReader::new(stderr).lines();
                    while let Ok(Some(line)) = lines.next_line().await {
                        captured.push(line);
                    }
                }
                captured
            }
        );

        let status = child.wait().await.map_err(|e| Error::CommandFailed {
            command: "pkg".to_string(),
            detail: e.to_string(),
        })?;

        if !status.success() {
            let detail = if stderr_lines.is_empty() {
                format!("exit code {:?}", status.code())
            } else {
                stderr_lines.join("\n")
            };
            log::error!("pkg failed: {}", detail);
            return Err(Error::CommandFailed {
                command: "pkg".to_string(),
                detail,
            });
        }

        Ok(())
    }
}
