//! Core Settings struct and implementations.

use super::Platform;
use std::path::{Path, PathBuf};

/// Main settings for a packaging run.
///
/// Central configuration for the pipeline, constructed via
/// [`SettingsBuilder`](super::SettingsBuilder) and never mutated afterwards.
/// Lives for exactly one run and carries no state across invocations.
///
/// # Examples
///
/// ```no_run
/// use nodepack::pack::{Platform, SettingsBuilder};
///
/// # fn example() -> nodepack::pack::Result<()> {
/// let settings = SettingsBuilder::new()
///     .entry("server.js")
///     .out_file("dist/app")
///     .platform(Platform::All)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Entry script, absolute.
    entry: PathBuf,

    /// Output path or basename for the produced binaries.
    out_file: PathBuf,

    /// Node.js runtime version token (digits only, e.g. "16").
    node_version: String,

    /// Platform selection.
    platform: Platform,

    /// Asset files and directories to stage, in list order.
    assets: Vec<PathBuf>,
}

impl Settings {
    /// Returns the absolute path of the entry script.
    pub fn entry(&self) -> &Path {
        &self.entry
    }

    /// Returns the output path for the produced binaries.
    pub fn out_file(&self) -> &Path {
        &self.out_file
    }

    /// Returns the runtime version token.
    pub fn node_version(&self) -> &str {
        &self.node_version
    }

    /// Returns the platform selection.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Returns the asset paths to stage.
    pub fn assets(&self) -> &[PathBuf] {
        &self.assets
    }

    /// Builds the target identifier list handed to the packager.
    ///
    /// [`Platform::All`] expands to windows, macOS and linux, always at x64;
    /// every other platform maps to exactly one identifier of the form
    /// `node<version>-<platform>-x64`.
    pub fn target_identifiers(&self) -> Vec<String> {
        let platforms = match self.platform {
            Platform::All => vec![Platform::Win, Platform::Macos, Platform::Linux],
            p => vec![p],
        };

        platforms
            .into_iter()
            .map(|p| format!("node{}-{}-x64", self.node_version, p.slug()))
            .collect()
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        entry: PathBuf,
        out_file: PathBuf,
        node_version: String,
        platform: Platform,
        assets: Vec<PathBuf>,
    ) -> Self {
        Self {
            entry,
            out_file,
            node_version,
            platform,
            assets,
        }
    }
}
