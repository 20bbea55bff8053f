//! Builder for constructing Settings.

use super::{Platform, Settings};
use crate::pack::error::{Context, Error, Result};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// Resolution happens in [`build`](Self::build): the entry path is
/// absolutized and checked for existence, and the runtime version token is
/// validated, before any side-effecting pipeline stage can observe the
/// configuration.
///
/// # Examples
///
/// ```no_run
/// use nodepack::pack::SettingsBuilder;
///
/// # fn example() -> nodepack::pack::Result<()> {
/// let settings = SettingsBuilder::new()
///     .entry("server.js")
///     .node_version("18")
///     .assets(["config.json", "static"])
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    entry: Option<PathBuf>,
    out_file: Option<PathBuf>,
    node_version: Option<String>,
    platform: Option<Platform>,
    assets: Vec<PathBuf>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the entry script.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn entry<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.entry = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the output path or basename for the produced binaries.
    ///
    /// Default: `"output"`
    pub fn out_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.out_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the Node.js runtime version token.
    ///
    /// Default: `"16"`
    pub fn node_version<S: Into<String>>(mut self, version: S) -> Self {
        self.node_version = Some(version.into());
        self
    }

    /// Sets the target platform.
    ///
    /// Default: [`Platform::host()`]
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Appends asset files or directories to stage beside the binary.
    ///
    /// Entries are staged in the order given; paths that do not exist are
    /// skipped with a warning at staging time.
    pub fn assets<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.assets
            .extend(paths.into_iter().map(|p| p.as_ref().to_path_buf()));
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// - `entry` was never set
    /// - the resolved entry path does not exist on disk
    /// - the runtime version token contains non-digit characters
    pub fn build(self) -> Result<Settings> {
        let entry = self.entry.context("entry is required")?;
        let entry = entry.absolutize()?.into_owned();
        if !entry.exists() {
            return Err(Error::EntryNotFound(entry));
        }

        let node_version = self.node_version.unwrap_or_else(|| "16".to_string());
        if node_version.is_empty() || !node_version.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::GenericError(format!(
                "invalid runtime version token: {}",
                node_version
            )));
        }

        Ok(Settings::new(
            entry,
            self.out_file.unwrap_or_else(|| PathBuf::from("output")),
            node_version,
            self.platform.unwrap_or_else(Platform::host),
            self.assets,
        ))
    }
}
