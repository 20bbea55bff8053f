//! Pipeline orchestration.
//!
//! Coordinates the stages of a packaging run: bundling, asset staging, and
//! packaging, with a run-scoped staging directory that is removed on every
//! exit path. Resolution happens earlier, in
//! [`SettingsBuilder`](crate::pack::SettingsBuilder).

use crate::pack::{
    BundleEngine, NccBundler, PackageEngine, PkgPackager, Result, Settings, StagingDir, assets,
    helper,
};

/// Glob handed to the packager to embed staged assets in the snapshot.
const ASSETS_GLOB: &str = "assets/**/*";

/// Pipeline orchestrator.
///
/// Owns the settings and the two external collaborators. [`Compiler::new`]
/// wires the production engines (`ncc` and `pkg`);
/// [`Compiler::with_engines`] accepts substitutes for testing.
///
/// # Examples
///
/// ```no_run
/// use nodepack::pack::{Compiler, SettingsBuilder};
///
/// # async fn example() -> nodepack::pack::Result<()> {
/// let settings = SettingsBuilder::new().entry("server.js").build()?;
/// Compiler::new(settings).compile().await?;
/// # Ok(())
/// # }
/// ```
pub struct Compiler<B = NccBundler, P = PkgPackager> {
    settings: Settings,
    bundler: B,
    packager: P,
}

impl Compiler {
    /// Creates a compiler using the production bundler and packager.
    pub fn new(settings: Settings) -> Self {
        Self::with_engines(settings, NccBundler::new(), PkgPackager::new())
    }
}

impl<B: BundleEngine, P: PackageEngine> Compiler<B, P> {
    /// Creates a compiler with explicit engines.
    pub fn with_engines(settings: Settings, bundler: B, packager: P) -> Self {
        Self {
            settings,
            bundler,
            packager,
        }
    }

    /// Returns a reference to the run settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Runs the full pipeline: bundle, stage assets, package, clean up.
    ///
    /// Stages run strictly in order with no retries; the first failure
    /// aborts the run and is returned as-is. The staging directory is
    /// removed whether packaging succeeds or fails.
    pub async fn compile(&self) -> Result<()> {
        let cwd = std::env::current_dir()?;
        let staging = StagingDir::create(&cwd).await?;

        let result = self.run_stages(&staging).await;

        // Unconditional cleanup; the Drop backstop only covers panics
        if let Err(e) = staging.close().await {
            log::warn!("failed to remove staging directory: {}", e);
        }

        result
    }

    async fn run_stages(&self, staging: &StagingDir) -> Result<()> {
        let bundle = staging.bundle_path();

        log::info!("bundling {}", self.settings.entry().display());
        self.bundler
            .bundle(self.settings.entry(), self.settings.node_version(), &bundle)
            .await?;

        let mut assets_staged = false;
        if !self.settings.assets().is_empty() {
            let staged = assets::stage_assets(self.settings.assets(), staging).await?;
            if staged > 0 {
                helper::inject_asset_helper(&bundle).await?;
                assets_staged = true;
            }
        }

        let targets = self.settings.target_identifiers();
        log::info!("packaging for [{}]", targets.join(", "));
        self.packager
            .package(
                &bundle,
                &targets,
                assets_staged.then_some(ASSETS_GLOB),
                self.settings.out_file(),
            )
            .await?;

        if assets_staged {
            assets::install_assets_beside_output(staging, self.settings.out_file()).await?;
        }

        log::info!("created {}", self.settings.out_file().display());
        Ok(())
    }
}

/// Packages with the production engines.
///
/// Programmatic equivalent of the CLI: resolves with `Ok(())` on success and
/// fails with the first stage error otherwise.
pub async fn compile(settings: Settings) -> Result<()> {
    Compiler::new(settings).compile().await
}
