//! Packaging pipeline: bundling, asset staging, and binary generation.
//!
//! This module provides the pipeline that turns a Node.js entry script into
//! standalone executables. The heavy lifting is delegated to two external
//! collaborators behind trait seams: a [`BundleEngine`] that inlines the
//! source into one script, and a [`PackageEngine`] that wraps the script
//! with a runtime snapshot.

mod assets;
mod bundle;
mod compiler;
pub mod error;
mod helper;
mod package;
mod settings;
mod staging;
mod utils;

// Re-export all public types
pub use bundle::{BundleEngine, NccBundler};
pub use compiler::{Compiler, compile};
pub use error::{Error, Result};
pub use package::{PackageEngine, PkgPackager};
pub use settings::{Platform, Settings, SettingsBuilder};
pub use staging::StagingDir;
