//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with platform and
//! runtime-version validation happening at the boundary rather than inside
//! the packaging subprocess.

use crate::error::CliError;
use crate::pack::{Platform, Settings, SettingsBuilder};
use clap::Parser;
use std::path::PathBuf;

/// Single-binary packager for Node.js programs
#[derive(Parser, Debug)]
#[command(
    name = "nodepack",
    version,
    about = "Package a Node.js program into self-contained executables",
    long_about = "Bundles a Node.js entry script with its dependencies into a single file,
then wraps it with a runtime snapshot to produce standalone platform binaries.

Usage:
  nodepack server.js
  nodepack --out dist/app --target 18 --platform all server.js
  nodepack --assets config.json --assets static/ server.js

Exit code 0 = build succeeded (or usage was displayed)."
)]
pub struct Args {
    /// Entry script to package (the last one wins when repeated)
    #[arg(value_name = "ENTRY")]
    pub entry: Vec<PathBuf>,

    /// Output path or basename for the produced binaries
    #[arg(short, long, value_name = "NAME", default_value = "output")]
    pub out: PathBuf,

    /// Node.js runtime version token (digits only)
    #[arg(short, long, value_name = "N", default_value = "16")]
    pub target: String,

    /// Platform to package for (defaults to the current OS)
    #[arg(short, long, value_enum, value_name = "PLATFORM")]
    pub platform: Option<Platform>,

    /// Asset file or directory to ship beside the binary; repeatable
    #[arg(short, long, value_name = "PATH")]
    pub assets: Vec<PathBuf>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Resolves parsed arguments into pipeline settings.
    ///
    /// The last bare ENTRY token wins. Fails if no entry was given, if the
    /// resolved entry does not exist on disk, or if the runtime version
    /// token is not a string of digits.
    pub fn into_settings(self) -> crate::error::Result<Settings> {
        let entry = self.entry.last().cloned().ok_or(CliError::MissingArgument {
            argument: "<entry-file>".to_string(),
        })?;

        let mut builder = SettingsBuilder::new()
            .entry(entry)
            .out_file(self.out)
            .node_version(self.target)
            .assets(self.assets);

        if let Some(platform) = self.platform {
            builder = builder.platform(platform);
        }

        Ok(builder.build()?)
    }
}
