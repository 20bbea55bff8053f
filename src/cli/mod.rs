//! Command line interface for nodepack.
//!
//! This module provides the CLI entry point: argument parsing, pipeline
//! execution, and exit code mapping.

mod args;

pub use args::Args;

use crate::error::Result;
use crate::pack::Compiler;
use clap::{CommandFactory, Parser};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    // A bare invocation prints usage without attempting a build.
    if std::env::args().len() <= 1 {
        let _ = Args::command().print_help();
        return Ok(0);
    }

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e)
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion =>
        {
            let _ = e.print();
            return Ok(0);
        }
        Err(e) => {
            let _ = e.print();
            return Ok(1);
        }
    };

    let settings = args.into_settings()?;
    Compiler::new(settings).compile().await?;

    Ok(0)
}
