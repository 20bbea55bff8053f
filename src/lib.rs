//! Single-binary packager library for Node.js programs
//!
//! This library orchestrates two external collaborators: the `ncc` bundler,
//! which inlines an entry script and its dependencies into a single minified
//! file, and the `pkg` packager, which wraps that file with a Node.js runtime
//! snapshot into standalone platform binaries. Asset files can be staged
//! beside the binary, with a runtime lookup helper injected into the bundle.
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod pack;

// Re-export commonly used types
pub use error::{CliError, NodepackError, Result};
pub use pack::{Compiler, Platform, Settings, SettingsBuilder, compile};
