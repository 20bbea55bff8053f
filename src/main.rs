//! Nodepack - Single-binary packager for Node.js programs.
//!
//! This binary bundles a Node.js entry script with its dependencies into one
//! file and wraps it with a runtime snapshot to produce standalone
//! platform-specific executables.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match nodepack::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
