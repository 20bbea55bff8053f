//! Error types for the packaging pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the packaging pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// Catch-all error with a preformatted message
    #[error("{0}")]
    GenericError(String),

    /// IO errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Entry script missing at resolution time
    #[error("entry file not found: {0}")]
    EntryNotFound(PathBuf),

    /// External collaborator missing from PATH
    #[error("`{tool}` not found on PATH. Install it with `npm install -g {package}`.")]
    ToolNotFound {
        /// Executable name looked up on PATH
        tool: String,
        /// npm package that provides it
        package: String,
    },

    /// External collaborator invocation failed
    #[error("{command} failed: {detail}")]
    CommandFailed {
        /// Command that failed
        command: String,
        /// Captured stderr or spawn error
        detail: String,
    },

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Template rendering errors
    #[error("template error: {0}")]
    Template(#[from] handlebars::RenderError),
}

/// Bails out of the enclosing function with a [`Error::GenericError`].
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::pack::Error::GenericError(format!($($arg)*)).into())
    };
}

/// Extension trait turning `Option` into a pipeline error with a message.
pub trait Context<T> {
    /// Unwraps the option or fails with `msg`.
    fn context(self, msg: &str) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context(self, msg: &str) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }
}

/// Extension trait adding path context to file system errors.
pub trait ErrorExt<T> {
    /// Wraps an I/O error with the attempted action and the path involved.
    fn fs_context(self, action: &str, path: &std::path::Path) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, action: &str, path: &std::path::Path) -> Result<T> {
        self.map_err(|e| {
            Error::GenericError(format!("error {} at {}: {}", action, path.display(), e))
        })
    }
}
