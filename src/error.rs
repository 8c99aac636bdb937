//! Error types for html-email-clean.
//!
//! Cleaning itself never fails: malformed markup is recovered by the parser and
//! policy conflicts are resolved deterministically. These errors belong to the
//! surfaces around the core (config files, buffers, the CLI).

/// Error type for the collaborator-facing operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration document could not be read as a `Config`.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Reading or writing a file failed.
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// An editor selection does not describe a usable range of the buffer.
    #[error("Invalid selection {start}..{end}: {reason}")]
    InvalidSelection {
        /// Start byte offset of the rejected selection.
        start: usize,
        /// End byte offset of the rejected selection.
        end: usize,
        /// Why the selection was rejected.
        reason: &'static str,
    },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for operations that can fail.
pub type Result<T> = std::result::Result<T, Error>;
