//! Station directory error types.

use std::path::PathBuf;

/// Errors that can occur when querying or loading the station directory.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// The lookup key was empty; the store cannot search for it
    #[error("empty search key")]
    EmptyKey,

    /// Reading the station file failed
    #[error("failed to read station file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Station file is not valid JSON
    #[error("station file parse error: {message}")]
    Json { message: String },

    /// The table has no file to reload from
    #[error("not configured: {0}")]
    NotConfigured(String),
}
