use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BookmarkError>;

/// Errors raised while loading or configuring a parse.
///
/// Malformed lines inside a document are never errors; they are skipped and
/// missing fields fall back to their defaults.
#[derive(Debug, Error)]
pub enum BookmarkError {
    #[error("Bookmark file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read bookmark file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("There is no document content to parse; load a non-empty bookmark file first")]
    EmptyDocument,

    #[error("Invalid date range {value:?}: {reason}")]
    InvalidDateRange { value: String, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
}
