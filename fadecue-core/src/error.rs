//! Error types for fadecue-core.
//!
//! Two variants carry the batch policy: [`CoreError::MissingMedia`] is
//! absorbed per scene by the catalog driver, while [`CoreError::ProbeFailed`]
//! aborts the whole run. Everything else is a fatal configuration or output
//! error.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Failed to read scene catalog {}: {source}", path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed scene catalog {}: {source}", path.display())]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Skipping {scene}: missing file {}", path.display())]
    MissingMedia { scene: String, path: PathBuf },

    #[error("ffprobe failed for {}: {message}", path.display())]
    ProbeFailed { path: PathBuf, message: String },

    #[error("Failed to write transition document {}: {source}", path.display())]
    DocumentWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl CoreError {
    /// True for errors the catalog driver skips past instead of aborting on.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CoreError::MissingMedia { .. })
    }
}

/// Result type for fadecue-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
