//! This module contains the error types for the persistence layer.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in the persistence layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The persisted state exists but could not be read.
    #[error("Failed to read announcement state from {}: {source}", path.display())]
    Read {
        /// Path of the state file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The persisted state exists but could not be parsed.
    #[error("Announcement state at {} is corrupt: {source}", path.display())]
    Corrupt {
        /// Path of the state file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The state could not be serialized for writing.
    #[error("Failed to serialize announcement state: {0}")]
    Serialize(serde_json::Error),

    /// The state could not be written durably.
    #[error("Failed to write announcement state to {}: {source}", path.display())]
    Write {
        /// Path of the state file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
