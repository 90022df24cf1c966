//! Error types for roster loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a member roster.
///
/// Matching and recommendation never fail; only reading the roster from its source can.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Failed to read a roster file.
    #[error("failed to read roster file at {path}: {source}")]
    ReadFile {
        /// Path to the file that couldn't be read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Roster content is not valid JSON.
    #[error("failed to parse roster: {0}")]
    Parse(#[from] serde_json::Error),

    /// Roster JSON is neither a list of members nor a `{"data": [...]}` envelope.
    #[error("unexpected roster shape: expected a list of members or a `data` envelope")]
    UnexpectedShape,
}
