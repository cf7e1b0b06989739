//! Error types for the `petri-session` crate.
//!
//! Pattern syntax failures and file-system failures are distinct variants
//! so embedders can present different messages for each ("file not found"
//! vs "bad pattern syntax"). Both are local and recoverable: a failed load
//! never leaves the session's grid in a partial state.

use std::path::PathBuf;

use petri_engine::PatternError;

/// Errors surfaced by session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The pattern file could not be read from disk.
    #[error("failed to read pattern file {}: {source}", path.display())]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The pattern text was malformed.
    #[error(transparent)]
    Pattern(#[from] PatternError),
}
