//! Error types for splitting and for the command-line driver.
//!
//! Uses the dual-error pattern: `SplitError` covers the pure splitter's
//! argument validation, and `Error` wraps it together with the I/O and
//! encoding failures that only the CLI can run into.

use std::path::PathBuf;
use thiserror::Error;

/// Invalid arguments to the section splitter.
#[derive(Debug, Error)]
pub enum SplitError {
    /// Requested heading level outside 1..=6.
    #[error("invalid level: {level} (expected a heading level between 1 and 6)")]
    InvalidLevel {
        /// The rejected level.
        level: usize,
    },

    /// Both level-1 filters were supplied.
    #[error("heading1_prefixes and heading1_pattern are mutually exclusive")]
    ConfigurationConflict,

    /// The level-1 heading pattern is not a valid regular expression.
    #[error("invalid heading1_pattern '{pattern}': {source}")]
    Pattern {
        /// The pattern as supplied.
        pattern: String,
        /// Compilation failure reported by the regex engine.
        #[source]
        source: regex::Error,
    },
}

/// Failures surfaced by the command-line driver.
#[derive(Debug, Error)]
pub enum Error {
    /// Splitting was rejected before any output was produced.
    #[error(transparent)]
    Split(#[from] SplitError),

    /// The input file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A section file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Path of the section file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The output directory could not be created.
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        /// Path of the output directory.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The encoding label is not recognised.
    #[error("unknown encoding: '{0}'")]
    UnknownEncoding(String),

    /// The input file is not valid in the chosen encoding.
    #[error("{} is not valid {encoding}", .path.display())]
    Decode {
        /// Path of the input file.
        path: PathBuf,
        /// Name of the encoding used for decoding.
        encoding: String,
    },

    /// A section contains characters the chosen encoding cannot represent.
    #[error("{} cannot be encoded as {encoding}", .path.display())]
    Encode {
        /// Path of the section file.
        path: PathBuf,
        /// Name of the encoding used for encoding.
        encoding: String,
    },

    /// JSON rendering failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "tests/error.rs"]
mod tests;
