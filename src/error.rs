//! Error taxonomy shared by the extractor, the builder and the renderers.

use thiserror::Error;

#[derive(Error, Debug)]
/// Everything that can go wrong between reading a document and writing its outline.
pub enum OutlineError {
    /// An entry's depth is zero or falls outside the configured depth range.
    #[error("Invalid entry '{id}' at depth {depth}: {reason}")]
    InvalidEntry {
        /// Heading level carried by the offending entry.
        depth: usize,
        /// Identifier of the offending entry.
        id: String,
        /// Which bound was violated.
        reason: String,
    },

    /// Two entries resolved to the same identifier.
    #[error("Duplicate identifier: {id}")]
    DuplicateIdentifier {
        /// The identifier seen more than once.
        id: String,
    },

    /// The depth range is empty or starts below level 1.
    #[error("Invalid depth bounds: start {start}, end {end}")]
    InvalidBounds {
        /// Shallowest accepted level.
        start: usize,
        /// Deepest accepted level.
        end: usize,
    },

    /// No section matches the selector an outline should be inserted into.
    #[error("Target section not found: {0}")]
    TargetNotFound(String),

    /// The document could not be parsed.
    #[error("Failed to parse document: {0}")]
    Parse(String),

    /// The configuration file could not be read or is invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// An outline could not be serialised.
    #[error("Failed to serialise outline: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Reading or writing a document failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OutlineError>;
