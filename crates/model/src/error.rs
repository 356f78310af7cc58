//! Error types for loading and linking a project model.

// Variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// Errors raised while reading or linking a project.
#[derive(Error, Debug)]
pub enum ModelError {
    /// The input is not a valid project document.
    #[error("invalid project JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The project file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A name reference does not match any object of that kind.
    #[error("{owner} references unknown {kind} {name:?}")]
    UnknownReference {
        kind: &'static str,
        name: String,
        owner: String,
    },

    /// Two objects of the same kind share a name used for lookups.
    #[error("duplicate {kind} name {name:?}")]
    DuplicateName { kind: &'static str, name: String },

    /// A numeric reference points outside its collection.
    #[error("{owner} references missing {kind} #{id}")]
    MissingId {
        kind: &'static str,
        id: u32,
        owner: String,
    },
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
