//! Error types for fallible construction and parsing.
//!
//! Widget operations themselves never fail; they degrade to no-ops.

use thiserror::Error;

/// Tree construction error.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("tree root `{0}` not found in document")]
    RootNotFound(String),
    #[error("tree root `{0}` has no tree items")]
    NoItems(String),
    #[error("invalid location `{url}`: {source}")]
    InvalidLocation {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Serialized outline error.
#[derive(Debug, Error)]
pub enum OutlineError {
    #[error("outline is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("outline entry at {path} has an empty label")]
    EmptyLabel { path: String },
}
