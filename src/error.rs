//! Error types for page-forge operations.
//!
//! Generation exposes exactly one error class to callers: a request that
//! cannot produce a complete document. Classification and catalog lookups
//! are total and never fail; only a structurally invalid request (or I/O
//! around the CLI) surfaces here.

use thiserror::Error;

/// Errors that can occur while handling a generation request.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("prompt must not be empty")]
    EmptyPrompt,

    #[error("malformed request: {0}")]
    MalformedRequest(String),

    #[error("unknown industry label '{0}'")]
    UnknownIndustry(String),

    #[error("unknown business type label '{0}'")]
    UnknownBusinessType(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
