//! Error types for the Pokedex CLI
//!
//! Provides unified error handling using thiserror.
//!
//! The cache itself has no error taxonomy: adds cannot fail and misses are
//! signalled with `Option`. Errors here belong to the fetch layer and the
//! command loop.

use thiserror::Error;

// == App Error Enum ==
/// Unified error type for the Pokedex CLI.
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP request failed (connection, timeout, ...)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the JSON we expected
    #[error("error parsing JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Server answered with a non-success status
    #[error("unexpected status {status} fetching {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Reading user input failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex CLI.
pub type Result<T> = std::result::Result<T, AppError>;
