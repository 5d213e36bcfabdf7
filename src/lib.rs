//! Todofile - a REST service for todo records backed by a single JSON file.
//!
//! This library provides the core functionality for the `todofile` binary:
//! the file-backed storage adapter, the repository operations, and the HTTP
//! endpoint layer.

pub mod cli;
pub mod models;
pub mod repo;
pub mod server;
pub mod storage;

/// Library-level error type for todofile operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("todo {0} not found")]
    NotFound(String),
}

impl Error {
    /// NotFound for a numeric id.
    pub fn not_found(id: u64) -> Self {
        Self::NotFound(id.to_string())
    }
}

/// Result type alias for todofile operations.
pub type Result<T> = std::result::Result<T, Error>;
