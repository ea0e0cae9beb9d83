//! Error types for ap-census core.

use thiserror::Error;

/// Core error type for shared operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Scan invocation errors.
///
/// An empty-but-successful report is not an error: it is a legitimately
/// empty environment. These variants cover the cases that must stay
/// distinguishable from "zero APs observed".
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to invoke scan command: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Scan command exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    #[error("Scan timed out after {0} seconds")]
    Timeout(u64),

    #[error("Scan output is not valid UTF-8")]
    InvalidOutput,
}

/// Cycle journal errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Malformed journal at line {line}: {message}")]
    Malformed { line: usize, message: String },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
