//! Error types for the article search library.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SearchError>;

/// The error type for all fallible search operations.
#[derive(Error, Debug)]
pub enum SearchError {
    /// An operation that needs an index ran before any successful build.
    #[error("Index not built: {0}")]
    NotBuilt(String),

    /// Caller-supplied data was rejected.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A configuration value is out of range.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl SearchError {
    pub fn not_built<S: Into<String>>(msg: S) -> Self {
        SearchError::NotBuilt(msg.into())
    }

    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SearchError::InvalidArgument(msg.into())
    }

    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SearchError::InvalidConfig(msg.into())
    }

    pub fn other<S: Into<String>>(msg: S) -> Self {
        SearchError::Other(msg.into())
    }

    /// Returns true if this error means the index has not been built yet.
    pub fn is_not_built(&self) -> bool {
        matches!(self, SearchError::NotBuilt(_))
    }
}
