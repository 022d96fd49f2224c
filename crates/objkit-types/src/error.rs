use thiserror::Error;

/// Errors produced by value operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

/// Convenience alias for value results.
pub type Result<T> = std::result::Result<T, TypeError>;
