//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and serialization errors, and wraps the fatal
//! argument-resolution errors raised by the CLI layer.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Argument error: {0}")]
    Arguments(#[from] crate::cli::errors::AppError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl Error {
    pub fn conversion<E: std::fmt::Display>(e: E) -> Self {
        Error::Conversion(e.to_string())
    }
}
