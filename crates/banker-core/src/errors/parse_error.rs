//! Text and file input errors.

use super::error_code::{self, BankerErrorCode};
use super::InvalidInputError;

/// Errors raised while collecting checker input from text or snapshot files.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("{field}: '{token}' is not an integer")]
    InvalidInteger { field: &'static str, token: String },

    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("failed to decode {path}: {message}")]
    Format { path: String, message: String },

    #[error("unsupported snapshot format for {path} (expected .toml or .json)")]
    UnsupportedFormat { path: String },

    #[error(transparent)]
    Invalid(#[from] InvalidInputError),
}

impl BankerErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::IO_ERROR,
            Self::Invalid(inner) => inner.error_code(),
            _ => error_code::PARSE_ERROR,
        }
    }
}
