//! Error types for triplexq

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for triplexq
#[derive(Error, Debug)]
pub enum TriplexqError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("Cannot read identifier list {}: {source}", path.display())]
    IdentifierFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl TriplexqError {
    pub fn argument(msg: impl Into<String>) -> Self {
        TriplexqError::Argument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, TriplexqError>;
