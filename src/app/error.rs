use thiserror::Error;

use crate::domain::{Rejection, UnknownCode};

#[derive(Error, Debug)]
pub enum HeadwaterError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] rusqlite_migration::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Item rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error(transparent)]
    UnknownCode(#[from] UnknownCode),

    #[error("Saved topic not found: {0}")]
    TopicNotFound(String),

    #[error("A preview fetch is already in progress")]
    Busy,

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, HeadwaterError>;
