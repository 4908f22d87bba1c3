use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChannelIndexError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api error: {0}")]
    ApiStatus(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse channel key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },
    #[error("channel keys '{first}' and '{second}' share order number {order}")]
    DuplicateKey {
        order: u64,
        first: String,
        second: String,
    },
    #[error("failed to write playlist to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ChannelIndexError>;
