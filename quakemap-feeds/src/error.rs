use std::{path::PathBuf, time::Duration};

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Timed out after {timeout:?} fetching {url}")]
    Timeout { url: String, timeout: Duration },

    #[error("HTTP {status} fetching {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("GeoJSON parse error: {0}")]
    Parse(#[from] geojson::Error),

    #[error("Invalid feed document: {0}")]
    InvalidDocument(String),

    #[error("Invalid earthquake feature: {0}")]
    InvalidFeature(String),
}
