use std::path::PathBuf;

use quakemap_common::error::QuakemapCommonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuakemapMapError {
    #[error("Failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid map config: {0}")]
    InvalidConfig(String),

    #[error("Invalid color: {0}")]
    InvalidColor(#[from] QuakemapCommonError),

    #[error("Unknown basemap: {0}")]
    UnknownBasemap(String),

    #[error("Unknown overlay: {0}")]
    UnknownOverlay(String),
}
