use serde::{Deserialize, Serialize};
use std::{fmt, path::PathBuf};

pub const DEFAULT_PLATES_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";
pub const DEFAULT_EARTHQUAKES_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";

/// Where a GeoJSON document comes from: a remote URL or a local file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FeedSource {
    Url(String),
    Path(PathBuf),
}

impl FeedSource {
    pub fn is_remote(&self) -> bool {
        matches!(self, FeedSource::Url(_))
    }
}

impl From<&str> for FeedSource {
    fn from(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            FeedSource::Url(value.to_string())
        } else {
            FeedSource::Path(PathBuf::from(value))
        }
    }
}

impl From<String> for FeedSource {
    fn from(value: String) -> Self {
        FeedSource::from(value.as_str())
    }
}

impl From<FeedSource> for String {
    fn from(value: FeedSource) -> Self {
        value.to_string()
    }
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedSource::Url(url) => f.write_str(url),
            FeedSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// The two documents the map is built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedSources {
    pub plates: FeedSource,
    pub earthquakes: FeedSource,
}

impl Default for FeedSources {
    fn default() -> Self {
        Self {
            plates: DEFAULT_PLATES_URL.into(),
            earthquakes: DEFAULT_EARTHQUAKES_URL.into(),
        }
    }
}
