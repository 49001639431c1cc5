use std::{collections::HashSet, path::Path, time::Duration};

use quakemap_common::types::CssColor;
use quakemap_feeds::source::FeedSources;
use serde::{Deserialize, Serialize};

use crate::error::QuakemapMapError;

/// A background tile layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasemapConfig {
    pub name: String,
    /// Tile URL template with `{z}`, `{x}`, `{y}` placeholders
    pub url_template: String,
    pub max_zoom: u8,
    pub attribution: String,
}

impl BasemapConfig {
    pub fn new(name: &str, url_template: &str, max_zoom: u8, attribution: &str) -> Self {
        Self {
            name: name.to_string(),
            url_template: url_template.to_string(),
            max_zoom,
            attribution: attribution.to_string(),
        }
    }
}

/// Stroke used for plate boundary lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: CssColor,
    pub weight: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: CssColor::rgb("orange", 255, 165, 0),
            weight: 1.5,
        }
    }
}

/// Map corner a control is docked to
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeedConfig {
    #[serde(flatten)]
    pub sources: FeedSources,
    pub timeout_secs: u64,
}

impl FeedConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            sources: FeedSources::default(),
            timeout_secs: 30,
        }
    }
}

/// Everything needed to initialize a [`crate::MapContext`].
///
/// Every field has a default, so a config file only lists what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapConfig {
    /// `[lat, lon]`
    pub center: [f64; 2],
    pub zoom: u8,
    /// In layer control order
    pub basemaps: Vec<BasemapConfig>,
    pub default_basemap: String,
    pub plate_style: LineStyle,
    pub legend_position: ControlPosition,
    pub feeds: FeedConfig,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: [35.40659909030526, -119.01860729960146],
            zoom: 3,
            basemaps: vec![
                BasemapConfig::new(
                    "Street",
                    "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
                    19,
                    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors",
                ),
                BasemapConfig::new(
                    "Light",
                    "https://tiles.stadiamaps.com/tiles/alidade_smooth/{z}/{x}/{y}{r}.png",
                    20,
                    "&copy; <a href=\"https://stadiamaps.com/\">Stadia Maps</a>, &copy; <a href=\"https://openmaptiles.org/\">OpenMapTiles</a> &copy; <a href=\"http://openstreetmap.org\">OpenStreetMap</a> contributors",
                ),
                BasemapConfig::new(
                    "Topographic",
                    "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png",
                    17,
                    "Map data: &copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors, <a href=\"http://viewfinderpanoramas.org\">SRTM</a> | Map style: &copy; <a href=\"https://opentopomap.org\">OpenTopoMap</a> (<a href=\"https://creativecommons.org/licenses/by-sa/3.0/\">CC-BY-SA</a>)",
                ),
            ],
            default_basemap: "Street".to_string(),
            plate_style: LineStyle::default(),
            legend_position: ControlPosition::BottomRight,
            feeds: FeedConfig::default(),
        }
    }
}

impl MapConfig {
    pub fn from_path(path: &Path) -> Result<Self, QuakemapMapError> {
        let text = std::fs::read_to_string(path).map_err(|source| QuakemapMapError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, QuakemapMapError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn basemap(&self, name: &str) -> Option<&BasemapConfig> {
        self.basemaps.iter().find(|b| b.name == name)
    }

    pub fn validate(&self) -> Result<(), QuakemapMapError> {
        let [lat, lon] = self.center;
        if !(-90.0..=90.0).contains(&lat) {
            return Err(QuakemapMapError::InvalidConfig(format!(
                "center latitude {lat} is outside [-90, 90]"
            )));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(QuakemapMapError::InvalidConfig(format!(
                "center longitude {lon} is outside [-180, 180]"
            )));
        }

        if self.basemaps.is_empty() {
            return Err(QuakemapMapError::InvalidConfig(
                "at least one basemap is required".to_string(),
            ));
        }
        let mut names = HashSet::new();
        for basemap in &self.basemaps {
            if !names.insert(basemap.name.as_str()) {
                return Err(QuakemapMapError::InvalidConfig(format!(
                    "duplicate basemap name: {}",
                    basemap.name
                )));
            }
        }

        let default_basemap = self
            .basemap(&self.default_basemap)
            .ok_or_else(|| QuakemapMapError::UnknownBasemap(self.default_basemap.clone()))?;
        if self.zoom > default_basemap.max_zoom {
            return Err(QuakemapMapError::InvalidConfig(format!(
                "zoom {} exceeds max zoom {} of basemap {}",
                self.zoom, default_basemap.max_zoom, default_basemap.name
            )));
        }

        if !(self.plate_style.weight.is_finite() && self.plate_style.weight > 0.0) {
            return Err(QuakemapMapError::InvalidConfig(format!(
                "plate line weight must be positive, got {}",
                self.plate_style.weight
            )));
        }
        if self.feeds.timeout_secs == 0 {
            return Err(QuakemapMapError::InvalidConfig(
                "feed timeout must be at least one second".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quakemap_feeds::source::FeedSource;

    #[test]
    fn test_default_is_valid() {
        let config = MapConfig::default();
        config.validate().unwrap();
        assert_eq!(config.basemaps.len(), 3);
        assert_eq!(config.plate_style.color.as_str(), "orange");
        assert_eq!(config.feeds.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_json() -> Result<(), QuakemapMapError> {
        let config = MapConfig::from_json(
            r##"{
                "zoom": 5,
                "defaultBasemap": "Topographic",
                "plateStyle": {"color": "#3366ff", "weight": 2.0},
                "legendPosition": "topright",
                "feeds": {"earthquakes": "quakes.geojson", "timeoutSecs": 10}
            }"##,
        )?;
        config.validate()?;
        assert_eq!(config.zoom, 5);
        assert_eq!(config.default_basemap, "Topographic");
        assert_eq!(config.legend_position, ControlPosition::TopRight);
        assert_eq!(config.plate_style.color.to_hex(), "#3366ff");
        assert_eq!(
            config.feeds.sources.earthquakes,
            FeedSource::Path("quakes.geojson".into())
        );
        assert!(config.feeds.sources.plates.is_remote());
        assert_eq!(config.feeds.timeout_secs, 10);
        Ok(())
    }

    #[test]
    fn test_bad_color_rejected() {
        let err = MapConfig::from_json(r#"{"plateStyle": {"color": "blurple", "weight": 1}}"#)
            .unwrap_err();
        assert!(matches!(err, QuakemapMapError::Json(_)), "{err:?}");
    }

    #[test]
    fn test_validation_errors() {
        let mut config = MapConfig {
            center: [95.0, 0.0],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(QuakemapMapError::InvalidConfig(_))
        ));

        config.center = [0.0, 0.0];
        config.default_basemap = "Satellite".to_string();
        assert!(matches!(
            config.validate(),
            Err(QuakemapMapError::UnknownBasemap(name)) if name == "Satellite"
        ));

        config.default_basemap = "Topographic".to_string();
        config.zoom = 18;
        assert!(config.validate().is_err());

        config.zoom = 3;
        config.basemaps.push(config.basemaps[0].clone());
        assert!(config.validate().is_err());
    }
}
