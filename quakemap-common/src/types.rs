use css_color_parser::Color;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::QuakemapCommonError;

/// The two numeric attributes of a seismic event that drive its marker style.
///
/// Built from a GeoJSON feature's `geometry.coordinates[2]` (depth) and
/// `properties.mag` (magnitude).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoFeatureSample {
    /// Kilometers below sea level, negative above it
    pub depth_km: f64,
    pub magnitude: f64,
}

impl GeoFeatureSample {
    pub fn new(depth_km: f64, magnitude: f64) -> Self {
        Self {
            depth_km,
            magnitude,
        }
    }
}

/// A CSS color string (named, hex, rgb(), ...) kept alongside its parsed
/// RGBA components in the 0-1 range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CssColor {
    text: String,
    rgba: [f32; 4],
}

impl CssColor {
    pub fn try_new(text: impl Into<String>) -> Result<Self, QuakemapCommonError> {
        let text = text.into();
        let color = text
            .trim()
            .parse::<Color>()
            .map_err(|_| QuakemapCommonError::InvalidColor(text.clone()))?;
        Ok(Self {
            rgba: [
                color.r as f32 / 255.0,
                color.g as f32 / 255.0,
                color.b as f32 / 255.0,
                color.a,
            ],
            text,
        })
    }

    /// A color whose components are already known, such as a named constant
    pub fn rgb(text: impl Into<String>, r: u8, g: u8, b: u8) -> Self {
        Self {
            text: text.into(),
            rgba: [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0],
        }
    }

    /// The color as originally written
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn rgba(&self) -> [f32; 4] {
        self.rgba
    }

    /// `#rrggbb` form, alpha dropped
    pub fn to_hex(&self) -> String {
        let [r, g, b, _] = self.rgba.map(|c| (c * 255.0).round() as u8);
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for CssColor {
    type Err = QuakemapCommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

impl TryFrom<String> for CssColor {
    type Error = QuakemapCommonError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<CssColor> for String {
    fn from(value: CssColor) -> Self {
        value.text
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
