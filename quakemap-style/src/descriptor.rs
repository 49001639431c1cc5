use quakemap_common::types::GeoFeatureSample;
use serde::Serialize;

use crate::{color_for_depth, radius_for_magnitude};

pub const STROKE_COLOR: &str = "black";
pub const STROKE_WEIGHT: f64 = 0.4;
pub const STROKE_OPACITY: f64 = 1.0;
pub const FILL_OPACITY: f64 = 0.6;

/// Everything a renderer needs to draw one earthquake marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDescriptor {
    pub fill_color: &'static str,
    pub radius: f64,
    pub stroke_color: &'static str,
    pub stroke_weight: f64,
    pub fill_opacity: f64,
    pub stroke_opacity: f64,
}

pub fn style_for(sample: GeoFeatureSample) -> StyleDescriptor {
    StyleDescriptor {
        fill_color: color_for_depth(sample.depth_km),
        radius: radius_for_magnitude(sample.magnitude),
        stroke_color: STROKE_COLOR,
        stroke_weight: STROKE_WEIGHT,
        fill_opacity: FILL_OPACITY,
        stroke_opacity: STROKE_OPACITY,
    }
}
