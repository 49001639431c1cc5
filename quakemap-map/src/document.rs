use geojson::FeatureCollection;
use quakemap_style::LegendBucket;
use serde::Serialize;

use crate::{
    config::{BasemapConfig, ControlPosition},
    context::MapContext,
    layers::LayerStatus,
};

/// Serializable snapshot of a [`MapContext`] for a rendering front-end
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDocument<'a> {
    pub center: [f64; 2],
    pub zoom: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    pub basemaps: Vec<BasemapEntry<'a>>,
    pub overlays: Vec<OverlayEntry<'a>>,
    pub legend: LegendEntry<'a>,
    pub notices: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasemapEntry<'a> {
    #[serde(flatten)]
    pub config: &'a BasemapConfig,
    pub active: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayEntry<'a> {
    pub name: &'static str,
    pub visible: bool,
    pub status: &'a LayerStatus,
    pub data: &'a FeatureCollection,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry<'a> {
    pub position: ControlPosition,
    pub buckets: &'a [LegendBucket],
    pub html: String,
}

impl<'a> MapDocument<'a> {
    pub fn new(map: &'a MapContext) -> Self {
        let layers = map.layers();
        let active = layers.active_basemap().name.as_str();
        Self {
            center: map.config().center,
            zoom: map.config().zoom,
            title: map.feed_title(),
            basemaps: layers
                .basemaps()
                .iter()
                .map(|config| BasemapEntry {
                    config,
                    active: config.name == active,
                })
                .collect(),
            overlays: layers
                .overlays()
                .map(|overlay| OverlayEntry {
                    name: overlay.name(),
                    visible: overlay.visible,
                    status: &overlay.status,
                    data: &overlay.data,
                })
                .collect(),
            legend: LegendEntry {
                position: map.legend().position,
                buckets: &map.legend().buckets,
                html: map.legend().to_html(),
            },
            notices: map.notices(),
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
