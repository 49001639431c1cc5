use std::collections::HashMap;

use async_trait::async_trait;
use quakemap_feeds::{error::FeedError, source::FeedSource, FeedFetcher};
use quakemap_map::{init_map, layers::LayerStatus, MapConfig};
use serde_json::Value;

const PLATES_URL: &str = "https://feeds.test/PB2002_boundaries.json";
const QUAKES_URL: &str = "https://feeds.test/all_week.geojson";

const PLATES: &str = r#"{"type": "FeatureCollection", "features": [
    {"type": "Feature", "properties": {"LAYER": "plate boundary", "Name": "AF-AN"},
     "geometry": {"type": "LineString", "coordinates": [[-0.4379, -54.8518], [-0.0388, -54.6772]]}}
]}"#;

const QUAKES: &str = r#"{
    "type": "FeatureCollection",
    "metadata": {"title": "USGS All Earthquakes, Past Week"},
    "features": [
        {"type": "Feature", "id": "ci40600136",
         "properties": {"mag": 0.0, "place": "5km NE of Mentone, CA"},
         "geometry": {"type": "Point", "coordinates": [-117.09, 34.1, 5.0]}},
        {"type": "Feature", "id": "us7000l1a2",
         "properties": {"mag": 4.9, "place": "Kermadec Islands region"},
         "geometry": {"type": "Point", "coordinates": [-177.6, -29.9, 120.0]}},
        {"type": "Feature", "id": "broken",
         "properties": {"mag": 2.0},
         "geometry": null}
    ]
}"#;

struct StaticFetcher(HashMap<&'static str, &'static str>);

#[async_trait]
impl FeedFetcher for StaticFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FeedError> {
        self.0
            .get(url)
            .map(|body| body.to_string())
            .ok_or_else(|| FeedError::Timeout {
                url: url.to_string(),
                timeout: std::time::Duration::from_secs(30),
            })
    }
}

fn config() -> MapConfig {
    let mut config = MapConfig::default();
    config.feeds.sources.plates = FeedSource::from(PLATES_URL);
    config.feeds.sources.earthquakes = FeedSource::from(QUAKES_URL);
    config
}

#[tokio::test]
async fn test_build_full_document() -> anyhow::Result<()> {
    let fetcher = StaticFetcher(HashMap::from([(PLATES_URL, PLATES), (QUAKES_URL, QUAKES)]));
    let mut map = init_map(config())?;
    map.load_overlays(&fetcher).await?;

    assert!(map.is_complete());
    assert!(map.notices().is_empty());
    assert_eq!(map.feed_title(), Some("USGS All Earthquakes, Past Week"));

    let doc: Value = serde_json::from_str(&map.document().to_json(false)?)?;

    assert_eq!(doc["zoom"], 3);
    assert_eq!(doc["title"], "USGS All Earthquakes, Past Week");

    let basemaps = doc["basemaps"].as_array().unwrap();
    assert_eq!(basemaps.len(), 3);
    assert_eq!(basemaps[0]["name"], "Street");
    assert_eq!(basemaps[0]["active"], true);
    assert_eq!(basemaps[1]["active"], false);
    assert_eq!(basemaps[2]["maxZoom"], 17);

    let overlays = doc["overlays"].as_array().unwrap();
    assert_eq!(overlays[0]["name"], "Tectonic Plates");
    assert_eq!(overlays[0]["status"]["state"], "loaded");
    assert_eq!(overlays[0]["data"]["features"][0]["properties"]["style"]["color"], "orange");

    assert_eq!(overlays[1]["name"], "Earthquakes");
    assert_eq!(overlays[1]["status"]["features"], 2);
    let quakes = overlays[1]["data"]["features"].as_array().unwrap();
    assert_eq!(quakes[0]["properties"]["style"]["radius"], 1.0);
    assert_eq!(quakes[0]["properties"]["style"]["fillColor"], "#6aff00");
    assert_eq!(quakes[1]["properties"]["style"]["fillColor"], "#ff0000");
    assert_eq!(quakes[1]["geometry"]["coordinates"][2], 120.0);

    let legend = &doc["legend"];
    assert_eq!(legend["position"], "bottomright");
    assert_eq!(legend["buckets"].as_array().unwrap().len(), 6);
    assert_eq!(legend["buckets"][5]["upperBoundKm"], Value::Null);
    Ok(())
}

#[tokio::test]
async fn test_failed_feed_is_surfaced() -> anyhow::Result<()> {
    let fetcher = StaticFetcher(HashMap::from([(QUAKES_URL, QUAKES)]));
    let mut map = init_map(config())?;
    map.load_overlays(&fetcher).await?;

    assert!(!map.is_complete());
    let plates = map.layers().overlay("Tectonic Plates").unwrap();
    assert!(matches!(plates.status, LayerStatus::Failed { .. }));

    let doc: Value = serde_json::from_str(&map.document().to_json(true)?)?;
    let notices = doc["notices"].as_array().unwrap();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].as_str().unwrap().starts_with("Tectonic Plates unavailable"));
    assert_eq!(doc["overlays"][0]["status"]["state"], "failed");
    assert_eq!(doc["overlays"][1]["status"]["state"], "loaded");
    Ok(())
}

#[tokio::test]
async fn test_layer_control_reflected_in_document() -> anyhow::Result<()> {
    let fetcher = StaticFetcher(HashMap::from([(PLATES_URL, PLATES), (QUAKES_URL, QUAKES)]));
    let mut map = init_map(config())?;
    map.load_overlays(&fetcher).await?;

    map.layers_mut().select_basemap("Light")?;
    map.layers_mut().toggle_overlay("Tectonic Plates")?;

    let doc: Value = serde_json::from_str(&map.document().to_json(false)?)?;
    assert_eq!(doc["basemaps"][0]["active"], false);
    assert_eq!(doc["basemaps"][1]["active"], true);
    assert_eq!(doc["overlays"][0]["visible"], false);
    assert_eq!(doc["overlays"][1]["visible"], true);
    Ok(())
}
