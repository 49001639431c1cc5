use geojson::{feature::Id, Feature, GeoJson, JsonObject, JsonValue, Value};
use quakemap_common::types::GeoFeatureSample;

use crate::error::FeedError;

/// A validated earthquake record from a USGS-style summary feed.
#[derive(Debug, Clone, PartialEq)]
pub struct EarthquakeFeature {
    pub id: Option<Id>,
    pub longitude: f64,
    pub latitude: f64,
    pub depth_km: f64,
    pub magnitude: f64,
    pub place: Option<String>,
    /// Raw feature properties, passed through to the map document
    pub properties: JsonObject,
}

impl EarthquakeFeature {
    /// Extract an earthquake from a GeoJSON feature.
    ///
    /// The geometry must be a Point of `[lon, lat, depth]` and `properties.mag`
    /// must be a number.
    pub fn from_feature(feature: &Feature) -> Result<Self, FeedError> {
        let id = feature.id.clone();
        let describe = || match &id {
            Some(Id::String(s)) => s.clone(),
            Some(Id::Number(n)) => n.to_string(),
            None => "<no id>".to_string(),
        };

        let coords = match feature.geometry.as_ref().map(|g| &g.value) {
            Some(Value::Point(coords)) => coords,
            Some(_) => {
                return Err(FeedError::InvalidFeature(format!(
                    "{}: geometry is not a Point",
                    describe()
                )))
            }
            None => {
                return Err(FeedError::InvalidFeature(format!(
                    "{}: missing geometry",
                    describe()
                )))
            }
        };
        let [longitude, latitude, depth_km] = match coords.as_slice() {
            [lon, lat, depth, ..] => [*lon, *lat, *depth],
            _ => {
                return Err(FeedError::InvalidFeature(format!(
                    "{}: point has no depth coordinate",
                    describe()
                )))
            }
        };

        let magnitude = feature
            .property("mag")
            .and_then(JsonValue::as_f64)
            .ok_or_else(|| {
                FeedError::InvalidFeature(format!("{}: missing numeric magnitude", describe()))
            })?;

        let place = feature
            .property("place")
            .and_then(JsonValue::as_str)
            .map(str::to_string);

        Ok(Self {
            id,
            longitude,
            latitude,
            depth_km,
            magnitude,
            place,
            properties: feature.properties.clone().unwrap_or_default(),
        })
    }

    pub fn sample(&self) -> GeoFeatureSample {
        GeoFeatureSample::new(self.depth_km, self.magnitude)
    }

    /// `[lon, lat, depth]`, GeoJSON position order
    pub fn position(&self) -> Vec<f64> {
        vec![self.longitude, self.latitude, self.depth_km]
    }
}

/// The earthquakes of a feed document. Features that fail validation are
/// dropped and counted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EarthquakeFeed {
    pub title: Option<String>,
    pub features: Vec<EarthquakeFeature>,
    pub skipped: usize,
}

impl EarthquakeFeed {
    pub fn from_geojson(doc: GeoJson) -> Result<Self, FeedError> {
        let collection = match doc {
            GeoJson::FeatureCollection(collection) => collection,
            _ => {
                return Err(FeedError::InvalidDocument(
                    "earthquake feed must be a FeatureCollection".to_string(),
                ))
            }
        };

        let title = collection
            .foreign_members
            .as_ref()
            .and_then(|members| members.get("metadata"))
            .and_then(|metadata| metadata.get("title"))
            .and_then(JsonValue::as_str)
            .map(str::to_string);

        let mut features = Vec::with_capacity(collection.features.len());
        let mut skipped = 0;
        for feature in &collection.features {
            match EarthquakeFeature::from_feature(feature) {
                Ok(quake) => features.push(quake),
                Err(err) => {
                    log::warn!("Skipping earthquake feature: {err}");
                    skipped += 1;
                }
            }
        }

        Ok(Self {
            title,
            features,
            skipped,
        })
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
