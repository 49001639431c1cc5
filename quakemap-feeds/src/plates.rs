use geojson::{Feature, FeatureCollection, GeoJson};

use crate::error::FeedError;

/// Tectonic plate boundary lines, kept as GeoJSON.
#[derive(Debug, Clone, PartialEq)]
pub struct PlateBoundaries {
    pub collection: FeatureCollection,
}

impl PlateBoundaries {
    pub fn from_geojson(doc: GeoJson) -> Result<Self, FeedError> {
        let collection = match doc {
            GeoJson::FeatureCollection(collection) => collection,
            GeoJson::Feature(feature) => FeatureCollection {
                bbox: None,
                features: vec![feature],
                foreign_members: None,
            },
            GeoJson::Geometry(geometry) => FeatureCollection {
                bbox: None,
                features: vec![Feature::from(geometry)],
                foreign_members: None,
            },
        };
        Ok(Self { collection })
    }

    pub fn len(&self) -> usize {
        self.collection.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.features.is_empty()
    }
}
