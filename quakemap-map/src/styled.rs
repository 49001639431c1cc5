use geojson::{Feature, FeatureCollection, Geometry, JsonValue, Value};
use quakemap_feeds::{plates::PlateBoundaries, quake::EarthquakeFeature};
use quakemap_style::style_for;

use crate::{config::LineStyle, error::QuakemapMapError, popup::popup_html};

/// Point feature for one earthquake, its raw properties extended with
/// `style` (marker style) and `popup` (popup html)
pub fn styled_earthquake(quake: &EarthquakeFeature) -> Result<Feature, QuakemapMapError> {
    let mut properties = quake.properties.clone();
    properties.insert(
        "style".to_string(),
        serde_json::to_value(style_for(quake.sample()))?,
    );
    properties.insert("popup".to_string(), JsonValue::String(popup_html(quake)));

    Ok(Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(quake.position()))),
        id: quake.id.clone(),
        properties: Some(properties),
        foreign_members: None,
    })
}

pub fn styled_earthquakes<'a>(
    quakes: impl IntoIterator<Item = &'a EarthquakeFeature>,
) -> Result<FeatureCollection, QuakemapMapError> {
    let features = quakes
        .into_iter()
        .map(styled_earthquake)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

/// Plate boundary lines with the line style attached to each feature
pub fn styled_plates(
    plates: &PlateBoundaries,
    style: &LineStyle,
) -> Result<FeatureCollection, QuakemapMapError> {
    let style_value = serde_json::to_value(style)?;
    let mut collection = plates.collection.clone();
    for feature in &mut collection.features {
        feature.set_property("style", style_value.clone());
    }
    Ok(collection)
}

pub fn empty_collection() -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: vec![],
        foreign_members: None,
    }
}
