use quakemap_feeds::{
    error::FeedError, load_feeds, plates::PlateBoundaries, quake::EarthquakeFeed, FeedFetcher,
    FeedResults,
};

use crate::{
    config::MapConfig,
    document::MapDocument,
    error::QuakemapMapError,
    layers::{LayerControl, LayerStatus, Overlay, OverlayKind},
    legend::LegendControl,
    styled::{styled_earthquakes, styled_plates},
};

/// An initialized map: basemaps, overlays, layer control and legend.
///
/// Owned by the caller; overlays start out `Pending` until feed data is applied.
#[derive(Debug, Clone)]
pub struct MapContext {
    config: MapConfig,
    layers: LayerControl,
    legend: LegendControl,
    feed_title: Option<String>,
}

/// Validate `config` and build a map context from it
pub fn init_map(config: MapConfig) -> Result<MapContext, QuakemapMapError> {
    MapContext::try_new(config)
}

impl MapContext {
    pub fn try_new(config: MapConfig) -> Result<Self, QuakemapMapError> {
        config.validate()?;

        let mut layers = LayerControl::try_new(config.basemaps.clone(), &config.default_basemap)?;
        layers.register_overlay(Overlay::new(OverlayKind::TectonicPlates));
        layers.register_overlay(Overlay::new(OverlayKind::Earthquakes));

        let legend = LegendControl::new(config.legend_position);
        log::debug!(
            "Initialized map at {:?} zoom {} on basemap {}",
            config.center,
            config.zoom,
            config.default_basemap
        );

        Ok(Self {
            config,
            layers,
            legend,
            feed_title: None,
        })
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn layers(&self) -> &LayerControl {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut LayerControl {
        &mut self.layers
    }

    pub fn legend(&self) -> &LegendControl {
        &self.legend
    }

    /// Title reported by the earthquake feed, if any
    pub fn feed_title(&self) -> Option<&str> {
        self.feed_title.as_deref()
    }

    pub fn apply_plates(
        &mut self,
        plates: Result<PlateBoundaries, FeedError>,
    ) -> Result<(), QuakemapMapError> {
        let data = match plates {
            Ok(plates) => Ok(styled_plates(&plates, &self.config.plate_style)?),
            Err(err) => Err(err),
        };
        self.apply(OverlayKind::TectonicPlates, data);
        Ok(())
    }

    pub fn apply_earthquakes(
        &mut self,
        feed: Result<EarthquakeFeed, FeedError>,
    ) -> Result<(), QuakemapMapError> {
        let data = match feed {
            Ok(feed) => {
                self.feed_title = feed.title.clone();
                Ok(styled_earthquakes(&feed.features)?)
            }
            Err(err) => Err(err),
        };
        self.apply(OverlayKind::Earthquakes, data);
        Ok(())
    }

    fn apply(&mut self, kind: OverlayKind, data: Result<geojson::FeatureCollection, FeedError>) {
        if let Some(overlay) = self.layers.overlay_mut(kind) {
            match data {
                Ok(data) => overlay.set_loaded(data),
                Err(err) => overlay.set_failed(err.to_string()),
            }
        }
    }

    pub fn apply_feed_results(&mut self, results: FeedResults) -> Result<(), QuakemapMapError> {
        self.apply_plates(results.plates)?;
        self.apply_earthquakes(results.earthquakes)
    }

    /// Fetch both feeds and populate the overlays
    pub async fn load_overlays(&mut self, fetcher: &dyn FeedFetcher) -> Result<(), QuakemapMapError> {
        let results = load_feeds(fetcher, &self.config.feeds.sources).await;
        self.apply_feed_results(results)
    }

    /// Messages describing overlays whose data failed to load
    pub fn notices(&self) -> Vec<String> {
        self.layers
            .overlays()
            .filter_map(|overlay| match &overlay.status {
                LayerStatus::Failed { reason } => {
                    Some(format!("{} unavailable: {}", overlay.name(), reason))
                }
                _ => None,
            })
            .collect()
    }

    /// True when every overlay has data
    pub fn is_complete(&self) -> bool {
        self.layers
            .overlays()
            .all(|overlay| matches!(overlay.status, LayerStatus::Loaded { .. }))
    }

    pub fn document(&self) -> MapDocument<'_> {
        MapDocument::new(self)
    }
}
