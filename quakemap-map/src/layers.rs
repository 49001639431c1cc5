use geojson::FeatureCollection;
use indexmap::IndexMap;
use serde::Serialize;

use crate::{config::BasemapConfig, error::QuakemapMapError, styled::empty_collection};

/// Load state of an overlay's data
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum LayerStatus {
    Pending,
    Loaded { features: usize },
    Failed { reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    TectonicPlates,
    Earthquakes,
}

impl OverlayKind {
    pub fn name(&self) -> &'static str {
        match self {
            OverlayKind::TectonicPlates => "Tectonic Plates",
            OverlayKind::Earthquakes => "Earthquakes",
        }
    }
}

/// A toggleable data layer drawn over the basemap
#[derive(Debug, Clone)]
pub struct Overlay {
    pub kind: OverlayKind,
    pub visible: bool,
    pub status: LayerStatus,
    pub data: FeatureCollection,
}

impl Overlay {
    pub fn new(kind: OverlayKind) -> Self {
        Self {
            kind,
            visible: true,
            status: LayerStatus::Pending,
            data: empty_collection(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn set_loaded(&mut self, data: FeatureCollection) {
        self.status = LayerStatus::Loaded {
            features: data.features.len(),
        };
        self.data = data;
    }

    pub fn set_failed(&mut self, reason: impl Into<String>) {
        self.status = LayerStatus::Failed {
            reason: reason.into(),
        };
        self.data = empty_collection();
    }
}

/// Basemap selection (exactly one active) and overlay visibility
#[derive(Debug, Clone)]
pub struct LayerControl {
    basemaps: Vec<BasemapConfig>,
    active_basemap: usize,
    overlays: IndexMap<&'static str, Overlay>,
}

impl LayerControl {
    pub fn try_new(
        basemaps: Vec<BasemapConfig>,
        default_basemap: &str,
    ) -> Result<Self, QuakemapMapError> {
        let active_basemap = basemaps
            .iter()
            .position(|b| b.name == default_basemap)
            .ok_or_else(|| QuakemapMapError::UnknownBasemap(default_basemap.to_string()))?;
        Ok(Self {
            basemaps,
            active_basemap,
            overlays: IndexMap::new(),
        })
    }

    /// Add an overlay, replacing any existing overlay of the same kind
    pub fn register_overlay(&mut self, overlay: Overlay) {
        self.overlays.insert(overlay.name(), overlay);
    }

    pub fn basemaps(&self) -> &[BasemapConfig] {
        &self.basemaps
    }

    pub fn active_basemap(&self) -> &BasemapConfig {
        &self.basemaps[self.active_basemap]
    }

    pub fn select_basemap(&mut self, name: &str) -> Result<(), QuakemapMapError> {
        self.active_basemap = self
            .basemaps
            .iter()
            .position(|b| b.name == name)
            .ok_or_else(|| QuakemapMapError::UnknownBasemap(name.to_string()))?;
        log::debug!("Selected basemap {name}");
        Ok(())
    }

    pub fn overlays(&self) -> impl Iterator<Item = &Overlay> {
        self.overlays.values()
    }

    pub fn overlay(&self, name: &str) -> Option<&Overlay> {
        self.overlays.get(name)
    }

    pub fn overlay_mut(&mut self, kind: OverlayKind) -> Option<&mut Overlay> {
        self.overlays.get_mut(kind.name())
    }

    pub fn set_overlay_visible(&mut self, name: &str, visible: bool) -> Result<(), QuakemapMapError> {
        let overlay = self
            .overlays
            .get_mut(name)
            .ok_or_else(|| QuakemapMapError::UnknownOverlay(name.to_string()))?;
        overlay.visible = visible;
        Ok(())
    }

    /// Flip an overlay's visibility, returning the new state
    pub fn toggle_overlay(&mut self, name: &str) -> Result<bool, QuakemapMapError> {
        let overlay = self
            .overlays
            .get_mut(name)
            .ok_or_else(|| QuakemapMapError::UnknownOverlay(name.to_string()))?;
        overlay.visible = !overlay.visible;
        Ok(overlay.visible)
    }
}
