//! Map composition
//!
//! The composer is a one-shot assembly: three Mapbox base layers, the
//! earthquake overlay, an expanded layer control and the magnitude legend,
//! over a fixed initial view. Nothing changes after composition; panning,
//! zooming and toggling happen in the browser.

use crate::{
    core::{
        config::QuakeMapConfig,
        constants::{MAP_CONTAINER_ID, OVERLAY_NAME},
        viewport::Viewport,
    },
    feed::FeedStatus,
    layers::{base::Layer, manager::LayerSet, overlay::MarkerLayer, tile::TileLayer},
    ui::{controls::LayerControl, legend::LegendControl},
    Result,
};

/// A fully composed map, ready to be exported
#[derive(Debug)]
pub struct QuakeMap {
    pub container_id: String,
    pub viewport: Viewport,
    pub layers: LayerSet,
    pub layer_control: LayerControl,
    pub legend: LegendControl,
    pub status: FeedStatus,
}

impl QuakeMap {
    /// The earthquake overlay
    pub fn overlay(&self) -> Option<&MarkerLayer> {
        self.layers.overlay(OVERLAY_NAME)
    }

    pub fn marker_count(&self) -> usize {
        self.overlay().map(MarkerLayer::len).unwrap_or(0)
    }

    /// Document embedded in the exported page
    pub fn to_page_json(&self) -> serde_json::Value {
        serde_json::json!({
            "container": self.container_id,
            "view": {
                "center": [self.viewport.center.lat, self.viewport.center.lng],
                "zoom": self.viewport.zoom,
                "minZoom": self.viewport.min_zoom,
                "maxZoom": self.viewport.max_zoom,
            },
            "layers": self.layers.options(),
            "layerControl": self.layer_control,
            "legend": {
                "position": self.legend.position,
                "html": self.legend.to_html(),
            },
            "status": self.status,
        })
    }
}

/// Assembles base layers, overlay, controls and legend into a [`QuakeMap`]
#[derive(Debug, Clone, Default)]
pub struct MapComposer {
    config: QuakeMapConfig,
}

impl MapComposer {
    pub fn new(config: QuakeMapConfig) -> Self {
        Self { config }
    }

    pub fn compose(&self, overlay: MarkerLayer, status: FeedStatus) -> Result<QuakeMap> {
        let token = self.config.tiles.access_token.as_str();

        let mut layers = LayerSet::new();
        // Streets first: it is the base layer shown on load
        layers.add_base_layer(TileLayer::streets(token))?;
        layers.add_base_layer(TileLayer::dark(token))?;
        layers.add_base_layer(TileLayer::satellite(token))?;
        layers.add_overlay(overlay)?;

        let viewport = Viewport::new(self.config.view.center, self.config.view.zoom);
        let layer_control = LayerControl::for_layers(&layers);
        let legend = LegendControl::magnitude();

        log::info!(
            "composed map: {} markers, base layers [{}], status {}",
            layers.overlay(OVERLAY_NAME).map(|o| o.len()).unwrap_or(0),
            layers.base_names().join(", "),
            status
        );
        if let Some(bounds) = layers.overlay(OVERLAY_NAME).and_then(|o| o.bounds()) {
            let center = bounds.center();
            log::debug!("markers centered near ({:.2}, {:.2})", center.lat, center.lng);
        }

        Ok(QuakeMap {
            container_id: MAP_CONTAINER_ID.to_string(),
            viewport,
            layers,
            layer_control,
            legend,
            status,
        })
    }
}
