//! # quakemap
//!
//! Fetches the public USGS earthquake feed and composes it into an
//! interactive, Leaflet-style web map: color-coded circle markers, three
//! switchable base layers, a layer-toggle control and a magnitude legend.
//!
//! The pipeline is single-shot: a [`feed::FeedSource`] yields a GeoJSON
//! document, the [`render::FeatureRenderer`] maps each event to a
//! [`CircleMarker`], the [`MapComposer`] assembles the [`QuakeMap`], and the
//! [`output::HtmlExporter`] writes it out as a standalone page.

pub mod core;
pub mod data;
pub mod feed;
pub mod layers;
pub mod output;
pub mod prelude;
pub mod render;
pub mod style;
pub mod tiles;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use core::{
    config::QuakeMapConfig,
    geo::{LatLng, LatLngBounds, TileCoord},
    map::{MapComposer, QuakeMap},
    viewport::Viewport,
};

pub use data::{geojson::GeoJson, quake::QuakeEvent};

pub use feed::{FeedOutcome, FeedSource, FeedStatus, HttpFeedSource, Orchestrator, StaticFeedSource};

pub use layers::{manager::LayerSet, marker::CircleMarker, overlay::MarkerLayer, tile::TileLayer};

pub use output::html::HtmlExporter;

pub use render::features::FeatureRenderer;

pub use style::magnitude::{classify, color_for, MagnitudeBracket, MAGNITUDE_BRACKETS};

pub use ui::{controls::LayerControl, legend::LegendControl, popup::Popup};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid feature: {0}")]
    InvalidFeature(String),

    #[error("Layer error: {0}")]
    Layer(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Error type alias for convenience
pub type Error = MapError;
