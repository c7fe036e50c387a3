//! Prelude module for common quakemap types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use quakemap::prelude::*;`

pub use crate::core::{
    config::{FeedConfig, FeedLevel, FeedWindow, MarkerConfig, QuakeMapConfig, TileConfig, ViewConfig},
    geo::{LatLng, LatLngBounds, TileCoord},
    map::{MapComposer, QuakeMap},
    viewport::Viewport,
};

pub use crate::data::{
    geojson::{GeoJson, GeoJsonFeature, GeoJsonGeometry},
    quake::QuakeEvent,
};

pub use crate::feed::{
    FeedOutcome, FeedSource, FeedStatus, HttpFeedSource, Orchestrator, StaticFeedSource,
};

pub use crate::layers::{
    base::{LayerProperties, LayerType},
    manager::LayerSet,
    marker::{CircleMarker, MarkerStyle},
    overlay::MarkerLayer,
    tile::{TileLayer, TileLayerOptions},
};

pub use crate::render::features::FeatureRenderer;

pub use crate::style::magnitude::{classify, color_for, MagnitudeBracket, MAGNITUDE_BRACKETS};

pub use crate::tiles::source::{MapboxStyleSource, TileSource};

pub use crate::ui::{
    controls::{LayerControl, Position},
    legend::{LegendControl, LegendEntry},
    popup::Popup,
};

pub use crate::output::html::HtmlExporter;

pub use crate::{Error as MapError, Result};
