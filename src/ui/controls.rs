use crate::layers::manager::LayerSet;
use serde::{Deserialize, Serialize};

/// Corner of the map a control is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "topleft")]
    TopLeft,
    #[default]
    #[serde(rename = "topright")]
    TopRight,
    #[serde(rename = "bottomleft")]
    BottomLeft,
    #[serde(rename = "bottomright")]
    BottomRight,
}

impl Position {
    /// Leaflet's name for the corner
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::TopLeft => "topleft",
            Position::TopRight => "topright",
            Position::BottomLeft => "bottomleft",
            Position::BottomRight => "bottomright",
        }
    }
}

/// Radio list of base layers plus checkboxes for overlays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerControl {
    pub base_layers: Vec<String>,
    pub overlays: Vec<String>,
    /// Collapsed controls only expand on hover
    pub collapsed: bool,
    pub position: Position,
}

impl LayerControl {
    /// Builds an always-expanded control listing every layer in `layers`
    pub fn for_layers(layers: &LayerSet) -> Self {
        Self {
            base_layers: layers.base_names().into_iter().map(str::to_owned).collect(),
            overlays: layers.overlay_names().into_iter().map(str::to_owned).collect(),
            collapsed: false,
            position: Position::TopRight,
        }
    }
}
