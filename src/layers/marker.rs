use crate::{core::geo::LatLng, ui::popup::Popup};
use serde::{Deserialize, Serialize};

/// Stroke and fill of a circle marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub fill_color: String,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            fill_color: "#3388ff".to_string(),
            weight: 1.5,
            opacity: 1.0,
            fill_opacity: 1.0,
        }
    }
}

/// A circle drawn at a fixed pixel radius regardless of zoom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleMarker {
    pub id: Option<String>,
    pub position: LatLng,
    /// Radius in screen pixels
    pub radius: f64,
    pub magnitude: Option<f64>,
    pub style: MarkerStyle,
    pub popup: Option<Popup>,
}

impl CircleMarker {
    pub fn new(position: LatLng, radius: f64) -> Self {
        Self {
            id: None,
            position,
            radius,
            magnitude: None,
            style: MarkerStyle::default(),
            popup: None,
        }
    }

    pub fn with_style(mut self, style: MarkerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_popup(mut self, popup: Popup) -> Self {
        self.popup = Some(popup);
        self
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn fill_color(&self) -> &str {
        &self.style.fill_color
    }

    pub fn popup_text(&self) -> Option<&str> {
        self.popup.as_ref().map(|p| p.content.as_str())
    }

    pub fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "mag": self.magnitude,
            "lat": self.position.lat,
            "lng": self.position.lng,
            "radius": self.radius,
            "fillColor": self.style.fill_color,
            "weight": self.style.weight,
            "opacity": self.style.opacity,
            "fillOpacity": self.style.fill_opacity,
            "popup": self.popup_text(),
        })
    }
}
