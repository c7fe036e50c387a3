use crate::{
    core::{config::MarkerConfig, constants::OVERLAY_NAME},
    data::quake::QuakeEvent,
    layers::{
        marker::{CircleMarker, MarkerStyle},
        overlay::MarkerLayer,
    },
    style::magnitude::color_for,
    ui::popup::Popup,
};

/// Turns earthquake events into styled circle markers.
///
/// Rendering is a pure mapping: no I/O, and each marker depends only on its
/// own event and the marker configuration.
#[derive(Debug, Clone, Default)]
pub struct FeatureRenderer {
    config: MarkerConfig,
}

impl FeatureRenderer {
    pub fn new(config: MarkerConfig) -> Self {
        Self { config }
    }

    /// Marker radius: magnitude times the scale, never below `min_radius`.
    ///
    /// Non-decreasing in magnitude; missing or NaN magnitudes get the floor.
    pub fn radius_for(&self, magnitude: Option<f64>) -> f64 {
        match magnitude.filter(|m| !m.is_nan()) {
            Some(m) => (m * self.config.radius_scale).max(self.config.min_radius),
            None => self.config.min_radius,
        }
    }

    pub fn render_event(&self, event: &QuakeEvent) -> CircleMarker {
        let style = MarkerStyle {
            fill_color: color_for(event.magnitude).to_string(),
            weight: self.config.weight,
            opacity: self.config.opacity,
            fill_opacity: self.config.fill_opacity,
        };

        let mut marker = CircleMarker::new(event.position, self.radius_for(event.magnitude))
            .with_style(style)
            .with_popup(Popup::quake_summary(event));
        marker.id = event.id.clone();
        marker.magnitude = event.magnitude;
        marker
    }

    /// Renders every event into the earthquake overlay
    pub fn render(&self, events: &[QuakeEvent]) -> MarkerLayer {
        let markers = events.iter().map(|e| self.render_event(e)).collect();
        MarkerLayer::new("earthquakes".to_string(), OVERLAY_NAME.to_string()).with_markers(markers)
    }
}
