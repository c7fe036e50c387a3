use crate::{
    core::geo::LatLngBounds,
    layers::{
        base::{Layer, LayerProperties, LayerType},
        marker::CircleMarker,
    },
};

/// Toggleable overlay holding the rendered markers
#[derive(Debug, Clone)]
pub struct MarkerLayer {
    properties: LayerProperties,
    markers: Vec<CircleMarker>,
}

impl MarkerLayer {
    pub fn new(id: String, name: String) -> Self {
        Self {
            properties: LayerProperties::new(id, name, LayerType::Marker),
            markers: Vec::new(),
        }
    }

    pub fn with_markers(mut self, markers: Vec<CircleMarker>) -> Self {
        self.markers = markers;
        self
    }

    pub fn markers(&self) -> &[CircleMarker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl Layer for MarkerLayer {
    crate::impl_layer_trait!(properties);

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.properties.id,
            "name": self.properties.name,
            "type": self.properties.layer_type,
            "visible": self.properties.visible,
            "markers": self.markers.iter().map(CircleMarker::options).collect::<Vec<_>>(),
        })
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        let positions: Vec<_> = self.markers.iter().map(|m| m.position).collect();
        LatLngBounds::from_points(&positions)
    }
}
