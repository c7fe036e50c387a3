use crate::core::geo::LatLngBounds;

/// Common behavior of everything that can be registered on the map
pub trait Layer: Send + Sync {
    fn id(&self) -> &str;

    fn name(&self) -> &str;

    fn layer_type(&self) -> LayerType;

    fn is_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);

    /// Serializable description consumed by the page exporter
    fn options(&self) -> serde_json::Value;

    /// Geographic extent of the layer's content, if it has any
    fn bounds(&self) -> Option<LatLngBounds> {
        None
    }
}

/// What a layer draws; written into the page document as `type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerType {
    /// Raster base map
    Tile,
    /// Circle markers
    Marker,
}

impl LayerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tile => "tile",
            Self::Marker => "marker",
        }
    }
}

impl std::fmt::Display for LayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State shared by every layer kind; new layers start visible
#[derive(Debug, Clone, PartialEq)]
pub struct LayerProperties {
    pub id: String,
    pub name: String,
    pub layer_type: LayerType,
    pub visible: bool,
}

impl LayerProperties {
    pub fn new(id: String, name: String, layer_type: LayerType) -> Self {
        Self {
            id,
            name,
            layer_type,
            visible: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_layers_start_visible() {
        let props = LayerProperties::new(
            "earthquakes".to_string(),
            "Earthquakes".to_string(),
            LayerType::Marker,
        );
        assert!(props.visible);
        assert_eq!(props.layer_type, LayerType::Marker);
    }

    #[test]
    fn test_layer_type_names_match_serialized_form() {
        for kind in [LayerType::Tile, LayerType::Marker] {
            assert_eq!(
                serde_json::to_value(kind).unwrap(),
                serde_json::Value::from(kind.as_str())
            );
        }
    }
}
