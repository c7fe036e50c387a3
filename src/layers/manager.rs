use crate::{
    layers::{base::Layer, overlay::MarkerLayer, tile::TileLayer},
    Error, Result,
};

/// Named base layers and overlays registered with the map.
///
/// Exactly one base layer is visible once any is registered; overlays are
/// toggled independently of the base layer and of each other. Registration
/// order is preserved, it is the order shown in the layer control.
#[derive(Debug, Default)]
pub struct LayerSet {
    base_layers: Vec<TileLayer>,
    overlays: Vec<MarkerLayer>,
}

impl LayerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a base layer. The first one registered becomes active.
    pub fn add_base_layer(&mut self, mut layer: TileLayer) -> Result<()> {
        if self.base_layers.iter().any(|l| l.name() == layer.name()) {
            return Err(Error::Layer(format!(
                "base layer '{}' already registered",
                layer.name()
            )));
        }
        layer.set_visible(self.base_layers.is_empty());
        self.base_layers.push(layer);
        Ok(())
    }

    pub fn add_overlay(&mut self, layer: MarkerLayer) -> Result<()> {
        if self.overlays.iter().any(|l| l.name() == layer.name()) {
            return Err(Error::Layer(format!(
                "overlay '{}' already registered",
                layer.name()
            )));
        }
        self.overlays.push(layer);
        Ok(())
    }

    /// Makes `name` the only visible base layer
    pub fn set_active_base(&mut self, name: &str) -> Result<()> {
        if !self.base_layers.iter().any(|l| l.name() == name) {
            return Err(Error::Layer(format!("unknown base layer '{}'", name)));
        }
        for layer in &mut self.base_layers {
            let active = layer.name() == name;
            layer.set_visible(active);
        }
        log::debug!("active base layer set to '{}'", name);
        Ok(())
    }

    /// Flips an overlay's visibility and returns the new state
    pub fn toggle_overlay(&mut self, name: &str) -> Result<bool> {
        let overlay = self
            .overlays
            .iter_mut()
            .find(|l| l.name() == name)
            .ok_or_else(|| Error::Layer(format!("unknown overlay '{}'", name)))?;
        let visible = !overlay.is_visible();
        overlay.set_visible(visible);
        Ok(visible)
    }

    pub fn active_base(&self) -> Option<&TileLayer> {
        self.base_layers.iter().find(|l| l.is_visible())
    }

    pub fn base_layers(&self) -> &[TileLayer] {
        &self.base_layers
    }

    pub fn overlays(&self) -> &[MarkerLayer] {
        &self.overlays
    }

    pub fn overlay(&self, name: &str) -> Option<&MarkerLayer> {
        self.overlays.iter().find(|l| l.name() == name)
    }

    pub fn base_names(&self) -> Vec<&str> {
        self.base_layers.iter().map(|l| l.name()).collect()
    }

    pub fn overlay_names(&self) -> Vec<&str> {
        self.overlays.iter().map(|l| l.name()).collect()
    }

    /// Serializable description of every registered layer
    pub fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "baseLayers": self.base_layers.iter().map(|l| l.options()).collect::<Vec<_>>(),
            "overlays": self.overlays.iter().map(|l| l.options()).collect::<Vec<_>>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer_set() -> LayerSet {
        let mut set = LayerSet::new();
        set.add_base_layer(TileLayer::streets("t")).unwrap();
        set.add_base_layer(TileLayer::dark("t")).unwrap();
        set.add_base_layer(TileLayer::satellite("t")).unwrap();
        set.add_overlay(MarkerLayer::new("quakes".to_string(), "Earthquakes".to_string()))
            .unwrap();
        set
    }

    fn visible_bases(set: &LayerSet) -> usize {
        set.base_layers().iter().filter(|l| l.is_visible()).count()
    }

    #[test]
    fn test_first_base_is_active() {
        let set = layer_set();
        assert_eq!(set.base_names(), vec!["Street Map", "Dark Map", "Satellite Map"]);
        assert_eq!(set.overlay_names(), vec!["Earthquakes"]);
        assert_eq!(set.active_base().map(|l| l.name()), Some("Street Map"));
        assert_eq!(visible_bases(&set), 1);
    }

    #[test]
    fn test_switching_base_keeps_exactly_one_active() {
        let mut set = layer_set();
        set.set_active_base("Satellite Map").unwrap();
        assert_eq!(set.active_base().map(|l| l.name()), Some("Satellite Map"));
        assert_eq!(visible_bases(&set), 1);

        assert!(matches!(set.set_active_base("Topo Map"), Err(Error::Layer(_))));
        assert_eq!(set.active_base().map(|l| l.name()), Some("Satellite Map"));
    }

    #[test]
    fn test_overlay_toggles_independently() {
        let mut set = layer_set();
        assert!(!set.toggle_overlay("Earthquakes").unwrap());
        assert_eq!(set.active_base().map(|l| l.name()), Some("Street Map"));
        assert!(set.toggle_overlay("Earthquakes").unwrap());
        assert!(set.toggle_overlay("Faults").is_err());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut set = layer_set();
        assert!(set.add_base_layer(TileLayer::dark("t")).is_err());
        assert!(set
            .add_overlay(MarkerLayer::new("q2".to_string(), "Earthquakes".to_string()))
            .is_err());
    }
}
