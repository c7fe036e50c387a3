pub mod base;
pub mod macros;
pub mod manager;
pub mod marker;
pub mod overlay;
pub mod tile;

pub use base::{Layer, LayerProperties, LayerType};
pub use manager::LayerSet;
pub use marker::{CircleMarker, MarkerStyle};
pub use overlay::MarkerLayer;
pub use tile::{TileLayer, TileLayerOptions};
