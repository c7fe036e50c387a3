pub mod geojson;
pub mod quake;

pub use geojson::{FeedMetadata, GeoJson, GeoJsonFeature, GeoJsonGeometry};
pub use quake::QuakeEvent;
