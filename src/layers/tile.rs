use crate::{
    core::{
        constants::{
            MAPBOX_DARK_STYLE, MAPBOX_DATA_ATTRIBUTION, MAPBOX_SATELLITE_STYLE,
            MAPBOX_STREETS_ATTRIBUTION, MAPBOX_STREETS_STYLE, MAX_ZOOM, TILE_SIZE,
        },
        geo::TileCoord,
    },
    layers::base::{Layer, LayerProperties, LayerType},
    tiles::source::{MapboxStyleSource, TileSource},
};

/// Configuration for a tile layer
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TileLayerOptions {
    /// Attribution text (HTML)
    pub attribution: String,
    /// Tile size in pixels
    pub tile_size: u32,
    /// Added to the map zoom when requesting tiles (512px tiles use -1)
    pub zoom_offset: i8,
    /// Maximum zoom level for this tile source
    pub max_zoom: u8,
    /// Minimum zoom level for this tile source
    pub min_zoom: u8,
}

impl Default for TileLayerOptions {
    fn default() -> Self {
        Self {
            attribution: String::new(),
            tile_size: TILE_SIZE,
            zoom_offset: 0,
            max_zoom: MAX_ZOOM,
            min_zoom: 0,
        }
    }
}

/// A base layer backed by a raster tile service
#[derive(Debug)]
pub struct TileLayer {
    properties: LayerProperties,
    options: TileLayerOptions,
    source: Box<dyn TileSource>,
}

impl TileLayer {
    pub fn with_options(
        id: String,
        name: String,
        options: TileLayerOptions,
        source: Box<dyn TileSource>,
    ) -> Self {
        Self {
            properties: LayerProperties::new(id, name, LayerType::Tile),
            options,
            source,
        }
    }

    /// A Mapbox style layer with the default data attribution
    pub fn mapbox(id: String, name: String, style_id: &str, access_token: &str) -> Self {
        let options = TileLayerOptions {
            attribution: MAPBOX_DATA_ATTRIBUTION.to_string(),
            ..TileLayerOptions::default()
        };
        Self::with_options(
            id,
            name,
            options,
            Box::new(MapboxStyleSource::new(style_id, access_token)),
        )
    }

    /// Mapbox streets, served as 512px tiles
    pub fn streets(access_token: &str) -> Self {
        let options = TileLayerOptions {
            attribution: MAPBOX_STREETS_ATTRIBUTION.to_string(),
            tile_size: 512,
            zoom_offset: -1,
            ..TileLayerOptions::default()
        };
        Self::with_options(
            "streets".to_string(),
            "Street Map".to_string(),
            options,
            Box::new(MapboxStyleSource::new(MAPBOX_STREETS_STYLE, access_token)),
        )
    }

    pub fn dark(access_token: &str) -> Self {
        Self::mapbox(
            "dark".to_string(),
            "Dark Map".to_string(),
            MAPBOX_DARK_STYLE,
            access_token,
        )
    }

    pub fn satellite(access_token: &str) -> Self {
        Self::mapbox(
            "satellite".to_string(),
            "Satellite Map".to_string(),
            MAPBOX_SATELLITE_STYLE,
            access_token,
        )
    }

    pub fn tile_options(&self) -> &TileLayerOptions {
        &self.options
    }

    /// Concrete URL of one tile
    pub fn tile_url(&self, coord: TileCoord) -> String {
        self.source.url(coord)
    }
}

impl Layer for TileLayer {
    crate::impl_layer_trait!(properties);

    fn options(&self) -> serde_json::Value {
        let mut tile_options = serde_json::json!({
            "attribution": self.options.attribution,
            "tileSize": self.options.tile_size,
            "zoomOffset": self.options.zoom_offset,
            "maxZoom": self.options.max_zoom,
            "minZoom": self.options.min_zoom,
        });
        if let Some(map) = tile_options.as_object_mut() {
            for (key, value) in self.source.template_params() {
                map.insert(key.to_string(), serde_json::Value::String(value));
            }
        }

        serde_json::json!({
            "id": self.properties.id,
            "name": self.properties.name,
            "type": self.properties.layer_type,
            "visible": self.properties.visible,
            "urlTemplate": self.source.url_template(),
            "options": tile_options,
        })
    }
}
