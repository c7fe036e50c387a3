//! Feed endpoints, Mapbox styles and the default view

/// Base URL of the USGS real-time summary feeds.
pub const USGS_FEED_BASE: &str = "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary";

/// Mapbox style tile endpoint. `{id}` is the style, `{accessToken}` the credential.
pub const MAPBOX_URL_TEMPLATE: &str =
    "https://api.mapbox.com/styles/v1/{id}/tiles/{z}/{x}/{y}?access_token={accessToken}";

pub const MAPBOX_STREETS_STYLE: &str = "mapbox/streets-v11";
pub const MAPBOX_DARK_STYLE: &str = "mapbox/dark-v10";
pub const MAPBOX_SATELLITE_STYLE: &str = "mapbox/satellite-v9";

pub const MAPBOX_STREETS_ATTRIBUTION: &str = "© <a href='https://www.mapbox.com/about/maps/'>Mapbox</a> © <a href='http://www.openstreetmap.org/copyright'>OpenStreetMap</a> <strong><a href='https://www.mapbox.com/map-feedback/' target='_blank'>Improve this map</a></strong>";

pub const MAPBOX_DATA_ATTRIBUTION: &str = "Map data &copy; <a href=\"https://www.openstreetmap.org/\">OpenStreetMap</a> contributors, <a href=\"https://creativecommons.org/licenses/by-sa/2.0/\">CC-BY-SA</a>, Imagery © <a href=\"https://www.mapbox.com/\">Mapbox</a>";

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// Maximum zoom served by the Mapbox styles.
pub const MAX_ZOOM: u8 = 18;

/// Initial map center (western United States).
pub const DEFAULT_CENTER: (f64, f64) = (38.0, -110.0);

/// Initial zoom level.
pub const DEFAULT_ZOOM: f64 = 4.0;

/// Marker radius in pixels per unit of magnitude.
pub const RADIUS_SCALE: f64 = 5.0;

/// Smallest radius a marker is drawn with.
pub const MIN_RADIUS: f64 = 2.0;

/// DOM id of the map container in the exported page.
pub const MAP_CONTAINER_ID: &str = "map";

/// Environment variable holding the Mapbox access token.
pub const ACCESS_TOKEN_ENV: &str = "MAPBOX_ACCESS_TOKEN";

/// Name of the earthquake overlay in the layer control.
pub const OVERLAY_NAME: &str = "Earthquakes";
