use crate::core::constants::MAX_ZOOM;
use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// Initial view of the exported map and the zoom range the browser may use
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Viewport {
    /// Builds a view over the full tile zoom range.
    ///
    /// Latitude is clamped to the Web Mercator limit and zoom to `0..=MAX_ZOOM`.
    pub fn new(center: LatLng, zoom: f64) -> Self {
        let max_zoom = f64::from(MAX_ZOOM);
        Self {
            center: LatLng::new(LatLng::clamp_lat(center.lat), center.lng),
            zoom: zoom.clamp(0.0, max_zoom),
            min_zoom: 0.0,
            max_zoom,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(LatLng::default(), 0.0)
    }
}
