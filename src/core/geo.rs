use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Web Mercator latitude limit
const MAX_LATITUDE: f64 = 85.0511287798;

/// A WGS84 point, latitude first as Leaflet expects it
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Builds a coordinate from a GeoJSON position (`[lng, lat, ...]`).
    ///
    /// Extra elements such as depth or altitude are ignored.
    pub fn from_position(position: &[f64]) -> Result<Self> {
        let &[lng, lat, ..] = position else {
            return Err(Error::InvalidCoordinates(format!(
                "position needs at least 2 elements, got {}",
                position.len()
            )));
        };

        let point = Self::new(lat, lng);
        if !point.is_valid() {
            return Err(Error::InvalidCoordinates(format!(
                "({}, {}) is out of range",
                lat, lng
            )));
        }
        Ok(point)
    }

    /// Finite, with latitude in ±90 and longitude in ±180
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }

    pub fn clamp_lat(lat: f64) -> f64 {
        lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
    }
}

/// Axis-aligned extent of a set of points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Smallest bounds containing every point, or `None` for an empty set
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a LatLng>,
    {
        points.into_iter().fold(None, |bounds, point| {
            Some(match bounds {
                None => Self::new(*point, *point),
                Some(b) => b.including(point),
            })
        })
    }

    fn including(self, point: &LatLng) -> Self {
        Self::new(
            LatLng::new(
                self.south_west.lat.min(point.lat),
                self.south_west.lng.min(point.lng),
            ),
            LatLng::new(
                self.north_east.lat.max(point.lat),
                self.north_east.lng.max(point.lng),
            ),
        )
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }
}

/// Slippy-map tile address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

impl TileCoord {
    pub fn new(x: u32, y: u32, z: u8) -> Self {
        Self { x, y, z }
    }
}
