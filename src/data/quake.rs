//! Earthquake events extracted from feed features
//!
//! A feature becomes a [`QuakeEvent`] only if it has a usable point
//! position. Descriptive properties (`mag`, `place`, `time`) are optional:
//! missing or mistyped values are carried as `None` and rendered with
//! explicit fallbacks instead of failing the whole feed.

use crate::core::geo::LatLng;
use crate::data::geojson::{GeoJsonFeature, GeoJsonGeometry};
use crate::{Error, Result};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// One earthquake, immutable once extracted from the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuakeEvent {
    /// Feed identifier, when the feed provides one
    pub id: Option<String>,
    pub position: LatLng,
    pub magnitude: Option<f64>,
    pub place: Option<String>,
    /// Occurrence time in epoch milliseconds
    pub time: Option<i64>,
}

impl QuakeEvent {
    pub fn new(position: LatLng, magnitude: Option<f64>) -> Self {
        Self {
            id: None,
            position,
            magnitude,
            place: None,
            time: None,
        }
    }

    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self
    }

    pub fn with_time(mut self, time_ms: i64) -> Self {
        self.time = Some(time_ms);
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Extracts an event from a GeoJSON feature.
    ///
    /// Fails only when the geometry is missing, not a point, or out of range.
    pub fn from_feature(feature: &GeoJsonFeature) -> Result<Self> {
        let id = feature.id.as_ref().map(|id| match id {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        });
        let label = id.as_deref().unwrap_or("<no id>");

        let position = match &feature.geometry {
            Some(GeoJsonGeometry::Point { coordinates }) => LatLng::from_position(coordinates)
                .map_err(|e| Error::InvalidFeature(format!("{}: {}", label, e)))?,
            Some(_) => {
                return Err(Error::InvalidFeature(format!(
                    "{}: geometry is not a point",
                    label
                )))
            }
            None => return Err(Error::InvalidFeature(format!("{}: missing geometry", label))),
        };

        let magnitude = feature
            .property("mag")
            .and_then(|v| v.as_f64())
            .filter(|m| !m.is_nan());
        let place = feature
            .property("place")
            .and_then(|v| v.as_str())
            .map(str::to_owned);
        let time = feature
            .property("time")
            .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|ms| ms as i64)));

        Ok(Self {
            id,
            position,
            magnitude,
            place,
            time,
        })
    }

    /// Occurrence time as a UTC datetime, if present and representable
    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        self.time
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
    }
}
