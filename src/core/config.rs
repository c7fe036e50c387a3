//! Configuration for the feed, tiles, initial view and marker styling
//!
//! Every value that used to be ambient (the feed URL, the tile access token)
//! is carried here and injected into the pipeline. Configurations can be
//! built in code, loaded from JSON, or taken from defaults.

use crate::core::constants::{
    DEFAULT_CENTER, DEFAULT_ZOOM, MAX_ZOOM, MIN_RADIUS, RADIUS_SCALE, USGS_FEED_BASE,
};
use crate::core::geo::LatLng;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Magnitude threshold of a USGS summary feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedLevel {
    #[default]
    All,
    Significant,
    #[serde(rename = "m4.5")]
    M4_5,
    #[serde(rename = "m2.5")]
    M2_5,
    #[serde(rename = "m1.0")]
    M1_0,
}

impl FeedLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Significant => "significant",
            Self::M4_5 => "4.5",
            Self::M2_5 => "2.5",
            Self::M1_0 => "1.0",
        }
    }
}

impl FromStr for FeedLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "significant" => Ok(Self::Significant),
            "m4.5" | "4.5" => Ok(Self::M4_5),
            "m2.5" | "2.5" => Ok(Self::M2_5),
            "m1.0" | "1.0" => Ok(Self::M1_0),
            other => Err(Error::Config(format!("unknown feed level '{}'", other))),
        }
    }
}

/// Time window covered by a USGS summary feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedWindow {
    Hour,
    Day,
    #[default]
    Week,
    Month,
}

impl FeedWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl FromStr for FeedWindow {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hour" => Ok(Self::Hour),
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(Error::Config(format!("unknown feed window '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Explicit feed URL; overrides `level` and `window` when set
    pub url: Option<String>,
    pub level: FeedLevel,
    pub window: FeedWindow,
    /// Request timeout for the whole fetch
    pub timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: None,
            level: FeedLevel::default(),
            window: FeedWindow::default(),
            timeout_secs: 30,
        }
    }
}

impl FeedConfig {
    /// The URL the feed is fetched from
    pub fn resolved_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!(
                "{}/{}_{}.geojson",
                USGS_FEED_BASE,
                self.level.as_str(),
                self.window.as_str()
            ),
        }
    }
}

/// Credential for the tile provider
#[derive(Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TileConfig {
    pub access_token: String,
}

impl std::fmt::Debug for TileConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TileConfig")
            .field("access_token", &if self.access_token.is_empty() { "<empty>" } else { "<redacted>" })
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub center: LatLng,
    pub zoom: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            center: LatLng::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
            zoom: DEFAULT_ZOOM,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Pixels of radius per unit of magnitude
    pub radius_scale: f64,
    /// Floor applied to zero, negative and missing magnitudes
    pub min_radius: f64,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            radius_scale: RADIUS_SCALE,
            min_radius: MIN_RADIUS,
            weight: 1.5,
            opacity: 1.0,
            fill_opacity: 1.0,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuakeMapConfig {
    pub feed: FeedConfig,
    pub tiles: TileConfig,
    pub view: ViewConfig,
    pub markers: MarkerConfig,
}

impl QuakeMapConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::read_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a JSON file without validating it, for callers that still
    /// apply overrides and call [`validate`](Self::validate) themselves
    pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading configuration from {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.tiles.access_token = token.into();
        self
    }

    pub fn with_feed_url(mut self, url: impl Into<String>) -> Self {
        self.feed.url = Some(url.into());
        self
    }

    /// Checks value ranges; an empty access token is only warned about
    pub fn validate(&self) -> Result<()> {
        let markers = &self.markers;
        if !markers.radius_scale.is_finite() || markers.radius_scale < 0.0 {
            return Err(Error::Config(format!(
                "radius_scale must be a non-negative number, got {}",
                markers.radius_scale
            )));
        }
        if !markers.min_radius.is_finite() || markers.min_radius < 0.0 {
            return Err(Error::Config(format!(
                "min_radius must be a non-negative number, got {}",
                markers.min_radius
            )));
        }
        if !self.view.center.is_valid() {
            return Err(Error::Config(format!(
                "invalid map center ({}, {})",
                self.view.center.lat, self.view.center.lng
            )));
        }
        if !(0.0..=MAX_ZOOM as f64).contains(&self.view.zoom) {
            return Err(Error::Config(format!(
                "zoom {} is outside 0..={}",
                self.view.zoom, MAX_ZOOM
            )));
        }
        if self.tiles.access_token.trim().is_empty() {
            log::warn!("no tile access token configured; base layers will not load");
        }
        Ok(())
    }
}
