//! Configuration type definitions.
//!
//! Every file-level field is optional so that a project config only
//! overrides what it actually sets. Accessors fall back to
//! [`defaults`](super::defaults).

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::defaults;
use crate::map::MarkerStyle;
use crate::position::{Observer, Position, PositionError};

/// Main configuration loaded from TOML config files.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Where positions come from.
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Refresh cadence.
    #[serde(default)]
    pub poll: PollConfig,

    /// Map canvas and marker.
    #[serde(default)]
    pub map: MapConfig,

    /// Optional fixed observer, shown with the distance to the ISS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observer: Option<ObserverConfig>,
}

impl TrackerConfig {
    /// The configured observer, if set and valid.
    pub fn observer(&self) -> Option<Observer> {
        self.observer.as_ref().and_then(|o| o.observer().ok())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// URL of the coordinate provider.
    /// Default: http://localhost:5000/iss-location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds.
    /// Default: 4 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ProviderConfig {
    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .unwrap_or(defaults::DEFAULT_ENDPOINT)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(defaults::DEFAULT_TIMEOUT_SECS))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PollConfig {
    /// Seconds between fetches.
    /// Default: 5 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_secs: Option<u64>,
}

impl PollConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.unwrap_or(defaults::DEFAULT_INTERVAL_SECS))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<u8>,

    /// Canvas width in terminal cells.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u16>,

    /// Canvas height in terminal cells.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u16>,

    /// Slippy-map tile URL template with `{s}`, `{z}`, `{x}` and `{y}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tile_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker_label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker_glyph: Option<char>,
}

impl MapConfig {
    pub fn zoom(&self) -> u8 {
        self.zoom.unwrap_or(defaults::DEFAULT_ZOOM)
    }

    pub fn width(&self) -> u16 {
        self.width.unwrap_or(defaults::DEFAULT_MAP_WIDTH)
    }

    pub fn height(&self) -> u16 {
        self.height.unwrap_or(defaults::DEFAULT_MAP_HEIGHT)
    }

    pub fn tile_url(&self) -> &str {
        self.tile_url
            .as_deref()
            .unwrap_or(defaults::DEFAULT_TILE_URL)
    }

    pub fn marker(&self) -> MarkerStyle {
        MarkerStyle {
            glyph: self.marker_glyph.unwrap_or(defaults::DEFAULT_MARKER_GLYPH),
            label: self
                .marker_label
                .clone()
                .unwrap_or_else(|| defaults::DEFAULT_MARKER_LABEL.to_string()),
        }
    }
}

/// A fixed point on the ground, e.g. the user's location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverConfig {
    pub latitude: f64,
    pub longitude: f64,

    /// The ISS is reported overhead within this many kilometers.
    /// Default: 300 km.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overhead_threshold_km: Option<f64>,
}

impl ObserverConfig {
    pub fn overhead_threshold_km(&self) -> f64 {
        self.overhead_threshold_km
            .unwrap_or(defaults::DEFAULT_OVERHEAD_THRESHOLD_KM)
    }

    pub fn observer(&self) -> Result<Observer, PositionError> {
        let position = Position::new(self.latitude, self.longitude)?;
        Ok(Observer::new(position, self.overhead_threshold_km()))
    }
}
