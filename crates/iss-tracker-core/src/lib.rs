//! iss-tracker-core: live International Space Station position tracking
//!
//! Polls a coordinate provider on a fixed interval and renders the latest
//! position on a character-cell world map. Used by the `iss-tracker` CLI.
//!
//! # Main Entry Points
//!
//! - [`tracker`] - Mount/unmount the polling view
//! - [`provider`] - Coordinate providers (HTTP)
//! - [`map`] - Map canvas rendering
//! - [`config`] - Configuration management

pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod map;
pub mod position;
pub mod provider;
pub mod tracker;

// Re-export commonly used types at crate root for convenience
pub use config::TrackerConfig;
pub use errors::{ConfigError, TrackerError};
pub use map::{MapFrame, MapView, MarkerStyle};
pub use position::{Position, PositionError};
pub use provider::{HttpProvider, PositionProvider, ProviderError};
pub use tracker::{TrackerSnapshot, TrackerView};

// Re-export logging initialization
pub use logging::init_logging;
