//! # Configuration System
//!
//! Hierarchical TOML configuration for the ISS tracker.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.iss-tracker/config.toml` (global user preferences)
//! 3. **Project config** - `./.iss-tracker/config.toml`, or the file given with `--config`
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.iss-tracker/config.toml
//! [provider]
//! endpoint = "http://api.open-notify.org/iss-now.json"
//! timeout_secs = 4
//!
//! [poll]
//! interval_secs = 5
//!
//! [map]
//! zoom = 3
//! width = 72
//! height = 20
//!
//! [observer]
//! latitude = 23.18
//! longitude = 72.61
//! overhead_threshold_km = 300.0
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use iss_tracker_core::config::TrackerConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = TrackerConfig::load_hierarchy(None)?;
//!     config.validate()?;
//!     println!("polling {} every {:?}", config.provider.endpoint(), config.poll.interval());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{MapConfig, ObserverConfig, PollConfig, ProviderConfig, TrackerConfig};
pub use validation::validate_config;

use std::path::Path;

use crate::errors::ConfigError;

impl TrackerConfig {
    /// Load configuration from the hierarchy of config files, unvalidated.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        loading::load_hierarchy(explicit)
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }
}
