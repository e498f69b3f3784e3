//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.iss-tracker/config.toml` (global user preferences)
//! 3. **Project config** - `./.iss-tracker/config.toml`, replaced by an explicit path if given
//! 4. **CLI arguments** - Command-line flags (highest priority, applied by the caller)

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::types::{MapConfig, PollConfig, ProviderConfig, TrackerConfig};
use crate::errors::ConfigError;

pub const CONFIG_DIR_NAME: &str = ".iss-tracker";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from the hierarchy of config files.
///
/// Missing user and project files are skipped. An `explicit` path replaces
/// the project config and must exist. The result is not validated: CLI
/// overrides still have to be applied on top, so callers validate the final
/// configuration with [`validate_config`](crate::config::validate_config).
///
/// # Errors
///
/// Returns an error if a file exists but cannot be read or parsed, or if the
/// explicit file is missing.
pub fn load_hierarchy(explicit: Option<&Path>) -> Result<TrackerConfig, ConfigError> {
    let user_path = user_config_path();
    if user_path.is_none() {
        warn!(
            event = "core.config.home_dir_unavailable",
            "Could not determine home directory - skipping user config"
        );
    }

    let project_path = match explicit {
        Some(path) => path.to_path_buf(),
        None => project_config_path()?,
    };

    load_layers(user_path.as_deref(), &project_path, explicit.is_some())
}

/// Merge the user file, then the project file, over the defaults.
///
/// `project_required` turns a missing project file into
/// [`ConfigError::ConfigNotFound`].
fn load_layers(
    user_path: Option<&Path>,
    project_path: &Path,
    project_required: bool,
) -> Result<TrackerConfig, ConfigError> {
    let mut config = TrackerConfig::default();

    if let Some(path) = user_path
        && let Some(user_config) = load_config_file(path)?
    {
        config = merge_configs(config, user_config);
    }

    match load_config_file(project_path)? {
        Some(project_config) => config = merge_configs(config, project_config),
        None if project_required => {
            return Err(ConfigError::ConfigNotFound {
                path: project_path.display().to_string(),
            });
        }
        None => {}
    }

    Ok(config)
}

/// `~/.iss-tracker/config.toml`, if the home directory is known.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// `./.iss-tracker/config.toml` relative to the working directory.
pub fn project_config_path() -> Result<PathBuf, ConfigError> {
    Ok(std::env::current_dir()?
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME))
}

/// Load a configuration file. A missing file yields `Ok(None)`.
pub fn load_config_file(path: &Path) -> Result<Option<TrackerConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(
                event = "core.config.file_not_found",
                path = %path.display(),
            );
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let config = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    debug!(event = "core.config.file_loaded", path = %path.display());

    Ok(Some(config))
}

/// Merge two configurations, with `override_config` taking precedence.
///
/// Each field is taken from the override only if it is set there.
pub fn merge_configs(base: TrackerConfig, override_config: TrackerConfig) -> TrackerConfig {
    TrackerConfig {
        provider: ProviderConfig {
            endpoint: override_config.provider.endpoint.or(base.provider.endpoint),
            timeout_secs: override_config
                .provider
                .timeout_secs
                .or(base.provider.timeout_secs),
        },
        poll: PollConfig {
            interval_secs: override_config
                .poll
                .interval_secs
                .or(base.poll.interval_secs),
        },
        map: MapConfig {
            zoom: override_config.map.zoom.or(base.map.zoom),
            width: override_config.map.width.or(base.map.width),
            height: override_config.map.height.or(base.map.height),
            tile_url: override_config.map.tile_url.or(base.map.tile_url),
            marker_label: override_config.map.marker_label.or(base.map.marker_label),
            marker_glyph: override_config.map.marker_glyph.or(base.map.marker_glyph),
        },
        observer: override_config.observer.or(base.observer),
    }
}
