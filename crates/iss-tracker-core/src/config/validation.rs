//! Configuration validation logic.

use crate::config::defaults::{MIN_MAP_HEIGHT, MIN_MAP_WIDTH};
use crate::config::types::TrackerConfig;
use crate::errors::ConfigError;
use crate::map::MAX_ZOOM;

/// Placeholders a tile URL template must contain.
pub const REQUIRED_TILE_PLACEHOLDERS: [&str; 3] = ["{z}", "{x}", "{y}"];

/// Validate a TrackerConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - Provider endpoint must be an absolute http(s) URL
/// - Timeout and interval must each be at least one second
/// - Zoom must be between 0 and 19
/// - Canvas must be at least 8x4 cells
/// - Tile URL must contain `{z}`, `{x}` and `{y}`
/// - Observer, if set, must be a valid position with a positive overhead threshold
///
/// # Errors
///
/// Returns `ConfigError::InvalidConfiguration` naming the first offending field.
pub fn validate_config(config: &TrackerConfig) -> Result<(), ConfigError> {
    let endpoint = config.provider.endpoint();
    match reqwest::Url::parse(endpoint) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => {
            return Err(invalid(format!(
                "provider.endpoint '{}' must use http or https, not '{}'",
                endpoint,
                url.scheme()
            )));
        }
        Err(e) => {
            return Err(invalid(format!(
                "provider.endpoint '{}' is not a valid URL: {}",
                endpoint, e
            )));
        }
    }

    if config.provider.timeout().as_secs() < 1 {
        return Err(invalid("provider.timeout_secs must be at least 1".to_string()));
    }

    if config.poll.interval().as_secs() < 1 {
        return Err(invalid("poll.interval_secs must be at least 1".to_string()));
    }

    if config.map.zoom() > MAX_ZOOM {
        return Err(invalid(format!(
            "map.zoom {} is out of range. Valid range: 0-{}",
            config.map.zoom(),
            MAX_ZOOM
        )));
    }

    if config.map.width() < MIN_MAP_WIDTH || config.map.height() < MIN_MAP_HEIGHT {
        return Err(invalid(format!(
            "map canvas {}x{} is too small. Minimum: {}x{}",
            config.map.width(),
            config.map.height(),
            MIN_MAP_WIDTH,
            MIN_MAP_HEIGHT
        )));
    }

    let tile_url = config.map.tile_url();
    if let Some(missing) = REQUIRED_TILE_PLACEHOLDERS
        .iter()
        .find(|placeholder| !tile_url.contains(*placeholder))
    {
        return Err(invalid(format!(
            "map.tile_url '{}' is missing the {} placeholder",
            tile_url, missing
        )));
    }

    if let Some(observer) = &config.observer {
        if let Err(e) = observer.observer() {
            return Err(invalid(format!("observer: {}", e)));
        }

        let threshold = observer.overhead_threshold_km();
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(invalid(format!(
                "observer.overhead_threshold_km must be greater than 0, got {}",
                threshold
            )));
        }
    }

    Ok(())
}

fn invalid(message: String) -> ConfigError {
    ConfigError::InvalidConfiguration { message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{MapConfig, ObserverConfig, PollConfig, ProviderConfig};

    fn with_endpoint(endpoint: &str) -> TrackerConfig {
        TrackerConfig {
            provider: ProviderConfig {
                endpoint: Some(endpoint.to_string()),
                timeout_secs: None,
            },
            ..Default::default()
        }
    }

    fn message(result: Result<(), ConfigError>) -> String {
        match result {
            Err(ConfigError::InvalidConfiguration { message }) => message,
            other => panic!("expected InvalidConfiguration, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_config(&TrackerConfig::default()).is_ok());
    }

    #[test]
    fn test_https_endpoint_is_valid() {
        assert!(validate_config(&with_endpoint("https://example.com/iss-now.json")).is_ok());
    }

    #[test]
    fn test_endpoint_must_be_url() {
        let msg = message(validate_config(&with_endpoint("/iss-location")));
        assert!(msg.contains("is not a valid URL"));
    }

    #[test]
    fn test_endpoint_must_be_http() {
        let msg = message(validate_config(&with_endpoint("ftp://example.com/iss")));
        assert!(msg.contains("must use http or https"));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = TrackerConfig {
            poll: PollConfig {
                interval_secs: Some(0),
            },
            ..Default::default()
        };
        assert!(message(validate_config(&config)).contains("poll.interval_secs"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = TrackerConfig {
            provider: ProviderConfig {
                endpoint: None,
                timeout_secs: Some(0),
            },
            ..Default::default()
        };
        assert!(message(validate_config(&config)).contains("provider.timeout_secs"));
    }

    #[test]
    fn test_zoom_out_of_range() {
        let config = TrackerConfig {
            map: MapConfig {
                zoom: Some(20),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(message(validate_config(&config)).contains("map.zoom 20"));
    }

    #[test]
    fn test_tiny_canvas_rejected() {
        let config = TrackerConfig {
            map: MapConfig {
                width: Some(4),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(message(validate_config(&config)).contains("too small"));
    }

    #[test]
    fn test_tile_url_needs_placeholders() {
        let config = TrackerConfig {
            map: MapConfig {
                tile_url: Some("https://tiles.example.com/{z}/{x}.png".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(message(validate_config(&config)).contains("{y}"));
    }

    #[test]
    fn test_observer_out_of_range() {
        let config = TrackerConfig {
            observer: Some(ObserverConfig {
                latitude: 0.0,
                longitude: 200.0,
                overhead_threshold_km: None,
            }),
            ..Default::default()
        };
        assert!(message(validate_config(&config)).starts_with("observer: longitude 200"));
    }

    fn with_threshold(km: f64) -> TrackerConfig {
        TrackerConfig {
            observer: Some(ObserverConfig {
                latitude: 23.18,
                longitude: 72.61,
                overhead_threshold_km: Some(km),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_overhead_threshold_must_be_positive() {
        let msg = message(validate_config(&with_threshold(0.0)));
        assert!(msg.contains("observer.overhead_threshold_km"));

        assert!(validate_config(&with_threshold(-5.0)).is_err());
        assert!(validate_config(&with_threshold(f64::NAN)).is_err());
        assert!(validate_config(&with_threshold(150.0)).is_ok());
    }
}
