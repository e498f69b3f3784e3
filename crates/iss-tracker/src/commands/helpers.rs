use std::path::PathBuf;

use clap::ArgMatches;
use tracing::{error, warn};

use iss_tracker_core::TrackerConfig;
use iss_tracker_core::errors::{ConfigError, TrackerError};
use iss_tracker_core::events;

/// Load the config hierarchy, apply this subcommand's flag overrides, then
/// validate the result. Flags can therefore repair a bad value from a file.
///
/// Prints a user-facing message before returning an error so the exit is
/// never silent in quiet mode.
pub(crate) fn load_config(matches: &ArgMatches) -> Result<TrackerConfig, ConfigError> {
    let explicit = matches.get_one::<PathBuf>("config");

    let result =
        TrackerConfig::load_hierarchy(explicit.map(PathBuf::as_path)).and_then(|mut config| {
            apply_overrides(&mut config, matches);
            config.validate()?;
            Ok(config)
        });

    if let Err(e) = &result {
        eprintln!("Configuration error: {}", e);
        if e.is_user_error() {
            warn!(
                event = "cli.config_load_failed",
                error = %e,
                error_code = e.error_code(),
            );
        } else {
            error!(
                event = "cli.config_load_failed",
                error = %e,
                error_code = e.error_code(),
            );
            events::log_app_error(e);
        }
    }

    result
}

/// Copy command-line overrides onto `config`. Flags a subcommand does not
/// define are ignored.
fn apply_overrides(config: &mut TrackerConfig, matches: &ArgMatches) {
    if let Ok(Some(endpoint)) = matches.try_get_one::<String>("endpoint") {
        config.provider.endpoint = Some(endpoint.clone());
    }
    if let Ok(Some(interval)) = matches.try_get_one::<u64>("interval") {
        config.poll.interval_secs = Some(*interval);
    }
    if let Ok(Some(zoom)) = matches.try_get_one::<u8>("zoom") {
        config.map.zoom = Some(*zoom);
    }
}

/// The tracker is single-threaded and cooperative: one thread drives both
/// rendering and network I/O.
pub(crate) fn build_runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}
