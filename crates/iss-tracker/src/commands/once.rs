use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info};

use iss_tracker_core::errors::TrackerError;
use iss_tracker_core::{HttpProvider, events};

use super::helpers::{build_runtime, load_config};

#[derive(Serialize)]
struct OnceOutput<'a> {
    latitude: f64,
    longitude: f64,
    endpoint: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    observer_distance_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    overhead: Option<bool>,
}

pub(crate) fn handle_once_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(matches)?;
    let json_output = matches.get_flag("json");
    let endpoint = config.provider.endpoint();

    info!(event = "cli.once_started", endpoint = endpoint);

    let provider = HttpProvider::new(endpoint, config.provider.timeout())?;
    let runtime = build_runtime()?;

    let position = match runtime.block_on(provider.fetch_position()) {
        Ok(position) => position,
        Err(e) => {
            eprintln!("Failed to fetch ISS position from {}: {}", endpoint, e);
            error!(
                event = "cli.once_failed",
                endpoint = endpoint,
                error = %e,
                error_code = e.error_code(),
            );
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    let observer = config.observer();
    let observer_distance_km = observer.map(|o| o.distance_km(&position));
    let overhead = observer.map(|o| o.is_overhead(&position));

    if json_output {
        let output = OnceOutput {
            latitude: position.latitude(),
            longitude: position.longitude(),
            endpoint,
            observer_distance_km,
            overhead,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", position);
        if let Some(distance) = observer_distance_km {
            println!("{:.0} km from observer", distance);
        }
        if overhead == Some(true) {
            println!("ISS overhead");
        }
    }

    info!(
        event = "cli.once_completed",
        latitude = position.latitude(),
        longitude = position.longitude(),
    );
    Ok(())
}
