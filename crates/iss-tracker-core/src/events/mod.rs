use std::time::Duration;

use tracing::{error, info};

use crate::position::Observer;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_shutdown() {
    info!(event = "core.app.shutdown_started");
}

pub fn log_app_error(error: &dyn std::error::Error) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_type = std::any::type_name_of_val(error)
    );
}

pub fn log_tracker_mounted(provider: &str, interval: Duration) {
    info!(
        event = "core.tracker.mount_started",
        provider = provider,
        interval_ms = interval.as_millis() as u64,
    );
}

pub fn log_tracker_unmounted(completed_ticks: u64) {
    info!(
        event = "core.tracker.unmount_completed",
        completed_ticks = completed_ticks,
    );
}

/// The ISS crossed the observer's overhead threshold, in either direction.
pub fn log_overhead_changed(observer: &Observer, overhead: bool, distance_km: f64) {
    let event = if overhead {
        "core.tracker.iss_overhead"
    } else {
        "core.tracker.iss_departed"
    };
    info!(
        event = event,
        distance_km = distance_km,
        threshold_km = observer.overhead_threshold_km(),
        observer_latitude = observer.position().latitude(),
        observer_longitude = observer.position().longitude(),
    );
}
