use std::io::Write;

use clap::ArgMatches;
use tracing::{error, info, warn};

use iss_tracker_core::errors::TrackerError;
use iss_tracker_core::{TrackerConfig, TrackerView, events};

use super::helpers::{build_runtime, load_config};

pub(crate) const HEADING: &str = "ISS Satellite Tracker";

/// ANSI: clear screen, cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub(crate) fn handle_track_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(matches)?;
    let max_ticks = matches.get_one::<u64>("ticks").copied();
    let plain = matches.get_flag("plain");

    info!(
        event = "cli.track_started",
        endpoint = config.provider.endpoint(),
        interval_secs = config.poll.interval().as_secs(),
        zoom = config.map.zoom(),
    );

    let runtime = build_runtime()?;
    runtime.block_on(run_page(&config, max_ticks, plain))?;

    info!(event = "cli.track_completed");
    events::log_app_shutdown();
    Ok(())
}

/// Mount the tracker, redraw on every completed fetch, unmount on exit.
async fn run_page(
    config: &TrackerConfig,
    max_ticks: Option<u64>,
    plain: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let view = match TrackerView::from_config(config) {
        Ok(view) => view,
        Err(e) => {
            eprintln!("Failed to start tracker: {}", e);
            error!(
                event = "cli.track_mount_failed",
                error = %e,
                error_code = e.error_code(),
            );
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    let mut updates = view.subscribe();
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    draw(&view, plain)?;

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    warn!(event = "cli.track_updates_closed");
                    break;
                }
                draw(&view, plain)?;

                let completed = updates.borrow_and_update().completed_ticks;
                if max_ticks.is_some_and(|max| completed >= max) {
                    info!(event = "cli.track_tick_limit_reached", completed_ticks = completed);
                    break;
                }
            }
            signal = &mut shutdown => {
                if let Err(e) = signal {
                    warn!(event = "cli.track_signal_failed", error = %e);
                }
                info!(event = "cli.track_interrupted");
                break;
            }
        }
    }

    view.unmount().await;
    Ok(())
}

/// The page: a static heading above the tracker's map.
fn draw(view: &TrackerView, plain: bool) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    if !plain {
        write!(stdout, "{}", CLEAR_SCREEN)?;
    }
    writeln!(stdout, "{}\n", HEADING)?;
    writeln!(stdout, "{}\n", view.render())?;
    stdout.flush()
}
