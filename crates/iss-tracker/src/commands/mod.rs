use clap::ArgMatches;
use tracing::error;

use iss_tracker_core::events;

mod helpers;
mod once;
mod track;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("track", sub_matches)) => track::handle_track_command(sub_matches),
        Some(("once", sub_matches)) => once::handle_once_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
