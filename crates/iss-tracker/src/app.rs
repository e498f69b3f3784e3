use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("iss-tracker")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Watch the International Space Station move across a terminal world map")
        .long_about("iss-tracker polls a coordinate provider every few seconds and redraws a map centered on the International Space Station. The provider is any HTTP endpoint returning {\"iss_position\": {\"latitude\", \"longitude\"}}, such as the Open Notify API or a proxy in front of it.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Config file to use instead of ./.iss-tracker/config.toml")
                .value_parser(value_parser!(std::path::PathBuf))
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("track")
                .about("Show the live map, refreshing until Ctrl-C")
                .arg(endpoint_arg())
                .arg(
                    Arg::new("interval")
                        .long("interval")
                        .short('i')
                        .help("Seconds between fetches (overrides config, default: 5)")
                        .value_parser(value_parser!(u64).range(1..))
                )
                .arg(
                    Arg::new("zoom")
                        .long("zoom")
                        .short('z')
                        .help("Map zoom level 0-19 (overrides config, default: 3)")
                        .value_parser(value_parser!(u8).range(0..=19))
                )
                .arg(
                    Arg::new("ticks")
                        .long("ticks")
                        .help("Exit after this many completed fetches instead of waiting for Ctrl-C")
                        .value_parser(value_parser!(u64).range(1..))
                )
                .arg(
                    Arg::new("plain")
                        .long("plain")
                        .help("Append frames instead of clearing the screen between them")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("once")
                .about("Fetch the current position once and print it")
                .arg(endpoint_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
}

fn endpoint_arg() -> Arg {
    Arg::new("endpoint")
        .long("endpoint")
        .short('e')
        .help("Coordinate provider URL (overrides config)")
}
