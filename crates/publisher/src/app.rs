use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("publisher")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Drive a post composer from scripted commands")
        .long_about("Replays composer commands (typing, audience selection, cross-posting, photo uploads, location, submit) against a headless composer and prints the resulting events and draft. Nothing leaves the machine: submissions and photo deletions go to an offline transport.")
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only log errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("replay")
                .about("Dispatch a script of JSON commands, one per line")
                .arg(
                    Arg::new("script")
                        .help("Path to the script, or '-' for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print events and the final view as JSON lines")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("standalone")
                        .long("standalone")
                        .help("Run the composer in standalone mode (overrides config)")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("catalog")
                        .long("catalog")
                        .help("TOML file with translations for status messages"),
                )
                .arg(
                    Arg::new("fail-fast")
                        .long("fail-fast")
                        .help("Stop at the first refused command and exit with an error")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Show the merged configuration")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
}
