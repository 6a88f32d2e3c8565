use std::error::Error;

use clap::ArgMatches;
use tracing::{error, info};

use publisher_core::errors::ConfigError;
use publisher_core::{DispatchError, PublisherError};

mod config;
mod helpers;
mod replay;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let command = matches.subcommand_name().unwrap_or("none");
    info!(
        event = "cli.run_started",
        command = command,
        version = env!("CARGO_PKG_VERSION")
    );

    let result = match matches.subcommand() {
        Some(("replay", sub_matches)) => replay::handle_replay_command(sub_matches),
        Some(("config", sub_matches)) => config::handle_config_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    match &result {
        Ok(()) => info!(event = "cli.run_completed", command = command),
        Err(e) => error!(
            event = "cli.run_failed",
            command = command,
            error = %e,
            error_code = error_code(&**e)
        ),
    }
    result
}

/// Stable code for errors raised by the core crate, `UNKNOWN` otherwise.
fn error_code(error: &(dyn Error + 'static)) -> &'static str {
    if let Some(e) = error.downcast_ref::<DispatchError>() {
        e.error_code()
    } else if let Some(e) = error.downcast_ref::<ConfigError>() {
        e.error_code()
    } else {
        "UNKNOWN"
    }
}
