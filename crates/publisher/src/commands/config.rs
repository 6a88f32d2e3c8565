use clap::ArgMatches;
use tracing::{error, info};

use publisher_core::PublisherConfig;

pub(crate) fn handle_config_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.config_show_started", json = json_output);

    let config = PublisherConfig::load_hierarchy().map_err(|e| {
        error!(event = "cli.config_show_failed", error = %e);
        e
    })?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print!("{}", toml::to_string(&config)?);
    }

    info!(event = "cli.config_show_completed");
    Ok(())
}
