use std::io::Read;

use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info};

use publisher_core::composer::ComposerView;
use publisher_core::state::script::parse_script;
use publisher_core::{
    Catalog, Command, Composer, ComposerStore, Event, OfflineTransport, PublisherError, Store,
    Translate,
};

use super::helpers::load_config_with_warning;

/// One line of `--json` output.
///
/// `source_command` names the script command that produced the record; an
/// event may carry a `command` field of its own.
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ReplayRecord<'a> {
    Event {
        line: usize,
        source_command: &'static str,
        #[serde(flatten)]
        event: &'a Event,
    },
    Error {
        line: usize,
        source_command: &'static str,
        code: &'static str,
        message: String,
    },
    View {
        #[serde(flatten)]
        view: &'a ComposerView,
        submittable: bool,
    },
}

pub(crate) fn handle_replay_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let script_path = matches
        .get_one::<String>("script")
        .ok_or("Script path is required")?;
    let json_output = matches.get_flag("json");
    let fail_fast = matches.get_flag("fail-fast");

    info!(event = "cli.replay_started", script = script_path);

    let mut config = load_config_with_warning();
    if matches.get_flag("standalone") {
        config.composer.standalone = Some(true);
    }

    let catalog = load_catalog(matches.get_one::<String>("catalog"))?;
    let content = read_script(script_path)?;
    let commands = parse_script(&content).map_err(|e| {
        error!(event = "cli.replay_parse_failed", error = %e);
        e
    })?;

    let mut store = ComposerStore::new(Composer::new(&config), OfflineTransport::new());
    let mut failures = 0usize;

    for (index, cmd) in commands.into_iter().enumerate() {
        let line = index + 1;
        let name = cmd.name();
        match store.dispatch(cmd) {
            Ok(events) => {
                for event in &events {
                    if json_output {
                        print_json(&ReplayRecord::Event {
                            line,
                            source_command: name,
                            event,
                        })?;
                    } else {
                        println!("{:>3} {:<28} {}", line, name, describe_event(event)?);
                    }
                }
            }
            Err(e) => {
                failures += 1;
                if json_output {
                    print_json(&ReplayRecord::Error {
                        line,
                        source_command: name,
                        code: e.error_code(),
                        message: e.to_string(),
                    })?;
                } else {
                    println!("{:>3} {:<28} refused: {}", line, name, e);
                }
                if fail_fast {
                    error!(event = "cli.replay_failed", line = line, error = %e);
                    return Err(e.into());
                }
            }
        }
    }

    let composer = store.composer();
    if json_output {
        print_json(&ReplayRecord::View {
            view: &composer.view(),
            submittable: composer.is_submittable(),
        })?;
    } else {
        print_summary(composer, &catalog);
    }

    info!(
        event = "cli.replay_completed",
        failures = failures,
        submitted = store.transport().submitted.len()
    );
    Ok(())
}

fn read_script(path: &str) -> Result<String, Box<dyn std::error::Error>> {
    if path == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }

    std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read script '{}': {}", path, e).into())
}

fn load_catalog(path: Option<&String>) -> Result<Catalog, Box<dyn std::error::Error>> {
    let mut catalog = Catalog::english();
    if let Some(path) = path {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read catalog '{}': {}", path, e))?;
        let overrides = Catalog::from_toml_str(&content)
            .map_err(|e| format!("Failed to parse catalog '{}': {}", path, e))?;
        catalog.extend(overrides);
    }
    Ok(catalog)
}

fn print_json<T: Serialize>(record: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string(record)?);
    Ok(())
}

/// `event_name {fields}` with the tag pulled out of the JSON form.
fn describe_event(event: &Event) -> Result<String, serde_json::Error> {
    let mut value = serde_json::to_value(event)?;
    let name = value
        .as_object_mut()
        .and_then(|fields| fields.remove("event"))
        .and_then(|tag| tag.as_str().map(str::to_string))
        .unwrap_or_default();

    match value.as_object() {
        Some(fields) if !fields.is_empty() => Ok(format!("{} {}", name, value)),
        _ => Ok(name),
    }
}

fn print_summary(composer: &Composer, catalog: &Catalog) {
    let view = composer.view();

    println!();
    println!("Draft:");
    println!("  Open:        {}", yes_no(view.open));
    println!("  Enabled:     {}", yes_no(view.enabled));
    println!("  Text:        {:?}", view.text_input);
    println!(
        "  Visibility:  {} ({:?})",
        view.aspect_ids.join(", "),
        view.visibility_icon
    );
    println!(
        "  Services:    {}",
        if view.services.is_empty() {
            "-".to_string()
        } else {
            view.services.join(", ")
        }
    );
    if let Some(indicator) = view.indicator {
        match indicator.remaining {
            Some(remaining) => println!("  Remaining:   {}", remaining),
            None => println!("  Remaining:   no limit"),
        }
    }
    println!("  Attachments: {}", view.attachments.len());
    for item in &view.attachments {
        let progress = item
            .progress
            .map(|p| format!(" {}%", p))
            .unwrap_or_default();
        println!(
            "    - {} {} [{}{}]",
            item.attachment.client_id, item.attachment.file_name, item.attachment.status, progress
        );
    }
    match &view.location {
        Some(location) => println!(
            "  Location:    {}",
            location.address.as_deref().unwrap_or("(resolving)")
        ),
        None => println!("  Location:    -"),
    }
    println!("  Submittable: {}", yes_no(composer.is_submittable()));
    if let Some(message) = &view.status_message {
        println!("Status: {}", catalog.translate(message));
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
