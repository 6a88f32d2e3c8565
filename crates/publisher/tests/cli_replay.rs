//! Integration tests for `publisher replay`.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

/// Run `publisher replay` on a script inside an isolated home and project dir.
fn replay(dir: &Path, script: &str, extra_args: &[&str]) -> Output {
    let script_path = dir.join("script.jsonl");
    fs::write(&script_path, script).expect("Failed to write script");

    Command::new(env!("CARGO_BIN_EXE_publisher"))
        .current_dir(dir)
        .env("HOME", dir)
        .arg("replay")
        .arg(&script_path)
        .args(extra_args)
        .output()
        .expect("Failed to execute publisher")
}

fn json_records(output: &Output) -> Vec<serde_json::Value> {
    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            serde_json::from_str(line)
                .unwrap_or_else(|e| panic!("stdout line is not JSON ({}): {}", e, line))
        })
        .collect()
}

fn final_view(records: &[serde_json::Value]) -> &serde_json::Value {
    let last = records.last().expect("expected at least one record");
    assert_eq!(last["type"], "view", "last record must be the view: {}", last);
    last
}

#[test]
fn test_replay_json_output_is_line_delimited() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = replay(
        temp_dir.path(),
        r#"{"command":"open"}
{"command":"set_text","text":"hello"}
"#,
        &["--json"],
    );

    assert!(
        output.status.success(),
        "replay failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let records = json_records(&output);
    assert_eq!(records[0]["type"], "event");
    assert_eq!(records[0]["line"], 1);
    assert_eq!(records[0]["event"], "composer_opened");

    let view = final_view(&records);
    assert_eq!(view["open"], true);
    assert_eq!(view["text_input"], "hello");
    assert_eq!(view["hidden_text"], "hello");
    assert_eq!(view["submittable"], true);
}

#[test]
fn test_replay_toggle_service_twice_leaves_no_services() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = replay(
        temp_dir.path(),
        r#"{"command":"toggle_service","service":"facebook"}
{"command":"toggle_service","service":"facebook"}
"#,
        &["--json"],
    );
    assert!(output.status.success());

    let records = json_records(&output);
    let toggles: Vec<_> = records
        .iter()
        .filter(|r| r["event"] == "service_toggled")
        .map(|r| r["selected"].as_bool().unwrap())
        .collect();
    assert_eq!(toggles, vec![true, false]);

    let view = final_view(&records);
    assert_eq!(view["services"], serde_json::json!([]));
    assert!(view["indicator"].is_null());
}

#[test]
fn test_replay_aspect_toggled_twice_falls_back_to_all_aspects() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = replay(
        temp_dir.path(),
        r#"{"command":"toggle_visibility","target":"public"}
{"command":"toggle_visibility","target":{"aspect":42}}
{"command":"toggle_visibility","target":{"aspect":42}}
"#,
        &["--json"],
    );
    assert!(output.status.success());

    let view = final_view(&json_records(&output)).clone();
    assert_eq!(view["visibility"], "all_aspects");
    assert_eq!(view["aspect_ids"], serde_json::json!(["all_aspects"]));
    assert_eq!(view["visibility_icon"], "lock");
}

#[test]
fn test_replay_upload_lifecycle() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = replay(
        temp_dir.path(),
        r#"{"command":"add_attachment","client_id":"a1","file_name":"cat.jpg"}
{"command":"update_attachment_progress","client_id":"a1","percent":20}
{"command":"complete_attachment","client_id":"a1","outcome":{"success":{"remote_id":"987"}}}
"#,
        &["--json"],
    );
    assert!(output.status.success());

    let records = json_records(&output);
    assert!(
        records
            .iter()
            .any(|r| r["event"] == "attachment_progressed" && r["percent"] == 20)
    );

    let view = final_view(&records);
    assert_eq!(view["with_attachments"], true);
    let attachment = &view["attachments"][0];
    assert_eq!(attachment["client_id"], "a1");
    assert_eq!(attachment["status"], "complete");
    assert_eq!(attachment["remote_id"], "987");
    assert_eq!(view["submittable"], true);
}

#[test]
fn test_replay_stale_callback_is_ignored() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = replay(
        temp_dir.path(),
        r#"{"command":"add_attachment","client_id":"a1","file_name":"cat.png"}
{"command":"remove_attachment","client_id":"a1"}
{"command":"complete_attachment","client_id":"a1","outcome":"failure"}
"#,
        &["--json"],
    );
    assert!(output.status.success());

    let records = json_records(&output);
    let ignored = records
        .iter()
        .find(|r| r["line"] == 3)
        .expect("expected a record for line 3");
    assert_eq!(ignored["event"], "command_ignored");
    assert_eq!(ignored["reason"], "stale_attachment");

    let view = final_view(&records);
    assert_eq!(view["with_attachments"], false);
}

#[test]
fn test_replay_refused_command_is_reported_and_replay_continues() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = replay(
        temp_dir.path(),
        r#"{"command":"add_attachment","client_id":"a1","file_name":"notes.exe"}
{"command":"set_text","text":"still here"}
"#,
        &["--json"],
    );
    assert!(output.status.success());

    let records = json_records(&output);
    assert_eq!(records[0]["type"], "error");
    assert_eq!(records[0]["code"], "UNSUPPORTED_FILE_TYPE");
    assert_eq!(final_view(&records)["text_input"], "still here");
}

#[test]
fn test_replay_fail_fast_exits_with_error() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = replay(
        temp_dir.path(),
        r#"{"command":"submit"}
{"command":"set_text","text":"never reached"}
"#,
        &["--fail-fast"],
    );

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("refused"), "stdout: {}", stdout);
    assert!(!stdout.contains("never reached"), "stdout: {}", stdout);
}

#[test]
fn test_replay_invalid_script_line_fails() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = replay(temp_dir.path(), "{\"command\":\"explode\"}\n", &[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("explode"), "stderr: {}", stderr);
}

#[test]
fn test_replay_standalone_hides_close_and_preview() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = replay(
        temp_dir.path(),
        "{\"command\":\"open\"}\n",
        &["--json", "--standalone"],
    );
    assert!(output.status.success());

    let records = json_records(&output);
    let view = final_view(&records);
    assert_eq!(view["close_button_visible"], false);
    assert_eq!(view["preview_button_visible"], false);
}

#[test]
fn test_replay_human_summary() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = replay(
        temp_dir.path(),
        r#"{"command":"set_text","text":"hi"}
{"command":"toggle_service","service":"twitter"}
{"command":"submit"}
"#,
        &[],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("service_toggled"), "stdout: {}", stdout);
    assert!(stdout.contains("post_submitted"), "stdout: {}", stdout);
    assert!(stdout.contains("draft_reset"), "stdout: {}", stdout);
    assert!(stdout.contains("Draft:"), "stdout: {}", stdout);
    assert!(stdout.contains("Services:    -"), "stdout: {}", stdout);
}

#[test]
fn test_replay_project_config_limits_counter() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_dir = temp_dir.path().join(".publisher");
    fs::create_dir_all(&config_dir).expect("Failed to create .publisher dir");
    fs::write(
        config_dir.join("config.toml"),
        r#"
[services.mastodon]
max_chars = 10
"#,
    )
    .expect("Failed to write config");

    let output = replay(
        temp_dir.path(),
        r#"{"command":"set_text","text":"hello"}
{"command":"toggle_service","service":"mastodon"}
"#,
        &["--json"],
    );
    assert!(output.status.success());

    let records = json_records(&output);
    let view = final_view(&records);
    assert_eq!(view["indicator"]["limit"], 10);
    assert_eq!(view["indicator"]["remaining"], 5);
}

#[test]
fn test_replay_ignored_command_has_unique_keys() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = replay(
        temp_dir.path(),
        r#"{"command":"set_enabled","enabled":false}
{"command":"open"}
"#,
        &["--json"],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let ignored = stdout
        .lines()
        .find(|line| line.contains("command_ignored"))
        .expect("expected an ignored command record");
    assert_eq!(ignored.matches("\"command\":").count(), 1, "line: {}", ignored);
    assert_eq!(
        ignored.matches("\"source_command\":").count(),
        1,
        "line: {}",
        ignored
    );

    let record: serde_json::Value = serde_json::from_str(ignored).unwrap();
    assert_eq!(record["source_command"], "open");
    assert_eq!(record["reason"], "disabled");
}
