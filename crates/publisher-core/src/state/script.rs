//! Command scripts: one JSON command per line.
//!
//! Blank lines and lines starting with `#` are skipped.

use super::errors::DispatchError;
use super::types::Command;

pub fn parse_script(content: &str) -> Result<Vec<Command>, DispatchError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|e| DispatchError::InvalidCommand {
                line: index + 1,
                message: e.to_string(),
            })
        })
        .collect()
}
