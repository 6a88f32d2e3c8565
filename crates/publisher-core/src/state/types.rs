use serde::{Deserialize, Serialize};

use crate::draft::{ClientId, LocationRef, ServiceId, UploadOutcome, VisibilityTarget};

/// All operations that can be dispatched against a composer.
///
/// User actions and transport callbacks share this one vocabulary. Commands
/// own their data so they can be serialized, queued and replayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Open the composer panel. Ignored while disabled.
    Open,
    /// Close the panel, keeping the draft.
    Close,
    /// Close, drop the preview and reset the draft.
    Clear,
    /// Replace the draft text.
    SetText { text: String },
    /// Enable or disable the composer and all submit controls.
    SetEnabled { enabled: bool },
    /// Pick an entry in the audience selector.
    ToggleVisibility { target: VisibilityTarget },
    /// Flip cross-posting to one service.
    ToggleService { service: ServiceId },
    /// The upload transport accepted a file.
    AddAttachment {
        client_id: ClientId,
        file_name: String,
        #[serde(default)]
        size_bytes: Option<u64>,
    },
    /// Upload progress for a file, in percent.
    UpdateAttachmentProgress { client_id: ClientId, percent: u32 },
    /// The upload transport finished a file.
    CompleteAttachment {
        client_id: ClientId,
        outcome: UploadOutcome,
    },
    /// The user removed a file from the draft.
    RemoveAttachment { client_id: ClientId },
    SetLocation { location: LocationRef },
    ClearLocation,
    /// Render the submission without sending it.
    Preview,
    /// Publish the draft.
    Submit,
}

impl Command {
    /// Snake-case name, as used in the serialized `command` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Open => "open",
            Command::Close => "close",
            Command::Clear => "clear",
            Command::SetText { .. } => "set_text",
            Command::SetEnabled { .. } => "set_enabled",
            Command::ToggleVisibility { .. } => "toggle_visibility",
            Command::ToggleService { .. } => "toggle_service",
            Command::AddAttachment { .. } => "add_attachment",
            Command::UpdateAttachmentProgress { .. } => "update_attachment_progress",
            Command::CompleteAttachment { .. } => "complete_attachment",
            Command::RemoveAttachment { .. } => "remove_attachment",
            Command::SetLocation { .. } => "set_location",
            Command::ClearLocation => "clear_location",
            Command::Preview => "preview",
            Command::Submit => "submit",
        }
    }
}
