use std::fmt;

use serde::{Deserialize, Serialize};

use crate::composer::Submission;
use crate::draft::{ClientId, LocationRef, ServiceId, VisibilityScope};
use crate::transport::SubmitReceipt;

/// Why a command left the composer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// The composer is disabled.
    Disabled,
    /// The attachment was removed, reset away, or never added.
    StaleAttachment,
    /// The attachment already reached its final status.
    AlreadySettled,
    /// The requested state is already the current one.
    NoChange,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IgnoreReason::Disabled => "disabled",
            IgnoreReason::StaleAttachment => "stale_attachment",
            IgnoreReason::AlreadySettled => "already_settled",
            IgnoreReason::NoChange => "no_change",
        };
        write!(f, "{}", s)
    }
}

/// What changed as the result of a dispatched command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    ComposerOpened,
    ComposerClosed,
    TextChanged {
        chars: usize,
    },
    EnabledChanged {
        enabled: bool,
    },
    VisibilityChanged {
        scope: VisibilityScope,
    },
    ServiceToggled {
        service: ServiceId,
        selected: bool,
    },
    AttachmentAdded {
        client_id: ClientId,
        file_name: String,
    },
    AttachmentProgressed {
        client_id: ClientId,
        percent: u8,
    },
    AttachmentCompleted {
        client_id: ClientId,
        remote_id: String,
    },
    AttachmentFailed {
        client_id: ClientId,
    },
    AttachmentRemoved {
        client_id: ClientId,
        remote_id: Option<String>,
    },
    /// The transport could not delete an uploaded photo. The attachment is
    /// gone from the draft regardless; callers may re-add it.
    AttachmentDeletionFailed {
        remote_id: String,
        error: String,
    },
    LocationSet {
        location: LocationRef,
    },
    LocationCleared,
    PreviewRendered {
        submission: Submission,
    },
    PreviewRemoved,
    PostSubmitted {
        receipt: SubmitReceipt,
    },
    DraftReset,
    CommandIgnored {
        command: String,
        reason: IgnoreReason,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serde_roundtrip() {
        let events = vec![
            Event::ComposerOpened,
            Event::TextChanged { chars: 7 },
            Event::VisibilityChanged {
                scope: VisibilityScope::Public,
            },
            Event::AttachmentRemoved {
                client_id: ClientId::from("a1"),
                remote_id: None,
            },
            Event::PostSubmitted {
                receipt: SubmitReceipt {
                    post_id: "p1".to_string(),
                    submitted_at: "2024-01-01T00:00:00+00:00".to_string(),
                },
            },
            Event::CommandIgnored {
                command: "open".to_string(),
                reason: IgnoreReason::Disabled,
            },
        ];

        for event in events {
            let json = serde_json::to_string(&event).unwrap();
            let roundtripped: Event = serde_json::from_str(&json).unwrap();
            assert_eq!(event, roundtripped);
        }
    }

    #[test]
    fn test_ignored_event_shape() {
        let event = Event::CommandIgnored {
            command: "submit".to_string(),
            reason: IgnoreReason::StaleAttachment,
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["event"], "command_ignored");
        assert_eq!(value["reason"], "stale_attachment");
    }

    #[test]
    fn test_ignore_reason_display_matches_serde() {
        for reason in [
            IgnoreReason::Disabled,
            IgnoreReason::StaleAttachment,
            IgnoreReason::AlreadySettled,
            IgnoreReason::NoChange,
        ] {
            let json = serde_json::to_value(reason).unwrap();
            assert_eq!(json, reason.to_string());
        }
    }
}
