use std::path::Path;

use serde::{Deserialize, Serialize};

use super::types::{AttachmentRef, AttachmentStatus};

/// Result reported by the upload transport for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadOutcome {
    Success {
        remote_id: String,
        #[serde(default)]
        url: Option<String>,
    },
    Failure,
}

/// Move a pending attachment to its final status.
///
/// Returns `false` and leaves the attachment untouched if it was already
/// settled; a status never goes back to `Pending` or flips between
/// `Complete` and `Failed`.
pub fn settle(attachment: &mut AttachmentRef, outcome: UploadOutcome) -> bool {
    if !attachment.is_pending() {
        return false;
    }

    match outcome {
        UploadOutcome::Success { remote_id, url } => {
            attachment.remote_id = Some(remote_id);
            attachment.url = url;
            attachment.status = AttachmentStatus::Complete;
        }
        UploadOutcome::Failure => {
            attachment.status = AttachmentStatus::Failed;
        }
    }
    true
}

/// Lowercased extension of a file name, without the dot.
pub fn file_extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::types::ClientId;

    fn pending() -> AttachmentRef {
        AttachmentRef::pending(ClientId::from("a1"), "test.jpg")
    }

    #[test]
    fn test_settle_success_assigns_remote_id() {
        let mut attachment = pending();
        assert!(settle(
            &mut attachment,
            UploadOutcome::Success {
                remote_id: "987".to_string(),
                url: Some("test.jpg".to_string()),
            }
        ));
        assert_eq!(attachment.status, AttachmentStatus::Complete);
        assert_eq!(attachment.remote_id.as_deref(), Some("987"));
        assert_eq!(attachment.url.as_deref(), Some("test.jpg"));
    }

    #[test]
    fn test_settle_failure_keeps_remote_id_absent() {
        let mut attachment = pending();
        assert!(settle(&mut attachment, UploadOutcome::Failure));
        assert_eq!(attachment.status, AttachmentStatus::Failed);
        assert!(attachment.remote_id.is_none());
    }

    #[test]
    fn test_settle_never_regresses() {
        let mut attachment = pending();
        settle(&mut attachment, UploadOutcome::Failure);
        let settled_again = settle(
            &mut attachment,
            UploadOutcome::Success {
                remote_id: "1".to_string(),
                url: None,
            },
        );
        assert!(!settled_again);
        assert_eq!(attachment.status, AttachmentStatus::Failed);
        assert!(attachment.remote_id.is_none());
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("Holiday.JPG").as_deref(), Some("jpg"));
        assert_eq!(file_extension("archive.tar.gz").as_deref(), Some("gz"));
        assert_eq!(file_extension("README"), None);
    }

    #[test]
    fn test_outcome_serde_shape() {
        let outcome: UploadOutcome =
            serde_json::from_str(r#"{"success":{"remote_id":"987"}}"#).unwrap();
        assert_eq!(
            outcome,
            UploadOutcome::Success {
                remote_id: "987".to_string(),
                url: None
            }
        );
        let failure: UploadOutcome = serde_json::from_str(r#""failure""#).unwrap();
        assert_eq!(failure, UploadOutcome::Failure);
    }
}
