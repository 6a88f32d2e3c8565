//! Outbound calls the composer makes: deleting uploaded photos and
//! submitting the finished post.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::composer::Submission;
use crate::errors::PublisherError;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Request rejected with status {status}")]
    Rejected { status: u16 },

    #[error("Transport unavailable: {message}")]
    Unavailable { message: String },
}

impl PublisherError for TransportError {
    fn error_code(&self) -> &'static str {
        match self {
            TransportError::Rejected { .. } => "TRANSPORT_REJECTED",
            TransportError::Unavailable { .. } => "TRANSPORT_UNAVAILABLE",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, TransportError::Rejected { status } if (400..500).contains(status))
    }
}

/// Server acknowledgement of a submitted post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub post_id: String,
    /// RFC 3339 timestamp.
    pub submitted_at: String,
}

/// Network side of the composer.
///
/// Upload progress and completion are not part of this trait; they arrive
/// as commands from whatever drives the upload.
pub trait Transport {
    fn delete_attachment(&mut self, remote_id: &str) -> Result<(), TransportError>;
    fn submit(&mut self, submission: &Submission) -> Result<SubmitReceipt, TransportError>;
}

/// Transport that accepts everything and remembers what it was asked to do.
#[derive(Debug, Default)]
pub struct OfflineTransport {
    pub deleted: Vec<String>,
    pub submitted: Vec<Submission>,
}

impl OfflineTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for OfflineTransport {
    fn delete_attachment(&mut self, remote_id: &str) -> Result<(), TransportError> {
        info!(event = "core.transport.delete_recorded", remote_id = remote_id);
        self.deleted.push(remote_id.to_string());
        Ok(())
    }

    fn submit(&mut self, submission: &Submission) -> Result<SubmitReceipt, TransportError> {
        let receipt = SubmitReceipt {
            post_id: uuid::Uuid::new_v4().to_string(),
            submitted_at: chrono::Utc::now().to_rfc3339(),
        };
        info!(
            event = "core.transport.submit_recorded",
            post_id = receipt.post_id,
            photo_count = submission.photos.len()
        );
        self.submitted.push(submission.clone());
        Ok(receipt)
    }
}
