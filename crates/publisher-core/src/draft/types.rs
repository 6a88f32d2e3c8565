use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a named contact subset (an "aspect").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AspectId(pub u64);

impl fmt::Display for AspectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier of a third-party cross-posting service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(String);

impl ServiceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ServiceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier the upload transport assigns to a file before the server knows it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ClientId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Upload lifecycle of an attachment.
///
/// Transitions only go forward: `Pending -> Complete` or `Pending -> Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentStatus {
    Pending,
    Complete,
    Failed,
}

impl fmt::Display for AttachmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AttachmentStatus::Pending => "pending",
            AttachmentStatus::Complete => "complete",
            AttachmentStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

/// A media item attached to the draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentRef {
    pub client_id: ClientId,
    pub file_name: String,
    /// Server id, assigned on successful upload.
    pub remote_id: Option<String>,
    /// Preview image URL returned by the upload.
    pub url: Option<String>,
    pub status: AttachmentStatus,
}

impl AttachmentRef {
    pub fn pending(client_id: ClientId, file_name: impl Into<String>) -> Self {
        Self {
            client_id,
            file_name: file_name.into(),
            remote_id: None,
            url: None,
            status: AttachmentStatus::Pending,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == AttachmentStatus::Pending
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// Location annotation. An absent address means the lookup is still pending.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocationRef {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

impl LocationRef {
    pub fn is_pending(&self) -> bool {
        self.address.is_none()
    }
}

/// Audience of the post. Exactly one variant is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityScope {
    #[default]
    AllAspects,
    Public,
    SpecificAspects(BTreeSet<AspectId>),
}

/// The in-progress post composition.
///
/// `Draft::default()` is the freshly opened state; a reset must return to it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Draft {
    pub text: String,
    pub attachments: Vec<AttachmentRef>,
    pub visibility: VisibilityScope,
    pub services: BTreeSet<ServiceId>,
    pub location: Option<LocationRef>,
}

impl Draft {
    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }

    pub fn has_pending_uploads(&self) -> bool {
        self.attachments.iter().any(AttachmentRef::is_pending)
    }

    pub fn attachment(&self, client_id: &ClientId) -> Option<&AttachmentRef> {
        self.attachments.iter().find(|a| &a.client_id == client_id)
    }

    pub fn attachment_mut(&mut self, client_id: &ClientId) -> Option<&mut AttachmentRef> {
        self.attachments.iter_mut().find(|a| &a.client_id == client_id)
    }

    /// Server ids of successfully uploaded attachments, in attachment order.
    pub fn photo_ids(&self) -> Vec<String> {
        self.attachments
            .iter()
            .filter(|a| a.status == AttachmentStatus::Complete)
            .filter_map(|a| a.remote_id.clone())
            .collect()
    }
}
