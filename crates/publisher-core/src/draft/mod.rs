//! The in-progress post draft and the pure rules that mutate its parts.

pub mod attachments;
pub mod services;
pub mod types;
pub mod visibility;

pub use attachments::UploadOutcome;
pub use services::CharCounter;
pub use types::{
    AspectId, AttachmentRef, AttachmentStatus, ClientId, Coordinates, Draft, LocationRef,
    ServiceId, VisibilityScope,
};
pub use visibility::{VisibilityIcon, VisibilityTarget};
