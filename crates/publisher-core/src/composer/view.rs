use serde::Serialize;

use crate::composer::Submission;
use crate::draft::{AttachmentRef, CharCounter, LocationRef, VisibilityIcon, VisibilityScope};
use crate::i18n::Message;

/// Enablement of the controls a submit depends on.
///
/// All fields derive from the composer's single enabled flag (plus pending
/// uploads for the buttons), so none can be enabled on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControlState {
    pub text_input: bool,
    pub hidden_input: bool,
    pub submit_button: bool,
    pub preview_button: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttachmentView {
    #[serde(flatten)]
    pub attachment: AttachmentRef,
    pub progress: Option<u8>,
}

/// Everything a renderer needs to draw the composer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposerView {
    pub open: bool,
    pub enabled: bool,
    pub close_button_visible: bool,
    pub preview_button_visible: bool,
    pub text_input: String,
    pub hidden_text: String,
    pub controls: ControlState,
    pub with_attachments: bool,
    pub attachments: Vec<AttachmentView>,
    pub visibility: VisibilityScope,
    pub visibility_icon: VisibilityIcon,
    pub aspect_ids: Vec<String>,
    pub services: Vec<String>,
    pub indicator: Option<CharCounter>,
    pub location: Option<LocationRef>,
    pub status_message: Option<Message>,
    pub preview: Option<Submission>,
}
