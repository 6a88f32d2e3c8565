//! The composer state aggregator.
//!
//! [`Composer`] owns one [`Draft`] plus the presentation state around it
//! (open/closed, enabled, upload progress, the character indicator, the
//! status line and an optional preview). Every mutation is a plain method
//! call returning the [`Event`]s it produced; nothing is shared or global.
//!
//! Mutations a user triggers are ignored while the composer is disabled and
//! report `CommandIgnored { reason: Disabled }` instead of failing. Upload
//! callbacks are not user actions and still apply, but only to attachments
//! still in the draft: once an attachment is removed (or the draft is reset)
//! every later callback for its client id is ignored. No record of removed
//! ids is kept.

mod errors;
pub mod heuristic;
pub mod submission;
pub mod view;

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, error, info, warn};

use crate::config::PublisherConfig;
use crate::draft::attachments::{file_extension, settle};
use crate::draft::services::toggle_service;
use crate::draft::{
    AttachmentRef, AttachmentStatus, CharCounter, ClientId, Draft, LocationRef, ServiceId,
    UploadOutcome, VisibilityTarget,
};
use crate::i18n::Message;
use crate::state::events::{Event, IgnoreReason};
use crate::transport::Transport;

pub use errors::ComposerError;
pub use heuristic::{ContentHeuristic, SubmitHeuristic};
pub use submission::Submission;
pub use view::{AttachmentView, ComposerView, ControlState};

/// Result of a mutation that can be refused with an error.
pub type Transition = Result<Vec<Event>, ComposerError>;

/// State aggregator for one in-progress post.
pub struct Composer {
    draft: Draft,
    enabled: bool,
    open: bool,
    config: PublisherConfig,
    progress: BTreeMap<ClientId, u8>,
    /// At most one indicator exists; it is dropped before a new one is computed.
    indicator: Option<CharCounter>,
    status: Option<Message>,
    preview: Option<Submission>,
    heuristic: Box<dyn SubmitHeuristic>,
}

impl fmt::Debug for Composer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composer")
            .field("draft", &self.draft)
            .field("enabled", &self.enabled)
            .field("open", &self.open)
            .field("progress", &self.progress)
            .field("indicator", &self.indicator)
            .field("status", &self.status)
            .field("preview", &self.preview)
            .finish_non_exhaustive()
    }
}

fn ignored(command: &'static str, reason: IgnoreReason) -> Vec<Event> {
    debug!(
        event = "core.composer.command_ignored",
        command = command,
        reason = %reason
    );
    vec![Event::CommandIgnored {
        command: command.to_string(),
        reason,
    }]
}

impl Composer {
    /// A closed, enabled composer with an empty draft.
    pub fn new(config: &PublisherConfig) -> Self {
        Self {
            draft: Draft::default(),
            enabled: true,
            open: false,
            config: config.clone(),
            progress: BTreeMap::new(),
            indicator: None,
            status: None,
            preview: None,
            heuristic: Box::new(ContentHeuristic),
        }
    }

    pub fn with_heuristic(mut self, heuristic: impl SubmitHeuristic + 'static) -> Self {
        self.heuristic = Box::new(heuristic);
        self
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_standalone(&self) -> bool {
        self.config.composer.standalone()
    }

    pub fn indicator(&self) -> Option<&CharCounter> {
        self.indicator.as_ref()
    }

    pub fn status_message(&self) -> Option<&Message> {
        self.status.as_ref()
    }

    pub fn preview(&self) -> Option<&Submission> {
        self.preview.as_ref()
    }

    pub fn progress(&self, client_id: &ClientId) -> Option<u8> {
        self.progress.get(client_id).copied()
    }

    /// True iff enabled and the heuristic accepts the draft. No side effects.
    pub fn is_submittable(&self) -> bool {
        self.enabled && self.heuristic.accepts(&self.draft)
    }

    /// Message to show before the page is left with unsaved content.
    pub fn unload_confirmation(&self) -> Option<Message> {
        (self.config.composer.confirm_unload() && self.is_submittable())
            .then(Message::confirm_unload)
    }

    pub fn controls(&self) -> ControlState {
        let buttons = self.enabled && !self.draft.has_pending_uploads();
        ControlState {
            text_input: self.enabled,
            hidden_input: self.enabled,
            submit_button: buttons,
            preview_button: buttons,
        }
    }

    pub fn view(&self) -> ComposerView {
        ComposerView {
            open: self.open,
            enabled: self.enabled,
            close_button_visible: !self.is_standalone(),
            preview_button_visible: !self.is_standalone(),
            text_input: self.draft.text.clone(),
            hidden_text: self.draft.text.clone(),
            controls: self.controls(),
            with_attachments: self.draft.has_attachments(),
            attachments: self
                .draft
                .attachments
                .iter()
                .map(|attachment| AttachmentView {
                    attachment: attachment.clone(),
                    progress: self.progress(&attachment.client_id),
                })
                .collect(),
            visibility: self.draft.visibility.clone(),
            visibility_icon: self.draft.visibility.icon(),
            aspect_ids: self.draft.visibility.form_values(),
            services: self.draft.services.iter().map(|s| s.to_string()).collect(),
            indicator: self.indicator,
            location: self.draft.location.clone(),
            status_message: self.status.clone(),
            preview: self.preview.clone(),
        }
    }

    fn reject_if_disabled(&self, command: &'static str) -> Option<Vec<Event>> {
        (!self.enabled).then(|| ignored(command, IgnoreReason::Disabled))
    }

    fn refresh_indicator(&mut self) {
        self.indicator = CharCounter::compute(&self.draft.services, &self.draft.text, |service| {
            self.config.service_char_limit(service.as_str())
        });
    }

    pub fn open(&mut self) -> Vec<Event> {
        if let Some(events) = self.reject_if_disabled("open") {
            return events;
        }
        if self.open {
            return ignored("open", IgnoreReason::NoChange);
        }

        self.open = true;
        info!(event = "core.composer.opened");
        vec![Event::ComposerOpened]
    }

    pub fn close(&mut self) -> Vec<Event> {
        if !self.open {
            return ignored("close", IgnoreReason::NoChange);
        }

        self.open = false;
        info!(event = "core.composer.closed");
        vec![Event::ComposerClosed]
    }

    /// Close the panel, drop any preview and reset the draft.
    pub fn clear(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        if self.open {
            self.open = false;
            events.push(Event::ComposerClosed);
        }
        if self.preview.take().is_some() {
            events.push(Event::PreviewRemoved);
        }
        events.extend(self.reset());
        events
    }

    /// Return the draft to its freshly opened state.
    ///
    /// Late callbacks for discarded uploads find no attachment and are ignored.
    pub fn reset(&mut self) -> Vec<Event> {
        let discarded = self.draft.attachments.len();
        self.draft = Draft::default();
        self.progress.clear();
        self.indicator = None;
        self.status = None;

        info!(
            event = "core.composer.draft_reset",
            discarded_attachments = discarded
        );
        vec![Event::DraftReset]
    }

    /// Replace the text. Applies even while disabled.
    pub fn set_text(&mut self, text: String) -> Vec<Event> {
        self.draft.text = text;
        if self.indicator.is_some() {
            self.refresh_indicator();
        }

        let chars = self.draft.text.chars().count();
        debug!(event = "core.composer.text_changed", chars = chars);
        vec![Event::TextChanged { chars }]
    }

    pub fn set_enabled(&mut self, enabled: bool) -> Vec<Event> {
        if self.enabled == enabled {
            return ignored("set_enabled", IgnoreReason::NoChange);
        }

        self.enabled = enabled;
        info!(event = "core.composer.enabled_changed", enabled = enabled);
        vec![Event::EnabledChanged { enabled }]
    }

    pub fn toggle_visibility(&mut self, target: VisibilityTarget) -> Vec<Event> {
        if let Some(events) = self.reject_if_disabled("toggle_visibility") {
            return events;
        }

        let scope = self.draft.visibility.toggled(target);
        if scope == self.draft.visibility {
            return ignored("toggle_visibility", IgnoreReason::NoChange);
        }

        self.draft.visibility = scope.clone();
        info!(
            event = "core.composer.visibility_changed",
            aspect_ids = ?scope.form_values()
        );
        vec![Event::VisibilityChanged { scope }]
    }

    pub fn toggle_service(&mut self, service: ServiceId) -> Vec<Event> {
        if let Some(events) = self.reject_if_disabled("toggle_service") {
            return events;
        }

        self.indicator = None;
        let selected = toggle_service(&mut self.draft.services, service.clone());
        self.refresh_indicator();

        info!(
            event = "core.composer.service_toggled",
            service = %service,
            selected = selected
        );
        vec![Event::ServiceToggled { service, selected }]
    }

    fn validate_upload(&self, file_name: &str, size_bytes: Option<u64>) -> Result<(), ComposerError> {
        let allowed = self.config.uploader.allowed_extensions();
        let accepted = file_extension(file_name).is_some_and(|ext| allowed.contains(&ext));
        if !accepted {
            return Err(ComposerError::UnsupportedFileType {
                file_name: file_name.to_string(),
                allowed: allowed.join(", "),
            });
        }

        let limit_bytes = self.config.uploader.size_limit_bytes();
        if let Some(size_bytes) = size_bytes
            && size_bytes > limit_bytes
        {
            return Err(ComposerError::FileTooLarge {
                file_name: file_name.to_string(),
                size_bytes,
                limit_bytes,
            });
        }

        Ok(())
    }

    /// Start tracking an upload the transport has accepted.
    pub fn add_attachment(
        &mut self,
        client_id: ClientId,
        file_name: String,
        size_bytes: Option<u64>,
    ) -> Transition {
        if let Some(events) = self.reject_if_disabled("add_attachment") {
            return Ok(events);
        }

        if self.draft.attachment(&client_id).is_some() {
            return Err(ComposerError::DuplicateAttachment {
                client_id: client_id.to_string(),
            });
        }

        if let Err(e) = self.validate_upload(&file_name, size_bytes) {
            warn!(
                event = "core.composer.attachment_rejected",
                client_id = %client_id,
                error = %e
            );
            self.status = e.status_message();
            return Err(e);
        }

        self.draft
            .attachments
            .push(AttachmentRef::pending(client_id.clone(), file_name.clone()));

        info!(
            event = "core.composer.attachment_added",
            client_id = %client_id,
            file_name = file_name
        );
        Ok(vec![Event::AttachmentAdded {
            client_id,
            file_name,
        }])
    }

    fn live_attachment(&self, client_id: &ClientId) -> Result<&AttachmentRef, IgnoreReason> {
        self.draft
            .attachment(client_id)
            .ok_or(IgnoreReason::StaleAttachment)
    }

    /// Record upload progress. Percentages above 100 are clamped.
    pub fn update_attachment_progress(&mut self, client_id: ClientId, percent: u32) -> Vec<Event> {
        let file_name = match self.live_attachment(&client_id) {
            Ok(attachment) if attachment.is_pending() => attachment.file_name.clone(),
            Ok(_) => return ignored("update_attachment_progress", IgnoreReason::AlreadySettled),
            Err(reason) => return ignored("update_attachment_progress", reason),
        };

        let percent = percent.min(100) as u8;
        self.status = Some(Message::upload_progress(&file_name, percent));
        self.progress.insert(client_id.clone(), percent);

        debug!(
            event = "core.composer.attachment_progressed",
            client_id = %client_id,
            percent = percent
        );
        vec![Event::AttachmentProgressed { client_id, percent }]
    }

    /// Apply the transport's final word on an upload.
    pub fn complete_attachment(&mut self, client_id: ClientId, outcome: UploadOutcome) -> Vec<Event> {
        if let Err(reason) = self.live_attachment(&client_id) {
            return ignored("complete_attachment", reason);
        }
        let Some(attachment) = self.draft.attachment_mut(&client_id) else {
            return ignored("complete_attachment", IgnoreReason::StaleAttachment);
        };
        if !settle(attachment, outcome) {
            return ignored("complete_attachment", IgnoreReason::AlreadySettled);
        }

        let file_name = attachment.file_name.clone();
        let settled = (attachment.status, attachment.remote_id.clone());
        self.progress.remove(&client_id);

        match settled {
            (AttachmentStatus::Complete, Some(remote_id)) => {
                self.status = Some(Message::upload_completed(&file_name));
                info!(
                    event = "core.composer.upload_completed",
                    client_id = %client_id,
                    remote_id = remote_id
                );
                vec![Event::AttachmentCompleted {
                    client_id,
                    remote_id,
                }]
            }
            _ => {
                self.status = Some(Message::upload_error(&file_name));
                warn!(
                    event = "core.composer.upload_failed",
                    client_id = %client_id,
                    file_name = file_name
                );
                vec![Event::AttachmentFailed { client_id }]
            }
        }
    }

    /// Drop an attachment and ask the transport to delete its upload.
    ///
    /// A failed deletion is reported but the attachment stays removed.
    pub fn remove_attachment<T: Transport + ?Sized>(
        &mut self,
        client_id: ClientId,
        transport: &mut T,
    ) -> Vec<Event> {
        if let Some(events) = self.reject_if_disabled("remove_attachment") {
            return events;
        }

        let Some(index) = self
            .draft
            .attachments
            .iter()
            .position(|a| a.client_id == client_id)
        else {
            return ignored("remove_attachment", IgnoreReason::StaleAttachment);
        };

        let removed = self.draft.attachments.remove(index);
        self.progress.remove(&client_id);

        info!(
            event = "core.composer.attachment_removed",
            client_id = %client_id,
            remaining = self.draft.attachments.len()
        );

        let mut events = vec![Event::AttachmentRemoved {
            client_id,
            remote_id: removed.remote_id.clone(),
        }];

        if let Some(remote_id) = removed.remote_id
            && let Err(e) = transport.delete_attachment(&remote_id)
        {
            warn!(
                event = "core.composer.attachment_delete_failed",
                remote_id = remote_id,
                error = %e
            );
            events.push(Event::AttachmentDeletionFailed {
                remote_id,
                error: e.to_string(),
            });
        }

        events
    }

    pub fn set_location(&mut self, location: LocationRef) -> Vec<Event> {
        if let Some(events) = self.reject_if_disabled("set_location") {
            return events;
        }

        self.draft.location = Some(location.clone());
        info!(
            event = "core.composer.location_set",
            pending = location.is_pending()
        );
        vec![Event::LocationSet { location }]
    }

    /// No-op when no location is set.
    pub fn clear_location(&mut self) -> Vec<Event> {
        if let Some(events) = self.reject_if_disabled("clear_location") {
            return events;
        }
        if self.draft.location.take().is_none() {
            return ignored("clear_location", IgnoreReason::NoChange);
        }

        info!(event = "core.composer.location_cleared");
        vec![Event::LocationCleared]
    }

    fn ensure_no_pending_uploads(&self) -> Result<(), ComposerError> {
        let count = self
            .draft
            .attachments
            .iter()
            .filter(|a| a.is_pending())
            .count();
        if count > 0 {
            return Err(ComposerError::UploadsInFlight { count });
        }
        Ok(())
    }

    /// Render the payload that would be submitted, without sending it.
    pub fn render_preview(&mut self) -> Transition {
        if let Some(events) = self.reject_if_disabled("preview") {
            return Ok(events);
        }
        self.ensure_no_pending_uploads()?;

        let submission = Submission::from_draft(&self.draft);
        self.preview = Some(submission.clone());
        debug!(event = "core.composer.preview_rendered");
        Ok(vec![Event::PreviewRendered { submission }])
    }

    /// Publish the draft. On success the composer is cleared; on failure the
    /// draft is kept as it was.
    pub fn submit<T: Transport + ?Sized>(&mut self, transport: &mut T) -> Transition {
        if let Some(events) = self.reject_if_disabled("submit") {
            return Ok(events);
        }
        self.ensure_no_pending_uploads()?;
        if !self.is_submittable() {
            return Err(ComposerError::NotSubmittable);
        }

        let submission = Submission::from_draft(&self.draft);
        info!(
            event = "core.composer.submit_started",
            aspect_ids = ?submission.aspect_ids,
            services = ?submission.services,
            photo_count = submission.photos.len()
        );

        let receipt = transport.submit(&submission).map_err(|e| {
            error!(event = "core.composer.submit_failed", error = %e);
            ComposerError::from(e)
        })?;

        info!(
            event = "core.composer.submit_completed",
            post_id = receipt.post_id
        );

        let mut events = vec![Event::PostSubmitted { receipt }];
        events.extend(self.clear());
        Ok(events)
    }
}
