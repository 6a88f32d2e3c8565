use tracing::{debug, error, info, warn};

use crate::composer::Composer;
use crate::errors::PublisherError;
use crate::state::errors::DispatchError;
use crate::state::events::Event;
use crate::state::store::Store;
use crate::state::types::Command;
use crate::transport::Transport;

/// Store that routes commands to one [`Composer`] and its transport.
pub struct ComposerStore<T: Transport> {
    composer: Composer,
    transport: T,
}

impl<T: Transport> ComposerStore<T> {
    pub fn new(composer: Composer, transport: T) -> Self {
        Self {
            composer,
            transport,
        }
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_parts(self) -> (Composer, T) {
        (self.composer, self.transport)
    }
}

impl<T: Transport> Store for ComposerStore<T> {
    type Error = DispatchError;

    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, DispatchError> {
        debug!(event = "core.state.dispatch_started", command = ?cmd);

        let composer = &mut self.composer;
        let result = match cmd {
            Command::Open => Ok(composer.open()),
            Command::Close => Ok(composer.close()),
            Command::Clear => Ok(composer.clear()),
            Command::SetText { text } => Ok(composer.set_text(text)),
            Command::SetEnabled { enabled } => Ok(composer.set_enabled(enabled)),
            Command::ToggleVisibility { target } => Ok(composer.toggle_visibility(target)),
            Command::ToggleService { service } => Ok(composer.toggle_service(service)),
            Command::AddAttachment {
                client_id,
                file_name,
                size_bytes,
            } => composer
                .add_attachment(client_id, file_name, size_bytes)
                .map_err(DispatchError::from),
            Command::UpdateAttachmentProgress { client_id, percent } => {
                Ok(composer.update_attachment_progress(client_id, percent))
            }
            Command::CompleteAttachment { client_id, outcome } => {
                Ok(composer.complete_attachment(client_id, outcome))
            }
            Command::RemoveAttachment { client_id } => {
                Ok(composer.remove_attachment(client_id, &mut self.transport))
            }
            Command::SetLocation { location } => Ok(composer.set_location(location)),
            Command::ClearLocation => Ok(composer.clear_location()),
            Command::Preview => composer.render_preview().map_err(DispatchError::from),
            Command::Submit => composer
                .submit(&mut self.transport)
                .map_err(DispatchError::from),
        };

        match &result {
            Ok(events) => info!(
                event = "core.state.dispatch_completed",
                event_count = events.len()
            ),
            Err(e) if e.is_user_error() => warn!(
                event = "core.state.dispatch_rejected",
                error = %e,
                error_code = e.error_code()
            ),
            Err(e) => error!(
                event = "core.state.dispatch_failed",
                error = %e,
                error_code = e.error_code()
            ),
        }

        result
    }
}
