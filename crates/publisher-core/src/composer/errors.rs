use crate::errors::PublisherError;
use crate::i18n::{self, Message};
use crate::transport::TransportError;

#[derive(Debug, thiserror::Error)]
pub enum ComposerError {
    #[error("Attachment '{client_id}' is already part of the draft")]
    DuplicateAttachment { client_id: String },

    #[error("File '{file_name}' has an unsupported type. Allowed: {allowed}")]
    UnsupportedFileType { file_name: String, allowed: String },

    #[error("File '{file_name}' is {size_bytes} bytes, over the {limit_bytes} byte limit")]
    FileTooLarge {
        file_name: String,
        size_bytes: u64,
        limit_bytes: u64,
    },

    #[error("Cannot submit while {count} upload(s) are in progress")]
    UploadsInFlight { count: usize },

    #[error("Draft is not ready to be submitted")]
    NotSubmittable,

    #[error("Submitting the post failed: {source}")]
    SubmitFailed {
        #[from]
        source: TransportError,
    },
}

impl ComposerError {
    /// Status line to show for errors the uploader reports to the user.
    pub fn status_message(&self) -> Option<Message> {
        match self {
            ComposerError::UnsupportedFileType { file_name, allowed } => Some(
                Message::new(i18n::UPLOAD_INVALID_EXT)
                    .with_param("file", file_name)
                    .with_param("extensions", allowed),
            ),
            ComposerError::FileTooLarge {
                file_name,
                limit_bytes,
                ..
            } => Some(
                Message::new(i18n::UPLOAD_SIZE_ERROR)
                    .with_param("file", file_name)
                    .with_param("limit", limit_bytes),
            ),
            _ => None,
        }
    }
}

impl PublisherError for ComposerError {
    fn error_code(&self) -> &'static str {
        match self {
            ComposerError::DuplicateAttachment { .. } => "DUPLICATE_ATTACHMENT",
            ComposerError::UnsupportedFileType { .. } => "UNSUPPORTED_FILE_TYPE",
            ComposerError::FileTooLarge { .. } => "FILE_TOO_LARGE",
            ComposerError::UploadsInFlight { .. } => "UPLOADS_IN_FLIGHT",
            ComposerError::NotSubmittable => "NOT_SUBMITTABLE",
            ComposerError::SubmitFailed { source } => source.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            ComposerError::SubmitFailed { source } => source.is_user_error(),
            _ => true,
        }
    }
}
