use crate::composer::ComposerError;
use crate::errors::PublisherError;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Composer(#[from] ComposerError),
    #[error("Invalid command on line {line}: {message}")]
    InvalidCommand { line: usize, message: String },
}

impl PublisherError for DispatchError {
    fn error_code(&self) -> &'static str {
        match self {
            DispatchError::Composer(e) => e.error_code(),
            DispatchError::InvalidCommand { .. } => "INVALID_COMMAND",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            DispatchError::Composer(e) => e.is_user_error(),
            DispatchError::InvalidCommand { .. } => true,
        }
    }
}
