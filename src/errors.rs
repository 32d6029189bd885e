use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the encoder, the payload builder and the provider seam.
///
/// Every variant is a distinct kind so callers can decide whether a retry
/// makes sense without inspecting messages.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Provider request failed: {0}")]
    Provider(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl PromptError {
    pub(crate) fn invalid<S: Into<String>>(message: S) -> Self {
        PromptError::InvalidArgument(message.into())
    }

    pub(crate) fn malformed<S: Into<String>>(message: S) -> Self {
        PromptError::MalformedResponse(message.into())
    }
}

pub type PromptResult<T> = Result<T, PromptError>;
