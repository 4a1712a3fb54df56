//! Tag operation errors.

use phrase_tag_common_config::ConfigError;
use phrase_tag_common_http::{HttpError, ResponseError};
use thiserror::Error;

/// Errors from list/tag/untag.
#[derive(Debug, Error)]
pub enum TagError {
    /// Phrase answered with a status other than 200. `body` is the raw
    /// response text.
    #[error("phrase replied with an error ({status}): \"{body}\"")]
    Provider { status: u16, body: String },

    /// The request never got an answer (connect failure, timeout, ...).
    #[error(transparent)]
    Transport(HttpError),

    #[error("unexpected response from phrase: {0}")]
    Response(#[from] ResponseError),

    #[error("records_affected is not a count: \"{value}\"")]
    InvalidCount { value: String },

    #[error("invalid phrase configuration: {0}")]
    Config(#[from] ConfigError),
}

impl TagError {
    /// HTTP status reported by Phrase, if the failure came from the API.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Provider { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<HttpError> for TagError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Status { status, body } => Self::Provider { status, body },
            other => Self::Transport(other),
        }
    }
}
