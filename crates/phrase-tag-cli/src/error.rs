//! CLI error handling and formatting.

use std::io;
use std::process::ExitCode;

use phrase_tag_common_config::ConfigError;
use phrase_tag_core::TagError;
use thiserror::Error;

/// CLI error type with rich context
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        hint: Option<String>,
    },

    /// Phrase rejected the request or returned something unusable.
    #[error("{message}")]
    Provider {
        message: String,
        status: Option<u16>,
        #[source]
        source: TagError,
    },

    /// Phrase could not be reached.
    #[error("{message}")]
    Network {
        message: String,
        #[source]
        source: TagError,
    },

    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Get the error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "E001",
            Self::Io { .. } => "E002",
            Self::Network { .. } => "E003",
            Self::Provider { .. } => "E004",
            Self::Other(_) => "E999",
        }
    }

    /// Process exit status for this error
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Config { .. } => 2,
            Self::Io { .. } => 3,
            Self::Network { .. } | Self::Provider { .. } => 4,
            Self::Other(_) => 1,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    /// Get hint for this error if available
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Config { hint, .. } => hint.as_deref(),
            Self::Provider {
                status: Some(401), ..
            } => Some("Check the API token of your Phrase configuration"),
            _ => None,
        }
    }

    /// Render the error for stderr: `error[code]: message` plus any hint.
    pub fn report(&self) -> String {
        match self.hint() {
            Some(hint) => format!("error[{}]: {}\nhint: {}", self.code(), self, hint),
            None => format!("error[{}]: {}", self.code(), self),
        }
    }
}

// Conversion implementations
impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Other(anyhow::anyhow!("JSON serialization failed: {err}"))
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        let hint = match &err {
            ConfigError::MissingOption { option } => format!(
                "Set phrase.{option} in .phrase-tag/config.yaml or PHRASE_TAG_{}",
                option.to_uppercase()
            ),
            _ => "Check your phrase-tag configuration file".to_string(),
        };
        Self::Config {
            message: format!("Configuration error: {err}"),
            source: Some(Box::new(err)),
            hint: Some(hint),
        }
    }
}

impl From<TagError> for CliError {
    fn from(err: TagError) -> Self {
        match err {
            TagError::Config(config) => Self::from(config),
            transport @ TagError::Transport(_) => Self::Network {
                message: transport.to_string(),
                source: transport,
            },
            other => Self::Provider {
                message: other.to_string(),
                status: other.status(),
                source: other,
            },
        }
    }
}
