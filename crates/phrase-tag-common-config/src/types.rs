//! Configuration types.

use phrase_tag_common_secret::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::loader::ConfigError;

/// Public Phrase API host.
pub const DEFAULT_ENDPOINT: &str = "https://api.phrase.com";

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhraseTagConfig {
    /// Phrase project and credentials.
    pub phrase: PhraseConfig,
    /// Transport settings.
    pub http: HttpSettings,
}

/// Phrase project binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhraseConfig {
    /// Project the keys belong to.
    pub project_id: String,
    /// Access token, sent as `Authorization: token <api_token>`.
    pub api_token: SecretString,
    /// User agent identifying the calling project.
    pub user_agent: String,
    /// API host, without the `/v2` path.
    pub endpoint: String,
}

impl Default for PhraseConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            api_token: SecretString::default(),
            user_agent: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl PhraseConfig {
    /// Base URL all key endpoints are resolved against.
    ///
    /// Always ends with `/` so that relative paths like `keys/tag` append
    /// instead of replacing the last segment.
    pub fn base_url(&self) -> String {
        format!(
            "{}/v2/projects/{}/",
            self.endpoint.trim_end_matches('/'),
            self.project_id
        )
    }

    /// Check that every option needed to talk to the API is present.
    pub fn require_credentials(&self) -> Result<(), ConfigError> {
        if self.project_id.trim().is_empty() {
            return Err(ConfigError::MissingOption {
                option: "project_id".to_string(),
            });
        }
        if self.api_token.is_blank() {
            return Err(ConfigError::MissingOption {
                option: "api_token".to_string(),
            });
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::MissingOption {
                option: "user_agent".to_string(),
            });
        }
        Ok(())
    }
}

/// HTTP transport settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// Connection timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
        }
    }
}

impl HttpSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
