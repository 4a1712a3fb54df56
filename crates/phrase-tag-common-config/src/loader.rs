//! Configuration file loading and parsing.

use crate::env::apply_env_overrides;
use crate::types::PhraseTagConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Location of the config file inside a project directory.
pub const CONFIG_FILE: &str = ".phrase-tag/config.yaml";

/// Config loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read config: {source}")]
    ReadError {
        #[from]
        source: std::io::Error,
    },

    #[error("invalid YAML at line {}: {message}", line.map(|l| l.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    ParseError { line: Option<usize>, message: String },

    #[error("validation error: {message}")]
    ValidationError { message: String },

    #[error("the option \"{option}\" is required but missing")]
    MissingOption { option: String },

    #[error("environment variable not found: {var}")]
    EnvVarNotFound { var: String },
}

/// Configuration loader.
pub struct ConfigLoader {
    config_path: PathBuf,
    required: bool,
}

impl ConfigLoader {
    /// Create a loader for the given project directory.
    ///
    /// A missing config file yields the defaults.
    pub fn new(project_dir: impl AsRef<Path>) -> Self {
        Self {
            config_path: project_dir.as_ref().join(CONFIG_FILE),
            required: false,
        }
    }

    /// Create a loader for an explicit config file, which must exist.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            required: true,
        }
    }

    /// Path the loader reads from.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Load configuration from the file only.
    pub fn load(&self) -> Result<PhraseTagConfig, ConfigError> {
        let config = self.read()?;
        self.validate(&config)?;
        Ok(config)
    }

    /// Load configuration and apply `PHRASE_TAG_*` environment overrides.
    pub fn load_with_env(&self) -> Result<PhraseTagConfig, ConfigError> {
        let mut config = self.read()?;
        apply_env_overrides(&mut config);
        self.validate(&config)?;
        Ok(config)
    }

    fn read(&self) -> Result<PhraseTagConfig, ConfigError> {
        if !self.config_path.exists() {
            if self.required {
                return Err(ConfigError::NotFound {
                    path: self.config_path.clone(),
                });
            }
            return Ok(PhraseTagConfig::default());
        }

        let contents = std::fs::read_to_string(&self.config_path)?;
        let expanded = expand_env_vars(&contents)?;

        serde_yaml::from_str(&expanded).map_err(|e| ConfigError::ParseError {
            line: e.location().map(|l| l.line()),
            message: e.to_string(),
        })
    }

    /// Validate configuration values.
    ///
    /// Credentials are checked later, when a client is built, so that a
    /// config without them can still be loaded and inspected.
    fn validate(&self, config: &PhraseTagConfig) -> Result<(), ConfigError> {
        let endpoint = &config.phrase.endpoint;
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("phrase.endpoint must be an http(s) URL, got \"{endpoint}\""),
            });
        }

        if config.http.connect_timeout_secs == 0 {
            return Err(ConfigError::ValidationError {
                message: "http.connect_timeout_secs must be greater than 0".to_string(),
            });
        }

        if config.http.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationError {
                message: "http.request_timeout_secs must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(std::env::current_dir().unwrap_or_default())
    }
}

/// Expand environment variables in the form `${VAR}` or `${VAR:-default}`.
pub fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
    let re = regex::Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}").map_err(|e| {
        ConfigError::ParseError {
            line: None,
            message: e.to_string(),
        }
    })?;

    let mut result = content.to_string();
    for cap in re.captures_iter(content) {
        let var_name = &cap[1];
        let default = cap.get(2).map(|m| m.as_str());

        let value = match std::env::var(var_name) {
            Ok(v) => v,
            Err(_) => match default {
                Some(d) => d.to_string(),
                None => {
                    return Err(ConfigError::EnvVarNotFound {
                        var: var_name.to_string(),
                    })
                }
            },
        };

        result = result.replace(&cap[0], &value);
    }

    Ok(result)
}
