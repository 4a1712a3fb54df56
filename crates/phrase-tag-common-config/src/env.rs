//! Environment variable handling.

use std::env;

use crate::types::PhraseTagConfig;

/// Environment variable names.
pub mod vars {
    pub const PHRASE_TAG_CONFIG: &str = "PHRASE_TAG_CONFIG";
    pub const PHRASE_TAG_PROJECT_ID: &str = "PHRASE_TAG_PROJECT_ID";
    pub const PHRASE_TAG_API_TOKEN: &str = "PHRASE_TAG_API_TOKEN";
    pub const PHRASE_TAG_USER_AGENT: &str = "PHRASE_TAG_USER_AGENT";
    pub const PHRASE_TAG_ENDPOINT: &str = "PHRASE_TAG_ENDPOINT";
}

/// Load `.env` then `.env.local` from the working directory.
///
/// Missing files are skipped; variables already set win.
pub fn load_dotenv() {
    for file in [".env", ".env.local"] {
        match dotenvy::from_filename(file) {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!(file, error = %e, "failed to load env file"),
        }
    }
}

/// Get a variable, treating empty values as unset.
pub fn non_empty_var(var: &str) -> Option<String> {
    env::var(var).ok().filter(|v| !v.is_empty())
}

/// Apply `PHRASE_TAG_*` overrides from the process environment.
pub fn apply_env_overrides(config: &mut PhraseTagConfig) {
    apply_overrides_from(config, non_empty_var);
}

/// Apply overrides from an arbitrary variable lookup.
pub fn apply_overrides_from<F>(config: &mut PhraseTagConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(project_id) = lookup(vars::PHRASE_TAG_PROJECT_ID) {
        config.phrase.project_id = project_id;
    }
    if let Some(token) = lookup(vars::PHRASE_TAG_API_TOKEN) {
        config.phrase.api_token = token.into();
    }
    if let Some(user_agent) = lookup(vars::PHRASE_TAG_USER_AGENT) {
        config.phrase.user_agent = user_agent;
    }
    if let Some(endpoint) = lookup(vars::PHRASE_TAG_ENDPOINT) {
        config.phrase.endpoint = endpoint;
    }
}
