//! HTTP request types and builders.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

/// Query or form parameters, sent in order.
pub type Params = Vec<(&'static str, String)>;

/// Common HTTP headers.
pub mod headers {
    /// Scheme Phrase expects in the `Authorization` header.
    pub const TOKEN_SCHEME: &str = "token";
}

/// Collects the base URL and default headers for a client.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    headers: HeaderMap,
    base_url: Option<String>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new() -> Self {
        Self {
            headers: HeaderMap::new(),
            base_url: None,
        }
    }

    /// Set the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Add `Authorization: token <token>`.
    pub fn token_auth(mut self, token: impl AsRef<str>) -> Self {
        let raw = format!("{} {}", headers::TOKEN_SCHEME, token.as_ref());
        if let Ok(mut value) = HeaderValue::try_from(raw) {
            value.set_sensitive(true);
            self.headers.insert(AUTHORIZATION, value);
        }
        self
    }

    /// Get the built headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Build the URL for a path relative to the base URL.
    pub fn url(&self, path: &str) -> String {
        match &self.base_url {
            Some(base) => format!(
                "{}/{}",
                base.trim_end_matches('/'),
                path.trim_start_matches('/')
            ),
            None => path.to_string(),
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop parameters whose value is the empty string.
pub fn without_empty(params: Params) -> Params {
    params.into_iter().filter(|(_, value)| !value.is_empty()).collect()
}
