//! HTTP client configuration.

use reqwest::{Client, ClientBuilder, Method, StatusCode};
use std::time::Duration;

use crate::request::{Params, RequestBuilder};
use crate::response::read_body;

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Request timeout.
    pub request_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
    /// Maximum connections per host.
    pub pool_max_idle_per_host: usize,
    /// Enable gzip decompression.
    pub gzip: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            user_agent: format!("phrase-tag/{}", env!("CARGO_PKG_VERSION")),
            pool_max_idle_per_host: 10,
            gzip: true,
        }
    }
}

/// Build a configured HTTP client.
pub fn build_client(config: &HttpConfig, request: &RequestBuilder) -> Result<Client, HttpError> {
    let mut builder = ClientBuilder::new()
        .connect_timeout(config.connect_timeout)
        .timeout(config.request_timeout)
        .user_agent(&config.user_agent)
        .default_headers(request.headers().clone())
        .pool_max_idle_per_host(config.pool_max_idle_per_host);

    if config.gzip {
        builder = builder.gzip(true);
    }

    builder.build().map_err(HttpError::ClientBuild)
}

/// HTTP errors.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("request timed out")]
    Timeout,

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
}

impl From<reqwest::Error> for HttpError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            HttpError::Timeout
        } else {
            HttpError::Request(e)
        }
    }
}

/// HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    request: RequestBuilder,
}

impl HttpClient {
    /// Create a client for `request`'s base URL and headers with default config.
    pub fn new(request: RequestBuilder) -> Result<Self, HttpError> {
        Self::with_config(HttpConfig::default(), request)
    }

    /// Create a client with custom config.
    pub fn with_config(config: HttpConfig, request: RequestBuilder) -> Result<Self, HttpError> {
        let inner = build_client(&config, &request)?;
        Ok(Self { inner, request })
    }

    /// Resolve a path against the base URL.
    pub fn url(&self, path: &str) -> String {
        self.request.url(path)
    }

    /// Make a GET request with query parameters.
    pub async fn get(&self, path: &str, query: &Params) -> Result<reqwest::Response, HttpError> {
        self.send(Method::GET, path, query, None).await
    }

    /// Make a PATCH request with query parameters and a form-encoded body.
    pub async fn patch_form(
        &self,
        path: &str,
        query: &Params,
        form: &Params,
    ) -> Result<reqwest::Response, HttpError> {
        self.send(Method::PATCH, path, query, Some(form)).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &Params,
        form: Option<&Params>,
    ) -> Result<reqwest::Response, HttpError> {
        let url = self.url(path);
        tracing::debug!("Making {} request to: {}", method, url);

        let mut builder = self.inner.request(method.clone(), &url).query(query);
        if let Some(form) = form {
            builder = builder.form(form);
        }

        let response = builder.send().await.map_err(HttpError::from)?;
        tracing::debug!("{} response: {} {}", method, response.status(), url);
        Ok(response)
    }

    /// Pass the response through if it has exactly `expected` status.
    ///
    /// Anything else becomes [`HttpError::Status`] carrying the raw body.
    pub async fn expect_status(
        response: reqwest::Response,
        expected: StatusCode,
    ) -> Result<reqwest::Response, HttpError> {
        let status = response.status();
        if status == expected {
            return Ok(response);
        }

        let body = read_body(response).await;
        Err(HttpError::Status {
            status: status.as_u16(),
            body,
        })
    }
}
