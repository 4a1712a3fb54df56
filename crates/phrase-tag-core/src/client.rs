//! Phrase keys API client.

use async_trait::async_trait;
use phrase_tag_common_config::PhraseTagConfig;
use phrase_tag_common_http::{
    parse_json, without_empty, HttpClient, HttpConfig, Params, RequestBuilder,
};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::TagError;
use crate::query::KeyQuery;
use crate::service::{TagOperation, TagService};

/// Only the first page is ever requested.
const PAGE: &str = "1";
const PER_PAGE: &str = "100";

#[derive(Debug, Deserialize)]
struct KeyEntity {
    name: String,
}

#[derive(Debug, Deserialize)]
struct TagResult {
    records_affected: RecordCount,
}

/// Phrase documents `records_affected` as a numeric string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordCount {
    Text(String),
    Number(u64),
}

impl RecordCount {
    fn parse(self) -> Result<u64, TagError> {
        match self {
            Self::Number(n) => Ok(n),
            Self::Text(value) => value
                .trim()
                .parse()
                .map_err(|_| TagError::InvalidCount { value }),
        }
    }
}

/// [`TagService`] backed by the Phrase REST API of one project.
#[derive(Debug, Clone)]
pub struct PhraseTagClient {
    http: HttpClient,
}

impl PhraseTagClient {
    /// Wrap a client already pointed at `.../v2/projects/<id>/`.
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Build a client from configuration.
    ///
    /// Fails if the project id, API token or user agent is missing.
    pub fn from_config(config: &PhraseTagConfig) -> Result<Self, TagError> {
        let phrase = &config.phrase;
        phrase.require_credentials()?;

        let request = RequestBuilder::new()
            .base_url(phrase.base_url())
            .token_auth(phrase.api_token.expose());

        let http_config = HttpConfig {
            connect_timeout: config.http.connect_timeout(),
            request_timeout: config.http.request_timeout(),
            user_agent: phrase.user_agent.clone(),
            ..HttpConfig::default()
        };

        let http = HttpClient::with_config(http_config, request)?;
        Ok(Self::new(http))
    }

    fn page_params() -> Params {
        vec![("page", PAGE.to_string()), ("per_page", PER_PAGE.to_string())]
    }

    async fn change_tags(
        &self,
        operation: TagOperation,
        query: &KeyQuery,
        tags: &[String],
    ) -> Result<u64, TagError> {
        let q = query.to_query_string();
        let form = without_empty(vec![("q", q.clone()), ("tags", tags.join(","))]);

        let response = self
            .http
            .patch_form(operation.path(), &Self::page_params(), &form)
            .await?;
        let response = HttpClient::expect_status(response, StatusCode::OK).await?;

        let result: TagResult = parse_json(response).await?;
        let records = result.records_affected.parse()?;

        tracing::info!(
            "{} {} keys matching \"{}\" with tag(s) \"{}\"",
            operation.verb(),
            records,
            q,
            tags.join(", ")
        );

        Ok(records)
    }
}

#[async_trait]
impl TagService for PhraseTagClient {
    async fn list(&self, query: &KeyQuery) -> Result<Vec<String>, TagError> {
        let mut params = Self::page_params();
        params.push(("q", query.to_query_string()));

        let response = self.http.get("keys", &without_empty(params)).await?;
        let response = HttpClient::expect_status(response, StatusCode::OK).await?;

        let keys: Vec<KeyEntity> = parse_json(response).await?;
        tracing::debug!("listed {} keys", keys.len());

        Ok(keys.into_iter().map(|key| key.name).collect())
    }

    async fn tag(&self, query: &KeyQuery, tags: &[String]) -> Result<u64, TagError> {
        self.change_tags(TagOperation::Tag, query, tags).await
    }

    async fn untag(&self, query: &KeyQuery, tags: &[String]) -> Result<u64, TagError> {
        self.change_tags(TagOperation::Untag, query, tags).await
    }
}
