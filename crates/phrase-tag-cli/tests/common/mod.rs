//! Common test utilities for CLI testing.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use mockito::Matcher;
use tempfile::{tempdir, TempDir};

pub const PROJECT_ID: &str = "PROJECT_ID";

/// Test context with temporary directory
pub struct TestContext {
    pub temp_dir: TempDir,
    pub config_path: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("phrase-tag.yaml");

        Self {
            temp_dir,
            config_path,
        }
    }

    /// Write a config file
    pub fn with_config(self, config: &str) -> Self {
        std::fs::write(&self.config_path, config).expect("Failed to write config");
        self
    }

    /// Config pointing at a mock Phrase server
    pub fn with_endpoint(self, endpoint: &str) -> Self {
        let config = format!(
            r#"
phrase:
  project_id: {PROJECT_ID}
  api_token: API_TOKEN
  user_agent: myProject
  endpoint: {endpoint}
"#
        );
        self.with_config(&config)
    }

    /// Get path to temp directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a command configured for this context
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("phrase-tag").expect("Binary not found");
        cmd.current_dir(self.path())
            .env("PHRASE_TAG_CONFIG", &self.config_path)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("PHRASE_TAG_LOG_LEVEL")
            .env_remove("PHRASE_TAG_PROJECT_ID")
            .env_remove("PHRASE_TAG_API_TOKEN")
            .env_remove("PHRASE_TAG_USER_AGENT")
            .env_remove("PHRASE_TAG_ENDPOINT");
        cmd
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Mock Phrase keys API
pub struct MockPhrase {
    server: mockito::ServerGuard,
}

impl MockPhrase {
    pub fn new() -> Self {
        Self {
            server: mockito::Server::new(),
        }
    }

    pub fn url(&self) -> String {
        self.server.url()
    }

    fn project_path(endpoint: &str) -> String {
        format!("/v2/projects/{PROJECT_ID}/{endpoint}")
    }

    fn page_params() -> Vec<Matcher> {
        vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("per_page".into(), "100".into()),
        ]
    }

    /// Mock `GET keys` for the given query
    pub fn mock_list(&mut self, q: &str, names: &[&str]) -> mockito::Mock {
        let mut query = Self::page_params();
        query.push(Matcher::UrlEncoded("q".into(), q.into()));

        let body: Vec<serde_json::Value> = names
            .iter()
            .map(|name| serde_json::json!({ "id": name, "name": name }))
            .collect();

        self.server
            .mock("GET", Self::project_path("keys").as_str())
            .match_query(Matcher::AllOf(query))
            .match_header("authorization", "token API_TOKEN")
            .match_header("user-agent", "myProject")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::Value::from(body).to_string())
            .create()
    }

    /// Mock `PATCH keys/tag` or `PATCH keys/untag`
    pub fn mock_change(&mut self, endpoint: &str, q: &str, tags: &str, records: u64) -> mockito::Mock {
        self.server
            .mock("PATCH", Self::project_path(endpoint).as_str())
            .match_query(Matcher::AllOf(Self::page_params()))
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), q.into()),
                Matcher::UrlEncoded("tags".into(), tags.into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!(r#"{{"records_affected": "{records}"}}"#))
            .create()
    }

    /// Mock an error response for any request to `endpoint`
    pub fn mock_error(&mut self, method: &str, endpoint: &str, status: usize, body: &str) -> mockito::Mock {
        self.server
            .mock(method, Self::project_path(endpoint).as_str())
            .match_query(Matcher::Any)
            .with_status(status)
            .with_body(body)
            .create()
    }
}

impl Default for MockPhrase {
    fn default() -> Self {
        Self::new()
    }
}
