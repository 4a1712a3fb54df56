//! The tagging seam used by the CLI.

use async_trait::async_trait;

use crate::error::TagError;
use crate::query::KeyQuery;

/// Tag mutation against the keys API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagOperation {
    Tag,
    Untag,
}

impl TagOperation {
    /// Endpoint path, relative to the project URL.
    pub fn path(self) -> &'static str {
        match self {
            Self::Tag => "keys/tag",
            Self::Untag => "keys/untag",
        }
    }

    /// Past tense used in log and command output.
    pub fn verb(self) -> &'static str {
        match self {
            Self::Tag => "tagged",
            Self::Untag => "untagged",
        }
    }
}

/// Lists, tags and untags keys.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait TagService: Send + Sync {
    /// Names of the keys matching `query`, in API order.
    async fn list(&self, query: &KeyQuery) -> Result<Vec<String>, TagError>;

    /// Add `tags` to every key matching `query`; returns the affected count.
    async fn tag(&self, query: &KeyQuery, tags: &[String]) -> Result<u64, TagError>;

    /// Remove `tags` from every key matching `query`; returns the affected count.
    async fn untag(&self, query: &KeyQuery, tags: &[String]) -> Result<u64, TagError>;
}
