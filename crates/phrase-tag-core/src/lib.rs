//! Phrase key tagging.
//!
//! [`PhraseTagClient`] turns list/tag/untag intents into calls against the
//! Phrase keys API. Callers that only need the behaviour should depend on
//! the [`TagService`] trait.

pub mod client;
pub mod error;
pub mod query;
pub mod service;

pub use client::PhraseTagClient;
pub use error::TagError;
pub use query::{build_query, KeyQuery};
pub use service::{TagOperation, TagService};

#[cfg(any(test, feature = "mocks"))]
pub use service::MockTagService;
