//! Search queries in Phrase's key filter syntax.

/// Build a `q` value: the key pattern followed by a `tags:` clause.
///
/// Tags are joined with `,` in the order given, without deduplication or
/// validation. The result is trimmed, so an absent pattern with no tags
/// yields the empty string.
pub fn build_query(key: Option<&str>, tags: &[String]) -> String {
    let mut query = key.unwrap_or_default().to_string();
    if !tags.is_empty() {
        query.push_str(" tags:");
        query.push_str(&tags.join(","));
    }
    query.trim().to_string()
}

/// Which keys an operation applies to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyQuery {
    /// Free-text key name pattern, e.g. `error.*`.
    pub key: Option<String>,
    /// Keys must carry these tags.
    pub tags: Vec<String>,
}

impl KeyQuery {
    pub fn new(key: Option<String>, tags: Vec<String>) -> Self {
        Self { key, tags }
    }

    /// The query string sent to Phrase.
    pub fn to_query_string(&self) -> String {
        build_query(self.key.as_deref(), &self.tags)
    }
}
