//! Command implementations.

mod list;
mod tag;

pub use list::ListCommand;
pub use tag::ChangeTagsCommand;

use clap::Args;
use phrase_tag_core::KeyQuery;

/// Key selection shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct KeyFilter {
    /// Key name pattern, e.g. `error.*`
    #[arg(short, long, value_name = "PATTERN")]
    pub key: Option<String>,

    /// Only keys carrying this tag (repeatable)
    #[arg(id = "filter_tags", short = 't', long = "filter-tag", value_name = "TAG")]
    pub tags: Vec<String>,
}

impl KeyFilter {
    pub fn to_query(&self) -> KeyQuery {
        KeyQuery::new(self.key.clone(), self.tags.clone())
    }
}
