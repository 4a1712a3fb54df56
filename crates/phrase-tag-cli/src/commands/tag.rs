//! Tag and untag command implementation.

use clap::Parser;
use phrase_tag_core::{TagOperation, TagService};

use super::KeyFilter;
use crate::error::CliError;
use crate::output::TagChangeOutput;

/// Add or remove tags on matching keys
#[derive(Debug, Parser)]
pub struct ChangeTagsCommand {
    #[command(flatten)]
    pub filter: KeyFilter,

    /// Tag to add or remove (repeatable)
    #[arg(long = "tag", value_name = "TAG", required = true)]
    pub tags: Vec<String>,
}

impl ChangeTagsCommand {
    pub async fn execute(
        &self,
        operation: TagOperation,
        service: &dyn TagService,
    ) -> Result<TagChangeOutput, CliError> {
        let query = self.filter.to_query();
        let records = match operation {
            TagOperation::Tag => service.tag(&query, &self.tags).await?,
            TagOperation::Untag => service.untag(&query, &self.tags).await?,
        };

        Ok(TagChangeOutput {
            operation: operation.verb(),
            records,
            tags: self.tags.clone(),
        })
    }
}
