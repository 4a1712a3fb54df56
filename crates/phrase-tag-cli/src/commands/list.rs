//! List command implementation.

use clap::Parser;
use phrase_tag_core::TagService;

use super::KeyFilter;
use crate::error::CliError;
use crate::output::KeyListOutput;

/// List keys matching a pattern and tags
#[derive(Debug, Parser)]
pub struct ListCommand {
    #[command(flatten)]
    pub filter: KeyFilter,
}

impl ListCommand {
    pub async fn execute(&self, service: &dyn TagService) -> Result<KeyListOutput, CliError> {
        let keys = service.list(&self.filter.to_query()).await?;
        Ok(KeyListOutput { keys })
    }
}
