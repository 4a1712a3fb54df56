//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use phrase_tag_common_config::{ConfigLoader, PhraseTagConfig};
use phrase_tag_core::{PhraseTagClient, TagOperation, TagService};

use crate::commands::{ChangeTagsCommand, ListCommand};
use crate::error::CliError;
use crate::output::print_output;

/// phrase-tag - manage tags on Phrase translation keys
///
/// Select keys by name pattern and existing tags, then list them or add and
/// remove tags in bulk.
#[derive(Debug, Parser)]
#[command(
    name = "phrase-tag",
    author,
    version,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase verbosity level"
    )]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(
        short,
        long,
        global = true,
        env = "PHRASE_TAG_CONFIG",
        value_hint = ValueHint::FilePath,
        help = "Path to configuration file"
    )]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        global = true,
        default_value = "text",
        value_enum,
        help = "Output format (text, json)"
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List keys matching a pattern and tags
    List(ListCommand),

    /// Add tags to matching keys
    Tag(ChangeTagsCommand),

    /// Remove tags from matching keys
    Untag(ChangeTagsCommand),
}

impl Cli {
    /// Load configuration from the given file or `.phrase-tag/config.yaml`.
    pub fn load_config(&self) -> Result<PhraseTagConfig, CliError> {
        let loader = match &self.config {
            Some(path) => ConfigLoader::from_file(path),
            None => ConfigLoader::default(),
        };
        tracing::debug!("loading configuration from {}", loader.path().display());

        Ok(loader.load_with_env()?)
    }

    /// Execute the selected command against the Phrase API.
    pub async fn execute(self, config: PhraseTagConfig) -> Result<(), CliError> {
        let client = PhraseTagClient::from_config(&config)?;
        let ctx = CommandContext {
            format: self.format,
        };

        self.command.run(&ctx, &client).await
    }
}

impl Command {
    /// Run the command and print its result.
    pub async fn run(&self, ctx: &CommandContext, service: &dyn TagService) -> Result<(), CliError> {
        match self {
            Self::List(cmd) => print_output(ctx, &cmd.execute(service).await?),
            Self::Tag(cmd) => print_output(ctx, &cmd.execute(TagOperation::Tag, service).await?),
            Self::Untag(cmd) => {
                print_output(ctx, &cmd.execute(TagOperation::Untag, service).await?)
            }
        }
    }
}

/// Context passed to all commands
#[derive(Debug, Clone, Copy)]
pub struct CommandContext {
    pub format: OutputFormat,
}
