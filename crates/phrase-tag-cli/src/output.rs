//! Output formatting utilities for CLI commands.

use serde::Serialize;
use std::io::Write;

use crate::cli::{CommandContext, OutputFormat};
use crate::error::CliError;

/// Trait for types that can be formatted for output
pub trait FormattedOutput {
    fn format_text(&self) -> String;
    fn format_json(&self) -> Result<String, serde_json::Error>;
}

/// Print formatted output to stdout
pub fn print_output<T>(ctx: &CommandContext, value: &T) -> Result<(), CliError>
where
    T: FormattedOutput + Serialize,
{
    write_output(ctx, value, std::io::stdout().lock())
}

/// Print formatted output to a writer
pub fn write_output<T, W>(ctx: &CommandContext, value: &T, mut writer: W) -> Result<(), CliError>
where
    T: FormattedOutput + Serialize,
    W: Write,
{
    let output = match ctx.format {
        OutputFormat::Text => value.format_text(),
        OutputFormat::Json => value.format_json()?,
    };

    // An empty key list prints nothing rather than a blank line
    if output.is_empty() {
        return Ok(());
    }

    writeln!(writer, "{}", output)?;
    Ok(())
}

/// Result of `list`
#[derive(Debug, Serialize)]
pub struct KeyListOutput {
    pub keys: Vec<String>,
}

impl FormattedOutput for KeyListOutput {
    fn format_text(&self) -> String {
        self.keys.join("\n")
    }

    fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Result of `tag` and `untag`
#[derive(Debug, Serialize)]
pub struct TagChangeOutput {
    pub operation: &'static str,
    pub records: u64,
    pub tags: Vec<String>,
}

impl FormattedOutput for TagChangeOutput {
    fn format_text(&self) -> String {
        format!(
            "successfully {} {} keys with \"{}\"",
            self.operation,
            self.records,
            self.tags.join(", ")
        )
    }

    fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
