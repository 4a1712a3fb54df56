//! phrase-tag CLI library
//!
//! Argument definitions, commands and output formatting for the
//! `phrase-tag` binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use error::CliError;
