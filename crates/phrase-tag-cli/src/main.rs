//! phrase-tag - list, tag and untag Phrase translation keys
//!
//! Main entry point for the `phrase-tag` binary.

use std::process::ExitCode;

use clap::Parser;
use phrase_tag_cli::cli::Cli;
use phrase_tag_cli::CliError;
use phrase_tag_common_config::load_dotenv;
use phrase_tag_common_log::{LogConfig, LogLevel};

fn main() -> ExitCode {
    // `.env` may supply flag defaults such as PHRASE_TAG_CONFIG
    load_dotenv();

    let cli = Cli::parse();
    init_logging(&cli);

    // One request per invocation; a single-threaded runtime is enough
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(code = e.code(), "command failed");
            eprintln!("{}", e.report());
            e.exit_code()
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = cli.load_config()?;
    cli.execute(config).await
}

fn init_logging(cli: &Cli) {
    let mut config = LogConfig::default().with_env();
    if cli.verbose > 0 || cli.quiet {
        config.level = LogLevel::from_verbosity(cli.verbose, cli.quiet);
    }
    config.targets = cli.verbose >= 2;

    if let Err(e) = phrase_tag_common_log::init(config) {
        eprintln!("warning: {e}");
    }
}
