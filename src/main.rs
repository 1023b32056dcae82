use crate::cli::Cli;
use crate::config::Config;
use crate::record_publisher::KinesisRecordPublisher;
use anyhow::Context;
use std::process::ExitCode;
use tracing::Level;

mod cli;
mod config;
mod error;
mod observability;
mod record;
mod record_publisher;
mod sender;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse_from_env();

    if let Err(e) = init() {
        eprintln!("{e:#}");
        return ExitCode::FAILURE;
    }

    let result =
        sender::send_file(cli.file_path(), &cli.stream, KinesisRecordPublisher::connect).await;

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            // the fatal line is printed even when the filter silences errors
            if tracing::enabled!(Level::ERROR) {
                tracing::error!("{e}");
            } else {
                eprintln!("{e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn init() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    observability::init_logging(&config.log_level, config.log_format)
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to initialize logging")
}
