#![allow(clippy::enum_variant_names)]

use clap::Parser as _;
use tracing::debug;

use crate::{
    application::{Application, ApplicationError, print_summary},
    cli::Cli,
};

mod application;
mod checksum;
mod cli;
mod executor;
mod report;
mod walker;

#[compio::main]
#[snafu::report]
async fn main() -> Result<(), ApplicationError> {
    let cli_args = Cli::parse();
    setup_tracing(&cli_args);
    debug!("Parsed CLI arguments: {cli_args:?}");

    let quiet = cli_args.log_level.to_tracing_level().is_none();
    let summary = Application::run(cli_args).await?;
    if !quiet {
        print_summary(&summary);
    }

    Ok(())
}

/// Diagnostics go to stderr; stdout and the report file never carry them.
fn setup_tracing(cli_args: &Cli) {
    let level = if cli_args.timings {
        cli_args.log_level.with_timings()
    } else {
        cli_args.log_level.to_tracing_level()
    };
    if let Some(level) = level {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}
