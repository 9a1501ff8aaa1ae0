//! lsp-fixture - user-record fixture runner
//!
//! Builds two users from the configured inputs and prints their
//! descriptions, exiting with status 1 if the first one is invalid.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

mod args;
mod logging;

use args::Args;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    logging::init(&args.log_level, args.log_json)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting lsp-fixture");

    let config = if let Some(config_path) = &args.config {
        lsp_fixture_core::FixtureConfig::load_from(config_path)
            .with_context(|| format!("failed to load config from {}", config_path.display()))?
    } else {
        lsp_fixture_core::FixtureConfig::load().context("failed to load configuration")?
    };

    let stdout = std::io::stdout();
    lsp_fixture_core::run(&config, &mut stdout.lock())?;

    tracing::info!("lsp-fixture finished");
    Ok(())
}
