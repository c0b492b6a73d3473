// src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use extension_survey::cli::SurveyCli;
use tracing::info;

fn main() -> Result<()> {
    // Log to stderr so the CSV report can go to stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = SurveyCli::parse().into_options();

    let summary = extension_survey::run(&options)
        .with_context(|| format!("Survey of {} failed", options.input))?;

    info!("Survey complete: {}", summary);
    Ok(())
}
