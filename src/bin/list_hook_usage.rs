// src/bin/list_hook_usage.rs

use anyhow::{Context, Result};
use clap::Parser;
use extension_survey::cli::HookUsageCli;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = HookUsageCli::parse().into_options();

    let summary = extension_survey::run(&options)
        .with_context(|| format!("Hook usage survey of {} failed", options.input))?;

    info!("Hook usage survey complete: {}", summary);
    Ok(())
}
