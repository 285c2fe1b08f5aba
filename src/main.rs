//! Fitness Tracker - Workout Metrics Calculator
//!
//! Main entry point for the command-line report.

use anyhow::Context;
use clap::Parser;
use fitness_tracker::storage::config::load_config;
use fitness_tracker::write_report;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Logs go to stderr so stdout carries only the report
    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting fitness-tracker v{}", env!("CARGO_PKG_VERSION"));

    let mut config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply(&mut config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = write_report(&config.packages, &mut out, &config.report_options())
        .context("Failed to process sensor packages")?;

    tracing::info!(
        written = outcome.written,
        failed = outcome.failed,
        "Report complete"
    );

    if outcome.failed > 0 {
        anyhow::bail!("{} of {} packages failed", outcome.failed, config.packages.len());
    }

    Ok(())
}
