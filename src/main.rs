mod auth;
mod booking;
mod cli;
mod config;
mod fixtures;
mod http;
mod runner;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use fixtures::load_fixtures;
use runner::Runner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let (fixture_path, config) = Cli::parse().into_config();

    let rows = load_fixtures(&fixture_path)
        .with_context(|| format!("loading fixtures from `{}`", fixture_path.display()))?;
    info!(rows = rows.len(), "loaded booking fixtures");

    let runner = Runner::new(&config)?;
    let report = runner.run(&rows).await?;

    info!(
        rows = report.rows,
        checks = report.checks,
        duration_ms = report.duration_ms as u64,
        "all booking lifecycles completed"
    );
    Ok(())
}
