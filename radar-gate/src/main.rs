//! Radar Gate
//!
//! Command-line gate that blocks a CI build on a remote API test run.
//!
//! The gate triggers the configured test, waits out a grace period, then
//! polls the results API until the run reaches a terminal status. The run
//! transcript is printed to stdout; diagnostics go to stderr. The process
//! exits zero only when the run passed.

mod config;
mod gate;
mod sinks;
mod sleep;

use anyhow::Result;
use clap::Parser;
use colored::*;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{DEFAULT_TIMEOUT_SECS, RunConfig};
use crate::gate::RunGate;
use crate::sinks::ConsoleLog;
use crate::sleep::TokioSleeper;
use radar_client::RadarClient;
use radar_core::domain::outcome::StepOutcome;

#[derive(Parser)]
#[command(name = "radar-gate")]
#[command(about = "Gate a CI build on a remote API test run", long_about = None)]
struct Cli {
    /// Trigger URL of the test to run
    #[arg(long, env = "RADAR_TRIGGER_URL")]
    trigger_url: String,

    /// Access token used to authenticate API calls
    #[arg(long, env = "RADAR_ACCESS_TOKEN")]
    access_token: String,

    /// Bucket key the test lives in
    #[arg(long, env = "RADAR_BUCKET_KEY")]
    bucket_key: String,

    /// Per-call HTTP timeout in seconds
    #[arg(long, env = "RADAR_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr so the run transcript owns stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "radar_gate=info,radar_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = RunConfig::new(cli.trigger_url, cli.access_token, cli.bucket_key)
        .with_timeout_secs(cli.timeout);
    config.validate()?;

    info!(
        "Gating build on {} (timeout {}s)",
        config.trigger_endpoint,
        config.timeout.as_secs()
    );

    let client = Arc::new(RadarClient::new(
        config.access_token.clone(),
        config.timeout,
    )?);

    let gate = RunGate::new(config, client, Arc::new(TokioSleeper));

    let log = ConsoleLog;
    let mut outcome = StepOutcome::new();
    let verdict = gate.run(&log, &mut outcome).await;

    info!("Run verdict: {}", verdict);

    if outcome.is_failed() {
        println!("{} {}", "✗".red(), "Test run failed".bold());
        anyhow::bail!("test run failed");
    }

    println!("{} {}", "✓".green(), "Test run passed".bold());
    Ok(())
}
