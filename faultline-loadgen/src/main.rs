//! Faultline Load Generator Binary

use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use faultline_loadgen::{LoadConfig, LoadGenerator};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the server under test
    #[arg(long, default_value = "http://localhost:8000")]
    host: String,

    /// Number of concurrent virtual users
    #[arg(short, long, default_value_t = 10)]
    users: usize,

    /// Run length in seconds
    #[arg(short, long, default_value_t = 60)]
    duration_secs: u64,

    /// Minimum pause between a user's requests
    #[arg(long, default_value_t = 1000)]
    min_wait_ms: u64,

    /// Maximum pause between a user's requests
    #[arg(long, default_value_t = 3000)]
    max_wait_ms: u64,

    /// Seed for reproducible request sequences
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if tracing_subscriber::fmt().with_env_filter(env_filter).try_init().is_err() {
        tracing::debug!("Global tracing subscriber already initialized, skipping");
    }

    let config = LoadConfig {
        host: cli.host,
        users: cli.users,
        duration: Duration::from_secs(cli.duration_secs),
        min_wait: Duration::from_millis(cli.min_wait_ms),
        max_wait: Duration::from_millis(cli.max_wait_ms),
        seed: cli.seed,
        ..LoadConfig::default()
    };

    let generator = LoadGenerator::new(config)?;
    let metrics = generator.run().await;
    metrics.log_summary();

    Ok(())
}
