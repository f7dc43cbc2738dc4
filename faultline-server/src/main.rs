//! Faultline Server Binary
//!
//! Serves the fault-injection REST API over an in-memory store.

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

use faultline_server::{init_logging, ConfigLoader, Server, ServerConfig};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (YAML, or JSON with a .json extension)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Server bind address
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// Log filter, e.g. `debug` or `faultline_rest_api=trace`
    #[arg(long)]
    log_level: Option<String>,

    /// Start with empty item and user tables
    #[arg(long)]
    no_seed: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // File, then FAULTLINE_* environment, then command line
    let mut config = ConfigLoader::new().load(cli.config.as_deref())?;
    apply_cli_overrides(&mut config, &cli);
    config.validate()?;

    if cli.print_config {
        println!("{}", serde_yaml::to_string(&config)?);
        return Ok(());
    }

    init_logging(&config.logging);

    Server::new(config).start().await
}

/// Apply CLI argument overrides to configuration
fn apply_cli_overrides(config: &mut ServerConfig, cli: &Cli) {
    if let Some(bind) = cli.bind {
        config.server.bind_address = bind;
    }

    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }

    if cli.no_seed {
        config.api.seed_data = false;
    }
}
