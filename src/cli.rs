//! CLI entry point
//!
//! The binary does one thing, so there are no subcommands; the flags
//! override the loaded configuration.

use crate::config::Config;
use crate::error::Result;
use crate::server;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Reverse geocoding HTTP service
#[derive(Parser)]
#[command(name = "revgeod")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Host address to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Path to a config file (default: ~/.config/revgeod/config.toml)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

/// Run the CLI
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load and optionally override config
    let mut config = Config::load(cli.config.as_deref())?;

    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    info!(
        "Starting revgeod v{} on {}",
        env!("CARGO_PKG_VERSION"),
        config.server_addr()
    );

    // Run the server
    server::run(config).await
}
