//! vrclife Web Server Binary
//!
//! This binary starts the vrclife web server that serves the catalog API
//! and the embedded portal shell.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (port 3001, configured data directory)
//! vrclife-web
//!
//! # Specify port and data directory
//! vrclife-web --port 8080 --data-dir ~/portal-data
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vrclife::config::Config;
use vrclife::web;

/// vrclife Web Server - REST API over the catalog engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3001")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Directory containing the catalog documents.
    /// Defaults to the configured data directory:
    /// - Linux: ~/.config/vrclife/data/
    /// - macOS: ~/Library/Application Support/vrclife/data/
    /// - Windows: %APPDATA%\vrclife\data\
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Gets the default data directory, creating it if it doesn't exist.
fn get_default_data_dir(config: &Config) -> anyhow::Result<PathBuf> {
    let data_dir = config.data_dir()?;

    if !data_dir.exists() {
        std::fs::create_dir_all(&data_dir).context(format!(
            "Failed to create data directory: {}",
            data_dir.display()
        ))?;
    }

    Ok(data_dir)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load or create configuration
    let config = Config::load().unwrap_or_default();

    // Determine the data directory:
    // 1. Use --data-dir if provided
    // 2. Otherwise, use the configured directory (same as the TUI)
    let data_dir = match args.data_dir {
        Some(path) => path,
        None => get_default_data_dir(&config)?,
    };

    info!("Data directory: {}", data_dir.display());

    // Build socket address
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;

    // Start the server
    web::run_server(data_dir, addr, &config).await
}
