//! VRC-LIFE - Terminal catalog browser for VRChat content
//!
//! This application browses the portal's pre-generated catalog documents
//! (fashion items, worlds, knowledge articles, trend posts) as filterable
//! card grids, and provides headless subcommands for the publish pipeline.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use vrclife::cli::{FetchArgs, FilterArgs, InspectArgs, TagArgs};
use vrclife::config::Config;
use vrclife::constants::{APP_BINARY_NAME, APP_NAME};

/// VRC-LIFE - Terminal catalog browser for VRChat content
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the catalog JSON documents
    #[arg(value_name = "DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Headless subcommands
#[derive(Debug, Subcommand)]
enum Commands {
    /// Filter a catalog document and print the matches
    Filter(FilterArgs),
    /// Summarize the catalog documents in a data directory
    Inspect(InspectArgs),
    /// Download catalog documents into the data directory
    Fetch(FetchArgs),
    /// Clean and auto-tag a raw item document
    Tag(TagArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        // Headless mode: load config quietly and run the command
        let config = Config::load().unwrap_or_default();

        let result = match command {
            Commands::Filter(args) => args.execute(),
            Commands::Inspect(args) => args.execute(),
            Commands::Fetch(args) => args.execute(&config),
            Commands::Tag(args) => args.execute(&config),
        };

        if let Err(err) = result {
            eprintln!("Error: {err}");
            std::process::exit(err.exit_code());
        }
        return Ok(());
    }

    println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
    println!("Terminal catalog browser for VRChat content");
    println!();

    // Load config, falling back to defaults when missing or unreadable
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {e}");
            eprintln!("Continuing with defaults.");
            eprintln!();
            Config::default()
        }
    };

    // Resolve the data directory: positional argument wins over config
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => config.data_dir()?,
    };

    if !data_dir.is_dir() {
        eprintln!("Error: Data directory not found: {}", data_dir.display());
        eprintln!();
        eprintln!("Point {} at a directory containing the catalog documents", APP_BINARY_NAME);
        eprintln!("(items.json, worlds.json, knowledge.json, trends.json).");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} ./docs/data", APP_BINARY_NAME);
        eprintln!("  {} fetch --base-url https://example.com/data", APP_BINARY_NAME);
        eprintln!();
        eprintln!("For more options, run:");
        eprintln!("  {} --help", APP_BINARY_NAME);
        std::process::exit(1);
    }

    run_browser(data_dir, config)
}

#[cfg(feature = "ratatui")]
fn run_browser(data_dir: PathBuf, config: Config) -> Result<()> {
    use vrclife::catalog::CatalogSet;
    use vrclife::tui;

    let catalogs = CatalogSet::load_dir(&data_dir);

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;
    let mut app_state = tui::AppState::new(catalogs, data_dir, config);

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    // Check for errors
    result?;

    Ok(())
}

#[cfg(not(feature = "ratatui"))]
fn run_browser(_data_dir: PathBuf, _config: Config) -> Result<()> {
    anyhow::bail!("This build does not include the terminal UI (ratatui feature disabled)")
}
