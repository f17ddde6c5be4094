//! Command-line interface for claude-mcp-config
//!
//! Scriptable `path`/`status`/`enable`/`disable` subcommands plus two
//! interactive front-ends (`menu` and `select`) over the same config store.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod info;
mod interactive;
mod toggle;
mod utils;

/// Enable or disable MCP server integrations in the Claude Desktop config
#[derive(Parser)]
#[command(name = "claude-mcp-config")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file to edit instead of the platform default
    #[arg(short, long, global = true, value_name = "FILE", env = "CLAUDE_DESKTOP_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the config file location
    Path,

    /// Show which integrations are enabled
    Status(info::StatusArgs),

    /// Enable one or more integrations
    Enable(toggle::ToggleArgs),

    /// Disable one or more integrations
    Disable(toggle::ToggleArgs),

    /// Interactive menu: toggle integrations one at a time, then save (default)
    Menu,

    /// Interactive checklist of integrations
    Select,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let store = utils::open_store(cli.config);

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Path => info::run_path(&store),
        Commands::Status(args) => info::run_status(&store, args),
        Commands::Enable(args) => toggle::run(&store, args, true),
        Commands::Disable(args) => toggle::run(&store, args, false),
        Commands::Menu => interactive::run_menu(&store),
        Commands::Select => interactive::run_select(&store),
    }
}
