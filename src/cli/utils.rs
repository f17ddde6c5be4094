//! Shared CLI utilities.

use anyhow::{Context, Result};
use console::style;
use std::path::PathBuf;

use claude_mcp_config::{apply, ConfigStore, DesiredState};

/// Store for `--config` if given, else the platform default location.
pub fn open_store(config: Option<PathBuf>) -> ConfigStore {
    match config {
        Some(path) => ConfigStore::new(path),
        None => ConfigStore::discover(),
    }
}

pub fn status_label(enabled: bool) -> String {
    if enabled {
        style("ENABLED").green().bold().to_string()
    } else {
        style("DISABLED").red().to_string()
    }
}

/// Load the current document, merge `desired` into it and write it back.
pub fn save_state(store: &ConfigStore, desired: &DesiredState) -> Result<()> {
    let doc = store.load().context("loading config")?;
    let doc = apply(doc, desired);
    store.save(&doc).context("saving config")?;
    Ok(())
}

pub fn print_restart_notice() {
    println!("Please restart Claude Desktop for changes to take effect.");
}
