//! `path` and `status` command implementations

use anyhow::{Context, Result};
use clap::Args;
use std::collections::BTreeMap;

use super::utils::status_label;
use claude_mcp_config::{current_state, ConfigStore, Integration};

#[derive(Args)]
pub struct StatusArgs {
    /// Print a JSON object of integration name to enabled flag
    #[arg(long)]
    pub json: bool,
}

pub fn run_path(store: &ConfigStore) -> Result<()> {
    println!("{}", store.path().display());
    Ok(())
}

pub fn run_status(store: &ConfigStore, args: StatusArgs) -> Result<()> {
    let doc = store.load().context("loading config")?;
    let state = current_state(&doc);

    if args.json {
        let flags: BTreeMap<&str, bool> =
            state.iter().map(|(integration, enabled)| (integration.name(), enabled)).collect();
        println!("{}", serde_json::to_string_pretty(&flags)?);
        return Ok(());
    }

    println!("Configuration file: {}", store.path().display());
    for integration in Integration::ALL {
        println!(
            "  {:<8} {}: {}",
            integration.name(),
            integration.label(),
            status_label(state.is_enabled(integration))
        );
    }

    let others: Vec<&str> = doc
        .integrations
        .keys()
        .map(String::as_str)
        .filter(|name| !Integration::ALL.iter().any(|i| i.name() == *name))
        .collect();
    if !others.is_empty() {
        println!("Other MCP servers (unmanaged): {}", others.join(", "));
    }

    Ok(())
}
