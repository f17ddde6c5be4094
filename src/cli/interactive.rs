//! Interactive front-ends: a toggle menu and a checkbox list.

use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, MultiSelect, Select};
use std::io::IsTerminal;

use super::utils::{print_restart_notice, save_state, status_label};
use claude_mcp_config::{current_state, ConfigStore, DesiredState, Integration};

fn ensure_terminal() -> Result<()> {
    if !(std::io::stdin().is_terminal() && std::io::stdout().is_terminal()) {
        anyhow::bail!(
            "Interactive mode needs a terminal; use `status`, `enable` or `disable` instead"
        );
    }
    Ok(())
}

/// Current state of every managed integration, or all disabled if the file
/// cannot be loaded.
fn initial_state(store: &ConfigStore) -> DesiredState {
    match store.load() {
        Ok(doc) => current_state(&doc),
        Err(e) => {
            println!("Warning: Could not load current config: {e}");
            Integration::ALL.into_iter().map(|i| (i, false)).collect()
        }
    }
}

fn print_header(store: &ConfigStore) {
    println!("Claude Desktop MCP Server Configuration");
    println!("=======================================");
    println!("Configuration file: {}", store.path().display());
    println!();
}

pub fn run_menu(store: &ConfigStore) -> Result<()> {
    ensure_terminal()?;
    print_header(store);

    let mut state = initial_state(store);
    let theme = ColorfulTheme::default();

    loop {
        let selection = Select::with_theme(&theme)
            .with_prompt("Select option")
            .default(0)
            .items(&menu_items(&state))
            .interact()
            .context("reading menu selection")?;

        match menu_action(selection) {
            MenuAction::Toggle(integration) => {
                let enabled = state.toggle(integration);
                println!("{} is now {}", integration.label(), status_label(enabled));
            }
            MenuAction::Save => match save_state(store, &state) {
                Ok(()) => {
                    println!("Configuration saved.");
                    print_restart_notice();
                }
                Err(e) => println!("Error: {e:#}"),
            },
            MenuAction::Quit => {
                println!("Goodbye!");
                return Ok(());
            }
        }
        println!();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Toggle(Integration),
    Save,
    Quit,
}

/// One toggle line per integration, then save and quit.
fn menu_items(state: &DesiredState) -> Vec<String> {
    let mut items: Vec<String> = Integration::ALL
        .iter()
        .map(|i| format!("Toggle {} [{}]", i.label(), status_label(state.is_enabled(*i))))
        .collect();
    items.push("Save configuration".to_string());
    items.push("Quit".to_string());
    items
}

fn menu_action(selection: usize) -> MenuAction {
    match Integration::ALL.get(selection) {
        Some(integration) => MenuAction::Toggle(*integration),
        None if selection == Integration::ALL.len() => MenuAction::Save,
        None => MenuAction::Quit,
    }
}

/// Every integration, enabled exactly when its index was checked.
fn desired_from_selection(chosen: &[usize]) -> DesiredState {
    Integration::ALL
        .iter()
        .enumerate()
        .map(|(idx, integration)| (*integration, chosen.contains(&idx)))
        .collect()
}

pub fn run_select(store: &ConfigStore) -> Result<()> {
    ensure_terminal()?;
    print_header(store);

    let state = initial_state(store);
    let labels: Vec<&str> = Integration::ALL.iter().map(|i| i.label()).collect();
    let defaults: Vec<bool> = Integration::ALL.iter().map(|i| state.is_enabled(*i)).collect();

    let chosen = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Enabled MCP servers (space to toggle, enter to save)")
        .items(&labels)
        .defaults(&defaults)
        .interact()
        .context("reading selection")?;

    let desired = desired_from_selection(&chosen);
    save_state(store, &desired)?;

    for (integration, enabled) in desired.iter() {
        println!("{}: {}", integration.label(), status_label(enabled));
    }
    print_restart_notice();
    Ok(())
}
