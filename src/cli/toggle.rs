//! `enable` and `disable` command implementations

use anyhow::Result;
use clap::Args;

use super::utils::{print_restart_notice, save_state, status_label};
use claude_mcp_config::{ConfigStore, DesiredState, Integration};

#[derive(Args)]
pub struct ToggleArgs {
    /// Integrations to change (rpls, queenit)
    #[arg(value_name = "NAME", required = true, num_args = 1..)]
    pub names: Vec<Integration>,
}

pub fn run(store: &ConfigStore, args: ToggleArgs, enabled: bool) -> Result<()> {
    let desired: DesiredState = args.names.into_iter().map(|i| (i, enabled)).collect();
    save_state(store, &desired)?;

    for (integration, enabled) in desired.iter() {
        println!("{} is now {}", integration.label(), status_label(enabled));
    }
    print_restart_notice();
    Ok(())
}
