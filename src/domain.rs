//! Core domain types
//!
//! Defines the configuration document read by Claude Desktop, the closed set
//! of integrations this tool manages, and the enable/disable directives applied
//! to the document.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::str::FromStr;

/// A server definition the tool writes under `mcpServers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrationEntry {
    /// Executable Claude Desktop launches.
    pub command: String,

    /// Launch arguments, in order.
    pub args: Vec<String>,
}

impl IntegrationEntry {
    pub fn new(command: impl Into<String>, args: &[&str]) -> Self {
        Self { command: command.into(), args: args.iter().map(|a| a.to_string()).collect() }
    }
}

impl From<IntegrationEntry> for Value {
    fn from(entry: IntegrationEntry) -> Self {
        json!({ "command": entry.command, "args": entry.args })
    }
}

/// The full `claude_desktop_config.json` document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    /// Registered servers keyed by name, kept as raw JSON so entries this tool
    /// does not manage round-trip unchanged. `null` in the file loads as empty.
    #[serde(rename = "mcpServers", default, deserialize_with = "null_as_empty")]
    pub integrations: BTreeMap<String, Value>,

    /// Top-level keys other than `mcpServers`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

/// An integration this tool knows how to add.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Integration {
    Rpls,
    Queenit,
}

impl Integration {
    /// Every managed integration, in display order.
    pub const ALL: [Integration; 2] = [Integration::Rpls, Integration::Queenit];

    /// Key used under `mcpServers`.
    pub fn name(self) -> &'static str {
        match self {
            Integration::Rpls => "rpls",
            Integration::Queenit => "queenit",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Integration::Rpls => "RPLS (Rapport Labs Agent Gateway)",
            Integration::Queenit => "Queenit (Rapport Labs MCP)",
        }
    }

    /// The fixed entry written whenever this integration is enabled.
    pub fn canonical_entry(self) -> IntegrationEntry {
        match self {
            Integration::Rpls => IntegrationEntry::new(
                "npx",
                &["mcp-remote", "https://agentgateway.damoa.rapportlabs.dance/mcp"],
            ),
            Integration::Queenit => {
                IntegrationEntry::new("npx", &["mcp-remote", "https://mcp.rapportlabs.kr/mcp"])
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown integration '{0}' (expected one of: rpls, queenit)")]
pub struct UnknownIntegration(pub String);

impl FromStr for Integration {
    type Err = UnknownIntegration;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Integration::ALL
            .into_iter()
            .find(|i| i.name() == normalized)
            .ok_or_else(|| UnknownIntegration(s.to_string()))
    }
}

/// Requested enabled/disabled flags. Integrations missing from the map are
/// left alone when the state is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesiredState {
    flags: BTreeMap<Integration, bool>,
}

impl DesiredState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, integration: Integration, enabled: bool) -> Self {
        self.set(integration, enabled);
        self
    }

    pub fn set(&mut self, integration: Integration, enabled: bool) {
        self.flags.insert(integration, enabled);
    }

    /// Flip one flag. An unset flag counts as disabled. Returns the new value.
    pub fn toggle(&mut self, integration: Integration) -> bool {
        let flag = self.flags.entry(integration).or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// `Some(enabled)` when the state names this integration.
    pub fn get(&self, integration: Integration) -> Option<bool> {
        self.flags.get(&integration).copied()
    }

    pub fn is_enabled(&self, integration: Integration) -> bool {
        self.get(integration).unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Integration, bool)> + '_ {
        self.flags.iter().map(|(i, enabled)| (*i, *enabled))
    }
}

impl FromIterator<(Integration, bool)> for DesiredState {
    fn from_iter<T: IntoIterator<Item = (Integration, bool)>>(iter: T) -> Self {
        Self { flags: iter.into_iter().collect() }
    }
}
