//! Merging enable/disable directives into a config document
//!
//! Only keys of managed integrations are ever inserted or removed; every other
//! entry passes through unchanged.

use crate::domain::{ConfigDocument, DesiredState, Integration};

/// Apply `desired` to `doc`.
///
/// Enabled integrations get their canonical entry (overwriting whatever was
/// there); disabled ones are removed if present. Applying the same state twice
/// yields the same document.
pub fn apply(mut doc: ConfigDocument, desired: &DesiredState) -> ConfigDocument {
    for (integration, enabled) in desired.iter() {
        let key = integration.name();
        if enabled {
            tracing::debug!("Enabling MCP server '{}'", key);
            doc.integrations.insert(key.to_string(), integration.canonical_entry().into());
        } else if doc.integrations.remove(key).is_some() {
            tracing::debug!("Disabled MCP server '{}'", key);
        }
    }
    doc
}

/// Enabled flags for every managed integration, by key presence.
pub fn current_state(doc: &ConfigDocument) -> DesiredState {
    Integration::ALL
        .into_iter()
        .map(|integration| (integration, doc.integrations.contains_key(integration.name())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use similar_asserts::assert_eq;

    fn doc_from(value: Value) -> ConfigDocument {
        serde_json::from_value(value).expect("valid document")
    }

    #[test]
    fn enabling_on_empty_document_inserts_canonical_entry() {
        let desired = DesiredState::new()
            .with(Integration::Rpls, true)
            .with(Integration::Queenit, false);

        let doc = apply(ConfigDocument::default(), &desired);
        let state = current_state(&doc);

        assert!(state.is_enabled(Integration::Rpls));
        assert!(!state.is_enabled(Integration::Queenit));
        let rpls = Value::from(Integration::Rpls.canonical_entry());
        assert_eq!(doc.integrations.get("rpls"), Some(&rpls));
        assert_eq!(doc.integrations.len(), 1);
    }

    #[test]
    fn apply_is_idempotent() {
        let base = doc_from(json!({
            "mcpServers": {
                "rpls": {"command": "old", "args": ["--stale"]},
                "other": {"command": "x", "args": []}
            }
        }));
        let desired = DesiredState::new()
            .with(Integration::Rpls, true)
            .with(Integration::Queenit, true);

        let once = apply(base, &desired);
        let twice = apply(once.clone(), &desired);
        assert_eq!(once, twice);
    }

    #[test]
    fn enabling_keeps_unrelated_entries() {
        let base = doc_from(json!({"mcpServers": {"other": {"command": "x", "args": []}}}));

        let doc = apply(base, &DesiredState::new().with(Integration::Rpls, true));

        assert_eq!(
            serde_json::to_value(&doc).expect("serialize"),
            json!({
                "mcpServers": {
                    "other": {"command": "x", "args": []},
                    "rpls": {
                        "command": "npx",
                        "args": ["mcp-remote", "https://agentgateway.damoa.rapportlabs.dance/mcp"]
                    }
                }
            })
        );
    }

    #[test]
    fn disabling_removes_only_the_managed_key() {
        let base = doc_from(json!({
            "mcpServers": {
                "rpls": {"command": "npx", "args": ["mcp-remote", "https://example.invalid"]},
                "foo": {"command": "foo-server", "args": ["--port", "1"], "env": {"A": "1"}}
            },
            "globalShortcut": "Alt+Space"
        }));
        let foo_before = base.integrations["foo"].clone();

        let doc = apply(base, &DesiredState::new().with(Integration::Rpls, false));

        assert!(!doc.integrations.contains_key("rpls"));
        assert_eq!(doc.integrations.get("foo"), Some(&foo_before));
        assert_eq!(doc.extra.get("globalShortcut"), Some(&json!("Alt+Space")));
    }

    #[test]
    fn disabling_absent_integration_is_a_noop() {
        let base = doc_from(json!({"mcpServers": {"foo": {"command": "f", "args": []}}}));
        let doc = apply(base.clone(), &DesiredState::new().with(Integration::Queenit, false));
        assert_eq!(doc, base);
    }

    #[test]
    fn partial_state_leaves_other_managed_entries_alone() {
        let mut base = ConfigDocument::default();
        let custom = json!({"command": "custom-queenit"});
        base.integrations.insert("queenit".to_string(), custom.clone());

        let doc = apply(base, &DesiredState::new().with(Integration::Rpls, true));

        assert_eq!(doc.integrations.get("queenit"), Some(&custom));
    }

    #[test]
    fn current_state_reports_every_managed_integration() {
        let base = doc_from(json!({"mcpServers": {"queenit": {"command": "q", "args": []}}}));
        let state = current_state(&base);

        assert_eq!(state.get(Integration::Rpls), Some(false));
        assert_eq!(state.get(Integration::Queenit), Some(true));
    }
}
