//! claude-mcp-config: manage MCP server entries in the Claude Desktop config
//!
//! The library holds the shared core used by every front-end: the document
//! model, path resolution, and the load/apply/save cycle.

pub mod config;
pub mod domain;

pub use config::{apply, current_state, ConfigStore, StoreError};
pub use domain::{ConfigDocument, DesiredState, Integration, IntegrationEntry};
