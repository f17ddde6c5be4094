//! Claude Desktop configuration store
//!
//! Locates `claude_desktop_config.json`, loads it, merges enable/disable
//! directives into it and writes it back.

pub mod merge;
pub mod paths;
pub mod store;

pub use merge::{apply, current_state};
pub use paths::{default_config_path, resolve_path, PathEnv, Platform};
pub use store::{ConfigStore, StoreError};
