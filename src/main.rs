//! claude-mcp-config: toggle MCP server integrations for Claude Desktop
//!
//! Reads `claude_desktop_config.json`, adds or removes the managed server
//! entries, and writes the file back.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
