use std::path::{Path, PathBuf};

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "dashcat.toml";

/// Legacy credentials file.
pub const MCP_FILE: &str = "mcp.json";

/// `<root>/mcp.json`
pub fn mcp(root: &Path) -> PathBuf {
    root.join(MCP_FILE)
}
