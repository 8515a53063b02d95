pub mod config_file;
pub mod env;
pub mod mcp_json;

pub use self::config_file::ConfigCredentialProvider;
pub use self::env::EnvCredentialProvider;
pub use self::mcp_json::McpJsonCredentialProvider;
