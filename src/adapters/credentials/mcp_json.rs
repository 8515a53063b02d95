//! Credentials from a legacy `mcp.json` file.
//!
//! Two layouts are accepted: `mcpServers.tableau.env.{SERVER,...}` and
//! `tableau.{SERVER,...}`.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde_json::Value;

use crate::domain::{AppError, Credentials};
use crate::ports::CredentialProvider;

pub struct McpJsonCredentialProvider {
    path: PathBuf,
}

impl McpJsonCredentialProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

fn tableau_section(root: &Value) -> Option<&Value> {
    root.pointer("/mcpServers/tableau/env")
        .or_else(|| root.get("tableau"))
        .filter(|v| v.is_object())
}

fn field<'a>(section: &'a Value, key: &str) -> Option<&'a str> {
    section.get(key).and_then(Value::as_str)
}

impl CredentialProvider for McpJsonCredentialProvider {
    fn name(&self) -> &str {
        "mcp.json"
    }

    fn load(&self) -> Result<Option<Credentials>, AppError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let root: Value = serde_json::from_str(&content).map_err(|e| AppError::ParseError {
            what: self.path.display().to_string(),
            details: e.to_string(),
        })?;

        let Some(section) = tableau_section(&root) else {
            return Ok(None);
        };
        let Some(server) = field(section, "SERVER").filter(|s| !s.trim().is_empty()) else {
            return Ok(None);
        };

        Credentials::from_parts(
            server,
            field(section, "SITE_NAME"),
            field(section, "PAT_NAME"),
            field(section, "PAT_VALUE"),
            self.name(),
        )
        .map(Some)
    }
}
