use std::io;

use thiserror::Error;

/// Library-wide error type for dashcat operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    ConfigFileMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No credential provider produced a credential set.
    #[error(
        "No credentials found. Set TABLEAU_SERVER and friends, add a [credentials] section to the config file, or create mcp.json"
    )]
    CredentialsNotFound,

    /// A credential source was selected but a required field is missing.
    #[error("Credential field '{field}' missing from {source_name}")]
    CredentialFieldMissing { field: String, source_name: String },

    /// Sign-in was rejected or could not be completed.
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String, status: Option<u16> },

    /// Dashboard-server API request failed.
    #[error("{message}")]
    ApiError { message: String, status: Option<u16> },

    /// Pagination did not terminate within the configured ceiling.
    #[error("Pagination for project '{project}' did not finish within {max_pages} pages")]
    PaginationLimit { project: String, max_pages: u32 },

    /// Snapshot file not found at path.
    #[error("Snapshot not found: {0}")]
    SnapshotMissing(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Page template failed to load or render.
    #[error("Template error: {0}")]
    Template(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// HTTP status attached to an API failure, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::AuthenticationFailed { status, .. } | AppError::ApiError { status, .. } => {
                *status
            }
            _ => None,
        }
    }
}
