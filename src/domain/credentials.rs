//! Credential and session models.

use url::Url;

use crate::domain::AppError;

/// Access-token credentials for one dashboard server site.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Server base URL, e.g. `https://dashboards.example.com`.
    pub server: Url,
    /// Site content URL slug. Empty selects the default site.
    pub site_name: String,
    /// Personal access token name.
    pub token_name: String,
    /// Personal access token secret.
    pub token_value: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("server", &self.server.as_str())
            .field("site_name", &self.site_name)
            .field("token_name", &self.token_name)
            .field("token_value", &"[REDACTED]")
            .finish()
    }
}

impl Credentials {
    /// Build credentials from raw field values reported by a provider.
    ///
    /// `source_name` is used in error messages to point at the offending source.
    pub fn from_parts(
        server: &str,
        site_name: Option<&str>,
        token_name: Option<&str>,
        token_value: Option<&str>,
        source_name: &str,
    ) -> Result<Self, AppError> {
        let server = Url::parse(server.trim()).map_err(|e| AppError::ParseError {
            what: format!("server URL from {}", source_name),
            details: e.to_string(),
        })?;
        let token_name = require_field(token_name, "token_name", source_name)?;
        let token_value = require_field(token_value, "token_value", source_name)?;

        Ok(Self {
            server,
            site_name: site_name.unwrap_or_default().trim().to_string(),
            token_name,
            token_value,
        })
    }

    /// Server base URL without a trailing slash, as used for viewer links.
    pub fn server_base(&self) -> String {
        self.server.as_str().trim_end_matches('/').to_string()
    }
}

fn require_field(value: Option<&str>, field: &str, source_name: &str) -> Result<String, AppError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(AppError::CredentialFieldMissing {
            field: field.to_string(),
            source_name: source_name.to_string(),
        }),
    }
}

/// Authenticated session for one run.
#[derive(Clone)]
pub struct Session {
    /// Token sent in the auth header of every subsequent call.
    pub token: String,
    /// Site identifier used to scope collection URLs.
    pub site_id: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"[REDACTED]")
            .field("site_id", &self.site_id)
            .finish()
    }
}
