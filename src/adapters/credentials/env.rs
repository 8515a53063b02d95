//! Credentials from `TABLEAU_*` environment variables.

use crate::domain::{AppError, Credentials};
use crate::ports::CredentialProvider;

pub const SERVER_VAR: &str = "TABLEAU_SERVER";
pub const SITE_NAME_VAR: &str = "TABLEAU_SITE_NAME";
pub const TOKEN_NAME_VAR: &str = "TABLEAU_PAT_NAME";
pub const TOKEN_VALUE_VAR: &str = "TABLEAU_PAT_VALUE";

type Lookup = Box<dyn Fn(&str) -> Option<String>>;

/// Reads credentials from the process environment.
///
/// The provider is selected only when `TABLEAU_SERVER` is set and non-empty.
pub struct EnvCredentialProvider {
    lookup: Lookup,
}

impl EnvCredentialProvider {
    pub fn new() -> Self {
        Self::with_lookup(|key| std::env::var(key).ok())
    }

    /// Build a provider over an arbitrary variable lookup.
    pub fn with_lookup(lookup: impl Fn(&str) -> Option<String> + 'static) -> Self {
        Self { lookup: Box::new(lookup) }
    }
}

impl Default for EnvCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialProvider for EnvCredentialProvider {
    fn name(&self) -> &str {
        "environment"
    }

    fn load(&self) -> Result<Option<Credentials>, AppError> {
        let Some(server) = (self.lookup)(SERVER_VAR).filter(|s| !s.trim().is_empty()) else {
            return Ok(None);
        };

        let site_name = (self.lookup)(SITE_NAME_VAR);
        let token_name = (self.lookup)(TOKEN_NAME_VAR);
        let token_value = (self.lookup)(TOKEN_VALUE_VAR);

        Credentials::from_parts(
            &server,
            site_name.as_deref(),
            token_name.as_deref(),
            token_value.as_deref(),
            self.name(),
        )
        .map(Some)
    }
}
