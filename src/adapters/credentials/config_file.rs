//! Credentials from the `[credentials]` section of `dashcat.toml`.

use crate::domain::{AppError, Credentials, CredentialsSection};
use crate::ports::CredentialProvider;

pub struct ConfigCredentialProvider {
    section: Option<CredentialsSection>,
}

impl ConfigCredentialProvider {
    pub fn new(section: Option<CredentialsSection>) -> Self {
        Self { section }
    }
}

impl CredentialProvider for ConfigCredentialProvider {
    fn name(&self) -> &str {
        "config file"
    }

    fn load(&self) -> Result<Option<Credentials>, AppError> {
        let Some(section) = &self.section else {
            return Ok(None);
        };
        let Some(server) = section.server.as_deref().filter(|s| !s.trim().is_empty()) else {
            return Ok(None);
        };

        Credentials::from_parts(
            server,
            section.site_name.as_deref(),
            section.token_name.as_deref(),
            section.token_value.as_deref(),
            self.name(),
        )
        .map(Some)
    }
}
