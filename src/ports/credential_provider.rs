//! Credential provider port.

use crate::domain::{AppError, Credentials};

/// A source of access-token credentials.
pub trait CredentialProvider {
    /// Short name used in logs and error messages.
    fn name(&self) -> &str;

    /// `Ok(None)` when this source is not configured; errors when it is
    /// configured but incomplete or unreadable.
    fn load(&self) -> Result<Option<Credentials>, AppError>;
}

/// Try providers in order and return the first credential set found.
pub fn resolve_credentials(
    providers: &[Box<dyn CredentialProvider>],
) -> Result<(Credentials, String), AppError> {
    for provider in providers {
        if let Some(credentials) = provider.load()? {
            return Ok((credentials, provider.name().to_string()));
        }
    }
    Err(AppError::CredentialsNotFound)
}
