//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::adapters::artifact_filesystem::FilesystemArtifactStore;
use crate::adapters::credentials::{
    ConfigCredentialProvider, EnvCredentialProvider, McpJsonCredentialProvider,
};
use crate::adapters::dashboard_client_http::HttpDashboardClient;
use crate::adapters::page_template::MinijinjaPageRenderer;
use crate::app::AppContext;
use crate::app::commands::{fetch, render};
use crate::app::config::load_config;
use crate::domain::config::paths;
use crate::domain::{CatalogConfig, Credentials};
use crate::ports::{CredentialProvider, resolve_credentials};

pub use crate::app::commands::fetch::{CategoryReport, FetchOptions, FetchOutcome, FetchReport};
pub use crate::app::commands::render::{RenderOptions, RenderOutcome};
pub use crate::domain::AppError;

/// Credential sources in precedence order.
fn credential_providers(root: &Path, config: &CatalogConfig) -> Vec<Box<dyn CredentialProvider>> {
    vec![
        Box::new(EnvCredentialProvider::new()),
        Box::new(ConfigCredentialProvider::new(config.credentials.clone())),
        Box::new(McpJsonCredentialProvider::new(paths::mcp(root))),
    ]
}

/// Resolve credentials for a workspace rooted at `root`.
pub fn resolve_credentials_at(
    root: &Path,
    config: &CatalogConfig,
) -> Result<Credentials, AppError> {
    let (credentials, source) = resolve_credentials(&credential_providers(root, config))?;
    info!(source = source.as_str(), server = %credentials.server, "using credentials");
    Ok(credentials)
}

// =============================================================================
// Fetch Command API
// =============================================================================

/// Fetch the catalog into a snapshot, working in the current directory.
pub fn fetch(config_path: Option<&Path>, options: FetchOptions) -> Result<FetchOutcome, AppError> {
    fetch_at(std::env::current_dir()?, config_path, options)
}

/// Fetch the catalog into a snapshot, resolving relative paths against `root`.
pub fn fetch_at(
    root: impl Into<PathBuf>,
    config_path: Option<&Path>,
    options: FetchOptions,
) -> Result<FetchOutcome, AppError> {
    let store = FilesystemArtifactStore::new(root);
    let config = load_config(&store, config_path)?;
    let credentials = resolve_credentials_at(store.root(), &config)?;

    let client = HttpDashboardClient::new(&credentials.server, &config.api)?;
    let ctx = AppContext::new(client, store, config);
    fetch::execute(&ctx, &credentials, &options)
}

// =============================================================================
// Render Command API
// =============================================================================

/// Render the catalog page from a snapshot, working in the current directory.
pub fn render(
    config_path: Option<&Path>,
    options: RenderOptions,
) -> Result<RenderOutcome, AppError> {
    render_at(std::env::current_dir()?, config_path, options)
}

/// Render the catalog page from a snapshot, resolving relative paths against `root`.
pub fn render_at(
    root: impl Into<PathBuf>,
    config_path: Option<&Path>,
    options: RenderOptions,
) -> Result<RenderOutcome, AppError> {
    let store = FilesystemArtifactStore::new(root);
    let config = load_config(&store, config_path)?;
    let renderer = MinijinjaPageRenderer::new()?;
    render::execute(&store, &renderer, &config, &options)
}
