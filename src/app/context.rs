use crate::domain::CatalogConfig;
use crate::ports::{ArtifactStore, DashboardApi};

/// Application context holding dependencies for command execution.
pub struct AppContext<A: DashboardApi, S: ArtifactStore> {
    api: A,
    store: S,
    config: CatalogConfig,
}

impl<A: DashboardApi, S: ArtifactStore> AppContext<A, S> {
    /// Create a new application context.
    pub fn new(api: A, store: S, config: CatalogConfig) -> Self {
        Self { api, store, config }
    }

    /// Get a reference to the dashboard API client.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Get a reference to the artifact store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the loaded configuration.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }
}
