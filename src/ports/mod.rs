mod artifact_store;
mod credential_provider;
mod dashboard_api;
mod page_renderer;

pub use artifact_store::ArtifactStore;
pub use credential_provider::{CredentialProvider, resolve_credentials};
pub use dashboard_api::{DashboardApi, WorkbookPageRequest};
pub use page_renderer::PageRenderer;
