pub mod fake_dashboard_api;
pub mod memory_artifact_store;
pub mod workbook_builder;

#[allow(unused_imports)]
pub use fake_dashboard_api::{ApiCall, FakeDashboardApi};
#[allow(unused_imports)]
pub use memory_artifact_store::MemoryArtifactStore;
#[allow(unused_imports)]
pub use workbook_builder::{WorkbookBuilder, connection, raw_view, test_credentials};
