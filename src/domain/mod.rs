pub mod config;
pub mod credentials;
pub mod description;
pub mod enrichment;
pub mod error;
pub mod page;
pub mod snapshot;
pub mod workbook;

pub use config::{
    ApiConfig, CatalogConfig, CategoryConfig, CredentialsSection, OutputConfig, OwnerRule,
    PageConfig,
};
pub use credentials::{Credentials, Session};
pub use error::AppError;
pub use page::PageModel;
pub use snapshot::Snapshot;
pub use workbook::{
    Category, DataSource, EnrichedWorkbook, RawConnection, RawView, RawWorkbook, View,
    WorkbookPage,
};
