pub mod catalog_config;
pub mod parse;
pub mod paths;

pub use catalog_config::{
    ApiConfig, CatalogConfig, CategoriesConfig, CategoryConfig, CredentialsSection, OutputConfig,
    OwnerRule, PageConfig,
};
pub use parse::parse_config_content;
