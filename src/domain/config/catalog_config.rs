//! Catalog configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, Category};

/// Configuration loaded from `dashcat.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// REST API configuration.
    #[serde(default)]
    pub api: ApiConfig,
    /// Optional access-token credentials.
    #[serde(default)]
    pub credentials: Option<CredentialsSection>,
    /// Project lists and owner rules per category.
    #[serde(default)]
    pub catalog: CategoriesConfig,
    /// Output file locations.
    #[serde(default)]
    pub output: OutputConfig,
    /// Rendered page settings.
    #[serde(default)]
    pub page: PageConfig,
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.api.validate()?;
        self.catalog.validate()?;
        Ok(())
    }
}

/// REST API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// REST API version segment, e.g. `3.19`.
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Workbooks requested per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Ceiling on page requests per project.
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_version: default_api_version(),
            timeout_secs: default_timeout(),
            page_size: default_page_size(),
            max_pages: default_max_pages(),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.api_version.trim().is_empty() {
            return Err(AppError::config_error("api_version must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        if self.page_size == 0 {
            return Err(AppError::config_error("page_size must be greater than 0"));
        }
        if self.max_pages == 0 {
            return Err(AppError::config_error("max_pages must be greater than 0"));
        }
        Ok(())
    }
}

fn default_api_version() -> String {
    "3.19".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_page_size() -> u32 {
    100
}

fn default_max_pages() -> u32 {
    1000
}

/// `[credentials]` section. Fields are validated when credentials are resolved.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CredentialsSection {
    #[serde(default)]
    pub server: Option<String>,
    #[serde(default)]
    pub site_name: Option<String>,
    #[serde(default)]
    pub token_name: Option<String>,
    #[serde(default)]
    pub token_value: Option<String>,
}

impl std::fmt::Debug for CredentialsSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsSection")
            .field("server", &self.server)
            .field("site_name", &self.site_name)
            .field("token_name", &self.token_name)
            .field("token_value", &self.token_value.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Per-category project lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoriesConfig {
    #[serde(default = "default_production")]
    pub production: CategoryConfig,
    #[serde(default = "default_playground")]
    pub playground: CategoryConfig,
}

impl Default for CategoriesConfig {
    fn default() -> Self {
        Self { production: default_production(), playground: default_playground() }
    }
}

impl CategoriesConfig {
    pub fn get(&self, category: Category) -> &CategoryConfig {
        match category {
            Category::Production => &self.production,
            Category::Playground => &self.playground,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        for category in Category::ALL {
            let config = self.get(category);
            if config.projects.iter().any(|p| p.trim().is_empty()) {
                return Err(AppError::config_error(format!(
                    "catalog.{}.projects must not contain empty names",
                    category
                )));
            }
            if config.owner_rules.iter().any(|r| r.owner.trim().is_empty()) {
                return Err(AppError::config_error(format!(
                    "catalog.{}.owner_rules entries need an owner",
                    category
                )));
            }
        }
        Ok(())
    }
}

fn default_production() -> CategoryConfig {
    CategoryConfig {
        projects: vec!["ROC Protocol".into(), "Triage".into(), "ROC".into()],
        owner_rules: Vec::new(),
    }
}

fn default_playground() -> CategoryConfig {
    CategoryConfig {
        projects: vec!["Playground".into(), "Mor".into(), "Guy".into(), "Yahel".into()],
        owner_rules: vec![OwnerRule { owner: "guy.d".into(), name_contains: "roc".into() }],
    }
}

/// Projects fetched for one category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryConfig {
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub owner_rules: Vec<OwnerRule>,
}

impl CategoryConfig {
    /// First owner rule that excludes this workbook, if any.
    pub fn excluding_rule(&self, owner: &str, name: &str) -> Option<&OwnerRule> {
        self.owner_rules.iter().find(|rule| rule.excludes(owner, name))
    }
}

/// Keep `owner`'s workbooks only when their name contains `name_contains`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OwnerRule {
    pub owner: String,
    /// Case-insensitive substring.
    pub name_contains: String,
}

impl OwnerRule {
    pub fn excludes(&self, owner: &str, name: &str) -> bool {
        owner == self.owner && !name.to_lowercase().contains(&self.name_contains.to_lowercase())
    }
}

/// Output file locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_snapshot_path")]
    pub snapshot: PathBuf,
    #[serde(default = "default_page_path")]
    pub page: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { snapshot: default_snapshot_path(), page: default_page_path() }
    }
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("all_dashboards_data_enhanced.json")
}

fn default_page_path() -> PathBuf {
    PathBuf::from("roc_dashboards_enhanced.html")
}

/// Rendered page settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Fixed "back" link target. Empty disables it.
    #[serde(default = "default_back_link")]
    pub back_link: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self { title: default_title(), back_link: default_back_link() }
    }
}

fn default_title() -> String {
    "ROC Tableau Dashboards".to_string()
}

fn default_back_link() -> String {
    "knowledge-base.html".to_string()
}
