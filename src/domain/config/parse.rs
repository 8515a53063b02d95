//! Pure parse/validate for catalog configuration (`dashcat.toml`).

use crate::domain::{AppError, CatalogConfig};

/// Parse and validate catalog configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<CatalogConfig, AppError> {
    let config: CatalogConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    #[test]
    fn catalog_config_parses_from_toml() {
        let toml = r#"
[api]
api_version = "3.21"
timeout_secs = 10
page_size = 50
max_pages = 20

[credentials]
server = "https://dash.example.com"
site_name = "ops"
token_name = "ci"
token_value = "secret"

[catalog.production]
projects = ["Finance"]

[catalog.playground]
projects = ["Sandbox"]

[[catalog.playground.owner_rules]]
owner = "sam.k"
name_contains = "finance"

[output]
snapshot = "out/catalog.json"
page = "out/index.html"

[page]
title = "Finance Dashboards"
back_link = ""
"#;
        let config = parse_config_content(toml).unwrap();

        assert_eq!(config.api.api_version, "3.21");
        assert_eq!(config.api.page_size, 50);
        assert_eq!(config.api.max_pages, 20);
        assert_eq!(config.credentials.unwrap().site_name.as_deref(), Some("ops"));
        assert_eq!(config.catalog.get(Category::Production).projects, vec!["Finance"]);
        let playground = config.catalog.get(Category::Playground);
        assert_eq!(playground.owner_rules[0].owner, "sam.k");
        assert_eq!(config.output.snapshot.to_str(), Some("out/catalog.json"));
        assert_eq!(config.page.title, "Finance Dashboards");
        assert!(config.page.back_link.is_empty());
    }

    #[test]
    fn catalog_config_uses_defaults_for_missing_sections() {
        let config = parse_config_content("").unwrap();

        assert_eq!(config.api.api_version, "3.19");
        assert_eq!(config.api.page_size, 100);
        assert_eq!(config.api.timeout_secs, 30);
        assert!(config.credentials.is_none());
        assert_eq!(config.catalog.playground.projects, vec!["Playground", "Mor", "Guy", "Yahel"]);
        assert_eq!(config.output.snapshot.to_str(), Some("all_dashboards_data_enhanced.json"));
        assert_eq!(config.page.back_link, "knowledge-base.html");
    }

    #[test]
    fn catalog_config_rejects_unknown_keys() {
        let toml = r#"
[api]
retries = 3
"#;
        assert!(matches!(parse_config_content(toml), Err(AppError::TomlParseError(_))));
    }

    #[test]
    fn catalog_config_rejects_zero_page_size() {
        let toml = r#"
[api]
page_size = 0
"#;
        let err = parse_config_content(toml).unwrap_err();
        assert!(err.to_string().contains("page_size"));
    }

    #[test]
    fn catalog_config_rejects_blank_project_names() {
        let toml = r#"
[catalog.production]
projects = ["ROC", " "]
"#;
        let err = parse_config_content(toml).unwrap_err();
        assert!(err.to_string().contains("catalog.production.projects"));
    }
}
