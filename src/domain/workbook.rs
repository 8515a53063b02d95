//! Workbook models: raw server records and enriched catalog entries.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Catalog bucket a workbook is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Production,
    Playground,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Production, Category::Playground];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Production => "production",
            Category::Playground => "playground",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Production => "Production",
            Category::Playground => "Playground",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `{"name": ...}` reference object used for projects and owners.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamedRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Workbook as listed by the server.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawWorkbook {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub project: Option<NamedRef>,
    #[serde(default)]
    pub owner: Option<NamedRef>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub size: u64,
    /// Absent, a single `{"tag": {...}}` object, or `{"tag": [...]}`.
    #[serde(default)]
    pub tags: Option<Value>,
}

impl RawWorkbook {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed")
    }

    pub fn project_name(&self) -> &str {
        self.project.as_ref().and_then(|p| p.name.as_deref()).unwrap_or("Unknown")
    }

    pub fn owner_name(&self) -> &str {
        self.owner.as_ref().and_then(|o| o.name.as_deref()).unwrap_or("Unknown")
    }
}

/// View (sheet) as returned by the views endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawView {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub content_url: Option<String>,
    /// Usage statistics object; only `totalViewCount` is read.
    #[serde(default)]
    pub usage: Option<Value>,
}

/// Workbook connection to an upstream data source.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConnection {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub server_address: Option<String>,
    #[serde(default)]
    pub datasource_name: Option<String>,
    #[serde(default)]
    pub dbname: Option<String>,
}

/// One page of a workbook listing.
#[derive(Debug, Clone, Default)]
pub struct WorkbookPage {
    pub workbooks: Vec<RawWorkbook>,
    /// `pagination.totalAvailable`; `None` when missing or unparseable.
    pub total_available: Option<u64>,
}

/// Individually addressable view with its usage count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    pub name: String,
    #[serde(default)]
    pub id: String,
    pub url: String,
    #[serde(rename = "viewCount", default, deserialize_with = "lenient_count")]
    pub view_count: u64,
}

/// Upstream data source referenced by a workbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSource {
    pub name: String,
    #[serde(rename = "type", default = "unknown_label")]
    pub kind: String,
    #[serde(default)]
    pub server: String,
}

/// Catalog entry produced by enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedWorkbook {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub project: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub updated: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub views: Vec<View>,
    #[serde(default)]
    pub data_sources: Vec<DataSource>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub sheet_count: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_views: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub size: u64,
    pub category: Category,
    /// URL of the most-viewed view.
    #[serde(default)]
    pub url: Option<String>,
}

impl EnrichedWorkbook {
    /// Workbooks without any visible view are not valid catalog entries.
    pub fn has_views(&self) -> bool {
        !self.views.is_empty()
    }
}

/// Interpret a JSON number or numeric string as a non-negative count.
///
/// Anything else (missing, null, negative, non-numeric) counts as zero.
pub fn count_from_value(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse::<u64>().unwrap_or(0),
        _ => 0,
    }
}

fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(count_from_value(&value))
}

fn unknown_label() -> String {
    "Unknown".to_string()
}
