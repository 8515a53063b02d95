//! Presentation model for the rendered catalog page.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::domain::{Category, DataSource, EnrichedWorkbook, PageConfig, Snapshot, View};

pub const EMPTY_DESCRIPTION: &str = "No description available";

/// Everything the page template needs, already formatted.
#[derive(Debug, Clone, Serialize)]
pub struct PageModel {
    pub title: String,
    pub back_link: Option<String>,
    pub last_updated: String,
    pub production_count: usize,
    pub playground_count: usize,
    pub total_count: usize,
    pub sections: Vec<SectionModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionModel {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub count: usize,
    pub cards: Vec<CardModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardModel {
    pub category: &'static str,
    pub name: String,
    pub description: String,
    pub has_description: bool,
    pub tags: Vec<String>,
    pub owner: String,
    pub project: String,
    pub sheet_count: u64,
    pub total_views: String,
    pub created: String,
    pub updated: String,
    pub data_sources: Vec<SourceBadge>,
    /// Per-sheet links; empty unless the workbook has more than one view.
    pub sheets: Vec<SheetLink>,
    pub url: String,
    pub search: SearchKeys,
}

#[derive(Debug, Clone, Serialize)]
pub struct SourceBadge {
    pub name: String,
    pub kind: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SheetLink {
    pub name: String,
    pub url: String,
    /// Formatted count, empty when the sheet has no recorded views.
    pub views: String,
}

/// Lower-cased values the client-side filter matches against.
#[derive(Debug, Clone, Serialize)]
pub struct SearchKeys {
    pub name: String,
    pub description: String,
    pub tags: String,
    pub owner: String,
    pub sources: String,
}

impl PageModel {
    /// Build the page for `snapshot`. Buckets are re-sorted most recent first.
    pub fn build(snapshot: &Snapshot, page: &PageConfig) -> Self {
        let mut snapshot = snapshot.clone();
        snapshot.sort();

        let sections = Category::ALL
            .into_iter()
            .map(|category| SectionModel {
                key: category.as_str(),
                label: category.label(),
                icon: category_icon(category),
                count: snapshot.bucket(category).len(),
                cards: snapshot.bucket(category).iter().map(CardModel::from_workbook).collect(),
            })
            .collect();

        let back_link = Some(page.back_link.trim().to_string()).filter(|link| !link.is_empty());

        Self {
            title: page.title.clone(),
            back_link,
            last_updated: format_timestamp(&snapshot.last_updated),
            production_count: snapshot.production.len(),
            playground_count: snapshot.playground.len(),
            total_count: snapshot.total(),
            sections,
        }
    }
}

impl CardModel {
    fn from_workbook(workbook: &EnrichedWorkbook) -> Self {
        let has_description = !workbook.description.trim().is_empty();
        let description = if has_description {
            workbook.description.clone()
        } else {
            EMPTY_DESCRIPTION.to_string()
        };

        let sheets = if workbook.views.len() > 1 {
            workbook.views.iter().map(SheetLink::from_view).collect()
        } else {
            Vec::new()
        };

        let search = SearchKeys {
            name: workbook.name.to_lowercase(),
            description: description.to_lowercase(),
            tags: workbook.tags.join(" ").to_lowercase(),
            owner: workbook.owner.to_lowercase(),
            sources: workbook
                .data_sources
                .iter()
                .map(|ds| ds.name.to_lowercase())
                .collect::<Vec<_>>()
                .join(" "),
        };

        Self {
            category: workbook.category.as_str(),
            name: workbook.name.clone(),
            description,
            has_description,
            tags: workbook.tags.clone(),
            owner: workbook.owner.clone(),
            project: workbook.project.clone(),
            sheet_count: workbook.sheet_count,
            total_views: thousands(workbook.total_views),
            created: format_date(&workbook.created),
            updated: format_date(&workbook.updated),
            data_sources: workbook.data_sources.iter().map(SourceBadge::from_source).collect(),
            sheets,
            url: workbook.url.clone().unwrap_or_default(),
            search,
        }
    }
}

impl SourceBadge {
    fn from_source(source: &DataSource) -> Self {
        let kind = source.kind.to_uppercase();
        Self { name: source.name.clone(), color: badge_color(&kind), kind }
    }
}

impl SheetLink {
    fn from_view(view: &View) -> Self {
        let views = if view.view_count > 0 { thousands(view.view_count) } else { String::new() };
        Self { name: view.name.clone(), url: view.url.clone(), views }
    }
}

fn category_icon(category: Category) -> &'static str {
    match category {
        Category::Production => "🏭",
        Category::Playground => "🎮",
    }
}

/// Badge color for an upper-cased data-source type.
pub fn badge_color(kind: &str) -> &'static str {
    match kind {
        "VERTICA" => "#4CAF50",
        "BIGQUERY" => "#2196F3",
        _ => "#FF9800",
    }
}

/// `1234567` → `1,234,567`.
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Long "Last updated" form; unparseable input is returned verbatim.
pub fn format_timestamp(raw: &str) -> String {
    parse_datetime(raw)
        .map(|dt| dt.format("%B %d, %Y at %I:%M %p").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Short card date; unparseable input is returned verbatim.
pub fn format_date(raw: &str) -> String {
    parse_datetime(raw)
        .map(|dt| dt.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Accepts RFC 3339 (server wall-clock time is kept) and naive ISO-8601.
fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0))
}
