//! Pure derivations that turn raw server records into catalog entries.

use std::collections::HashSet;

use serde_json::Value;

use crate::domain::description;
use crate::domain::workbook::count_from_value;
use crate::domain::{
    Category, DataSource, EnrichedWorkbook, RawConnection, RawView, RawWorkbook, View,
};

/// Build viewer links for views and order them most-viewed first.
///
/// Views without a content URL are not addressable and are dropped.
pub fn build_views(server_base: &str, raw_views: &[RawView]) -> Vec<View> {
    let mut views: Vec<View> = raw_views
        .iter()
        .filter_map(|raw| {
            let content_url = raw.content_url.as_deref().filter(|url| !url.is_empty())?;
            let clean = content_url.replace("/sheets/", "/");
            Some(View {
                name: raw.name.clone().unwrap_or_else(|| "Unnamed".into()),
                id: raw.id.clone().unwrap_or_default(),
                url: format!("{}/#/views/{}", server_base, clean),
                view_count: usage_count(raw.usage.as_ref()),
            })
        })
        .collect();

    // sort_by is stable, so equal counts keep server order.
    views.sort_by(|a, b| b.view_count.cmp(&a.view_count));
    views
}

fn usage_count(usage: Option<&Value>) -> u64 {
    match usage {
        Some(Value::Object(map)) => map.get("totalViewCount").map(count_from_value).unwrap_or(0),
        _ => 0,
    }
}

/// Derive display-named data sources, keeping the first connection per name.
pub fn build_data_sources(connections: &[RawConnection]) -> Vec<DataSource> {
    let mut seen = HashSet::new();
    let mut sources = Vec::new();

    for conn in connections {
        let Some(name) = [&conn.datasource_name, &conn.dbname, &conn.server_address]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .find(|value| !value.is_empty())
        else {
            continue;
        };

        if !seen.insert(name.to_string()) {
            continue;
        }

        sources.push(DataSource {
            name: name.to_string(),
            kind: conn.kind.clone().unwrap_or_else(|| "Unknown".into()),
            server: conn.server_address.clone().unwrap_or_default(),
        });
    }

    sources
}

/// Flatten the `tags` field into label strings.
///
/// Accepts `{"tag": [..]}`, `{"tag": {..}}`, or nothing. Entries without a
/// non-empty string `label` are skipped.
pub fn normalize_tags(tags: Option<&Value>) -> Vec<String> {
    let Some(tag) = tags.and_then(|t| t.get("tag")) else {
        return Vec::new();
    };

    let entries: Vec<&Value> = match tag {
        Value::Array(items) => items.iter().collect(),
        Value::Object(_) => vec![tag],
        _ => Vec::new(),
    };

    entries
        .into_iter()
        .filter_map(|entry| entry.get("label").and_then(Value::as_str))
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

/// Assemble one catalog entry from a workbook and its fetched sub-resources.
pub fn assemble(
    workbook: &RawWorkbook,
    category: Category,
    views: Vec<View>,
    data_sources: Vec<DataSource>,
) -> EnrichedWorkbook {
    let name = workbook.name().to_string();
    let project = workbook.project_name().to_string();
    let description = description::resolve(workbook.description.as_deref(), &name, &project);
    let total_views = views.iter().map(|v| v.view_count).sum();
    let url = views.first().map(|v| v.url.clone());

    EnrichedWorkbook {
        description,
        owner: workbook.owner_name().to_string(),
        created: workbook.created_at.clone().unwrap_or_default(),
        updated: workbook.updated_at.clone().unwrap_or_default(),
        tags: normalize_tags(workbook.tags.as_ref()),
        sheet_count: views.len() as u64,
        total_views,
        size: workbook.size,
        category,
        url,
        views,
        data_sources,
        name,
        project,
    }
}
