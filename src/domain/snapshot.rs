//! Persisted catalog snapshot shared between `fetch` and `render`.

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, Category, EnrichedWorkbook};

/// Catalog document: one ordered list per category plus its generation time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub production: Vec<EnrichedWorkbook>,
    #[serde(default)]
    pub playground: Vec<EnrichedWorkbook>,
    /// ISO-8601 generation timestamp.
    #[serde(default)]
    pub last_updated: String,
}

impl Snapshot {
    /// Build a snapshot with both buckets sorted most-recently-updated first.
    pub fn new(
        production: Vec<EnrichedWorkbook>,
        playground: Vec<EnrichedWorkbook>,
        last_updated: impl Into<String>,
    ) -> Self {
        let mut snapshot = Self { production, playground, last_updated: last_updated.into() };
        snapshot.sort();
        snapshot
    }

    /// Sort both buckets by `updated` descending.
    ///
    /// ISO-8601 strings compare chronologically, so plain string order is used.
    pub fn sort(&mut self) {
        sort_by_updated_desc(&mut self.production);
        sort_by_updated_desc(&mut self.playground);
    }

    pub fn bucket(&self, category: Category) -> &[EnrichedWorkbook] {
        match category {
            Category::Production => &self.production,
            Category::Playground => &self.playground,
        }
    }

    pub fn total(&self) -> usize {
        self.production.len() + self.playground.len()
    }

    /// Serialize with two-space indentation and declared key order.
    pub fn to_json_pretty(&self) -> Result<String, AppError> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    pub fn from_json(content: &str) -> Result<Self, AppError> {
        serde_json::from_str(content).map_err(|e| AppError::ParseError {
            what: "snapshot".to_string(),
            details: e.to_string(),
        })
    }
}

/// Stable sort, most recent `updated` first.
pub fn sort_by_updated_desc(workbooks: &mut [EnrichedWorkbook]) {
    workbooks.sort_by(|a, b| b.updated.cmp(&a.updated));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DataSource, View};
    use proptest::prelude::*;

    fn workbook(name: &str, updated: &str, category: Category) -> EnrichedWorkbook {
        EnrichedWorkbook {
            name: name.to_string(),
            description: format!("{} description", name),
            project: "ROC".to_string(),
            owner: "mor.h".to_string(),
            created: "2023-12-01T00:00:00Z".to_string(),
            updated: updated.to_string(),
            tags: vec!["ops".to_string()],
            views: vec![View {
                name: "Overview".to_string(),
                id: format!("{}-v1", name),
                url: format!("https://dash.example.com/#/views/{}/Overview", name),
                view_count: 4,
            }],
            data_sources: vec![DataSource {
                name: "warehouse_db".to_string(),
                kind: "vertica".to_string(),
                server: "db.internal".to_string(),
            }],
            sheet_count: 1,
            total_views: 4,
            size: 2,
            category,
            url: Some(format!("https://dash.example.com/#/views/{}/Overview", name)),
        }
    }

    #[test]
    fn new_sorts_each_bucket_by_updated_descending() {
        let production = vec![
            workbook("a", "2024-01-01", Category::Production),
            workbook("b", "2024-03-01", Category::Production),
            workbook("c", "2024-02-01", Category::Production),
        ];
        let snapshot = Snapshot::new(production, vec![], "2024-04-01T10:00:00+00:00");

        let order: Vec<&str> = snapshot.production.iter().map(|w| w.updated.as_str()).collect();
        assert_eq!(order, vec!["2024-03-01", "2024-02-01", "2024-01-01"]);
    }

    #[test]
    fn json_round_trip_preserves_buckets_and_order() {
        let snapshot = Snapshot::new(
            vec![
                workbook("a", "2024-01-01T00:00:00Z", Category::Production),
                workbook("b", "2024-05-01T00:00:00Z", Category::Production),
            ],
            vec![workbook("p", "2024-02-01T00:00:00Z", Category::Playground)],
            "2024-06-01T00:00:00+00:00",
        );

        let json = snapshot.to_json_pretty().unwrap();
        let parsed = Snapshot::from_json(&json).unwrap();
        assert_eq!(parsed, snapshot);
        assert_eq!(parsed.production[0].name, "b");
    }

    #[test]
    fn json_uses_contract_keys_in_declared_order() {
        let snapshot = Snapshot::new(
            vec![workbook("a", "2024-01-01", Category::Production)],
            vec![],
            "2024-06-01T00:00:00+00:00",
        );
        let json = snapshot.to_json_pretty().unwrap();

        let production = json.find("\"production\"").unwrap();
        let playground = json.find("\"playground\"").unwrap();
        let last_updated = json.find("\"last_updated\"").unwrap();
        assert!(production < playground && playground < last_updated);
        assert!(json.contains("\n  \"production\": ["));
        assert!(json.contains("\"data_sources\""));
        assert!(json.contains("\"viewCount\": 4"));
        assert!(json.contains("\"category\": \"production\""));
    }

    #[test]
    fn from_json_rejects_non_object() {
        let err = Snapshot::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, AppError::ParseError { .. }));
    }

    proptest! {
        #[test]
        fn sorted_buckets_never_increase(days in proptest::collection::vec(1u32..28, 0..20)) {
            let items: Vec<EnrichedWorkbook> = days
                .iter()
                .enumerate()
                .map(|(i, d)| {
                    let updated = format!("2024-01-{:02}", d);
                    workbook(&format!("wb{}", i), &updated, Category::Playground)
                })
                .collect();
            let snapshot = Snapshot::new(vec![], items, "now");

            prop_assert_eq!(snapshot.playground.len(), days.len());
            for pair in snapshot.playground.windows(2) {
                prop_assert!(pair[0].updated >= pair[1].updated);
            }
        }
    }
}
