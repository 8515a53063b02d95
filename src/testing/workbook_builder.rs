//! Builders for raw server records used across unit tests.

use serde_json::{Value, json};

use crate::domain::{Credentials, RawConnection, RawView, RawWorkbook};

/// Fluent builder producing a [`RawWorkbook`] through its JSON wire shape.
#[derive(Debug, Clone)]
pub struct WorkbookBuilder {
    value: Value,
}

impl WorkbookBuilder {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            value: json!({
                "id": id,
                "name": name,
                "project": {"name": "ROC"},
                "owner": {"name": "mor.h"},
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-01T00:00:00Z",
                "size": "1",
            }),
        }
    }

    pub fn project(mut self, project: &str) -> Self {
        self.value["project"] = json!({"name": project});
        self
    }

    pub fn owner(mut self, owner: &str) -> Self {
        self.value["owner"] = json!({"name": owner});
        self
    }

    pub fn updated(mut self, updated: &str) -> Self {
        self.value["updatedAt"] = json!(updated);
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.value["description"] = json!(description);
        self
    }

    pub fn tags(mut self, labels: &[&str]) -> Self {
        let tags: Vec<Value> = labels.iter().map(|l| json!({"label": l})).collect();
        self.value["tags"] = json!({"tag": tags});
        self
    }

    pub fn build(self) -> RawWorkbook {
        serde_json::from_value(self.value).unwrap()
    }
}

pub fn raw_view(id: &str, content_url: &str, count: u64) -> RawView {
    serde_json::from_value(json!({
        "id": id,
        "name": id,
        "contentUrl": content_url,
        "usage": {"totalViewCount": count.to_string()},
    }))
    .unwrap()
}

pub fn connection(kind: &str, server: &str, dbname: &str) -> RawConnection {
    serde_json::from_value(json!({"type": kind, "serverAddress": server, "dbname": dbname}))
        .unwrap()
}

pub fn test_credentials() -> Credentials {
    Credentials::from_parts(
        "https://dash.example.com",
        Some("ops"),
        Some("ci"),
        Some("secret"),
        "test",
    )
    .unwrap()
}
