//! Shared testing utilities for dashcat CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables that select or tune credential and logging behaviour.
pub const ISOLATED_VARS: [&str; 5] =
    ["TABLEAU_SERVER", "TABLEAU_SITE_NAME", "TABLEAU_PAT_NAME", "TABLEAU_PAT_VALUE", "DASHCAT_LOG"];

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Directory the CLI runs in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for the compiled `dashcat` binary with a scrubbed environment.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("dashcat").expect("Failed to locate dashcat binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.root.path());
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Write `content` to a path relative to the work directory.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Read a file relative to the work directory.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.work_dir.join(relative).exists()
    }
}

/// Snapshot with one workbook per category.
#[allow(dead_code)]
pub const SAMPLE_SNAPSHOT: &str = r#"{
  "production": [
    {
      "name": "Hourly <b>Revenue</b>",
      "description": "Monitors hourly trends and real-time performance metrics.",
      "project": "ROC",
      "owner": "mor.h",
      "created": "2024-01-05T08:00:00Z",
      "updated": "2024-02-01T08:00:00Z",
      "tags": ["finance"],
      "views": [
        {"name": "Overview", "id": "v1", "url": "https://dash.example.com/#/views/Hourly/Overview", "viewCount": 2500},
        {"name": "Detail", "id": "v2", "url": "https://dash.example.com/#/views/Hourly/Detail", "viewCount": 0}
      ],
      "data_sources": [{"name": "warehouse", "type": "bigquery", "server": "bq"}],
      "sheet_count": 2,
      "total_views": 2500,
      "size": 3,
      "category": "production",
      "url": "https://dash.example.com/#/views/Hourly/Overview"
    }
  ],
  "playground": [
    {
      "name": "ROC sandbox",
      "description": "",
      "project": "Playground",
      "owner": "guy.d",
      "created": "2024-01-01T00:00:00Z",
      "updated": "2024-01-02T00:00:00Z",
      "tags": [],
      "views": [{"name": "Main", "id": "v3", "url": "https://dash.example.com/#/views/Sandbox/Main", "viewCount": 7}],
      "data_sources": [],
      "sheet_count": 1,
      "total_views": 7,
      "size": 1,
      "category": "playground",
      "url": "https://dash.example.com/#/views/Sandbox/Main"
    }
  ],
  "last_updated": "2024-03-05T14:07:00Z"
}
"#;
