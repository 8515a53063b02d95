//! Fetch command: collect, enrich and persist the workbook catalog.

mod enrich;
mod paginate;

use std::path::PathBuf;

use chrono::{SecondsFormat, Utc};
use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::{AppError, Category, Credentials, EnrichedWorkbook, Session, Snapshot};
use crate::ports::{ArtifactStore, DashboardApi};

pub use enrich::{Enriched, enrich_workbook};
pub use paginate::fetch_project_workbooks;

/// Options for the fetch command.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Snapshot destination; falls back to `[output].snapshot`.
    pub output: Option<PathBuf>,
}

/// Counts collected for one category during a fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryReport {
    pub listed: usize,
    pub skipped_by_rule: usize,
    pub without_views: usize,
    pub emitted: usize,
    pub warnings: Vec<String>,
}

/// Per-category summary of a fetch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchReport {
    pub production: CategoryReport,
    pub playground: CategoryReport,
}

impl FetchReport {
    pub fn category(&self, category: Category) -> &CategoryReport {
        match category {
            Category::Production => &self.production,
            Category::Playground => &self.playground,
        }
    }

    fn category_mut(&mut self, category: Category) -> &mut CategoryReport {
        match category {
            Category::Production => &mut self.production,
            Category::Playground => &mut self.playground,
        }
    }

    pub fn total_emitted(&self) -> usize {
        self.production.emitted + self.playground.emitted
    }

    pub fn warning_count(&self) -> usize {
        self.production.warnings.len() + self.playground.warnings.len()
    }
}

/// Result of a completed fetch.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub snapshot_path: PathBuf,
    pub last_updated: String,
    pub report: FetchReport,
}

/// Sign in, collect both categories and write the snapshot.
///
/// Authentication and listing failures abort the run before anything is written.
pub fn execute<A, S>(
    ctx: &AppContext<A, S>,
    credentials: &Credentials,
    options: &FetchOptions,
) -> Result<FetchOutcome, AppError>
where
    A: DashboardApi,
    S: ArtifactStore,
{
    let config = ctx.config();
    let session = ctx.api().sign_in(credentials)?;
    info!(server = %credentials.server, site = %credentials.site_name, "signed in");

    let server_base = credentials.server_base();
    let mut report = FetchReport::default();
    let mut production = Vec::new();
    let mut playground = Vec::new();

    for category in Category::ALL {
        let bucket = match category {
            Category::Production => &mut production,
            Category::Playground => &mut playground,
        };
        let entry = report.category_mut(category);
        collect_category(ctx, &session, &server_base, category, bucket, entry)?;
    }

    let last_updated = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let snapshot = Snapshot::new(production, playground, last_updated.clone());

    let snapshot_path = options.output.clone().unwrap_or_else(|| config.output.snapshot.clone());
    ctx.store().write_file(&snapshot_path, &snapshot.to_json_pretty()?)?;
    info!(path = %snapshot_path.display(), total = snapshot.total(), "snapshot written");

    Ok(FetchOutcome { snapshot_path, last_updated, report })
}

fn collect_category<A, S>(
    ctx: &AppContext<A, S>,
    session: &Session,
    server_base: &str,
    category: Category,
    bucket: &mut Vec<EnrichedWorkbook>,
    report: &mut CategoryReport,
) -> Result<(), AppError>
where
    A: DashboardApi,
    S: ArtifactStore,
{
    let config = ctx.config();
    let category_config = config.catalog.get(category);

    for project in &category_config.projects {
        let workbooks = fetch_project_workbooks(ctx.api(), session, project, &config.api)?;
        info!(%category, project = project.as_str(), count = workbooks.len(), "listed workbooks");
        report.listed += workbooks.len();

        for raw in &workbooks {
            if let Some(rule) = category_config.excluding_rule(raw.owner_name(), raw.name()) {
                debug!(workbook = raw.name(), owner = rule.owner.as_str(), "skipped by owner rule");
                report.skipped_by_rule += 1;
                continue;
            }

            let enriched = enrich_workbook(ctx.api(), session, server_base, raw, category);
            report.warnings.extend(enriched.warnings);

            if !enriched.workbook.has_views() {
                debug!(workbook = raw.name(), "excluded: no views");
                report.without_views += 1;
                continue;
            }

            report.emitted += 1;
            bucket.push(enriched.workbook);
        }
    }

    Ok(())
}
