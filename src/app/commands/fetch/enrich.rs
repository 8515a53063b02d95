//! Per-workbook enrichment with recoverable sub-resource failures.

use tracing::{info, warn};

use crate::domain::enrichment::{assemble, build_data_sources, build_views};
use crate::domain::{Category, EnrichedWorkbook, RawWorkbook, Session};
use crate::ports::DashboardApi;

/// Enriched workbook plus the failures recovered while building it.
#[derive(Debug, Clone)]
pub struct Enriched {
    pub workbook: EnrichedWorkbook,
    pub warnings: Vec<String>,
}

/// Fetch views and connections for `raw` and assemble a catalog entry.
///
/// A failed views or connections call yields an empty list and a warning.
pub fn enrich_workbook(
    api: &impl DashboardApi,
    session: &Session,
    server_base: &str,
    raw: &RawWorkbook,
    category: Category,
) -> Enriched {
    let mut warnings = Vec::new();

    let views = match api.list_views(session, &raw.id) {
        Ok(raw_views) => build_views(server_base, &raw_views),
        Err(e) => {
            warn!(workbook = raw.name(), error = %e, "could not fetch views");
            warnings.push(format!("{}: views unavailable ({})", raw.name(), e));
            Vec::new()
        }
    };

    let data_sources = match api.list_connections(session, &raw.id) {
        Ok(connections) => build_data_sources(&connections),
        Err(e) => {
            warn!(workbook = raw.name(), error = %e, "could not fetch data sources");
            warnings.push(format!("{}: data sources unavailable ({})", raw.name(), e));
            Vec::new()
        }
    };

    info!(
        workbook = raw.name(),
        views = views.len(),
        data_sources = data_sources.len(),
        "enriched workbook"
    );

    Enriched { workbook: assemble(raw, category, views, data_sources), warnings }
}
