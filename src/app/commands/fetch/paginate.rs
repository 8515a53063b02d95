//! Paged collection of a project's workbooks.

use tracing::debug;

use crate::domain::{ApiConfig, AppError, RawWorkbook, Session};
use crate::ports::{DashboardApi, WorkbookPageRequest};

/// Fetch every workbook in `project`.
///
/// Stops on an empty page or once `page_number * page_size` reaches the
/// server's `totalAvailable` (missing totals count as zero). Fails when
/// `max_pages` requests were issued without reaching either condition.
pub fn fetch_project_workbooks(
    api: &impl DashboardApi,
    session: &Session,
    project: &str,
    config: &ApiConfig,
) -> Result<Vec<RawWorkbook>, AppError> {
    let mut workbooks = Vec::new();

    for page_number in 1..=config.max_pages {
        let request = WorkbookPageRequest {
            project: project.to_string(),
            page_number,
            page_size: config.page_size,
        };
        let page = api.list_workbooks(session, &request)?;
        debug!(project, page_number, items = page.workbooks.len(), "fetched workbook page");

        if page.workbooks.is_empty() {
            return Ok(workbooks);
        }
        workbooks.extend(page.workbooks);

        let total = page.total_available.unwrap_or(0);
        if u64::from(page_number) * u64::from(config.page_size) >= total {
            return Ok(workbooks);
        }
    }

    Err(AppError::PaginationLimit { project: project.to_string(), max_pages: config.max_pages })
}
