//! Dashboard-server REST API port definition.

use crate::domain::{AppError, Credentials, RawConnection, RawView, Session, WorkbookPage};

/// Request for one page of a project's workbooks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkbookPageRequest {
    /// Exact project name to filter on.
    pub project: String,
    /// 1-based page number.
    pub page_number: u32,
    pub page_size: u32,
}

/// Port for dashboard-server operations.
///
/// Implementations perform exactly one request per call; they never retry.
pub trait DashboardApi {
    /// Exchange access-token credentials for a session.
    fn sign_in(&self, credentials: &Credentials) -> Result<Session, AppError>;

    /// Fetch one page of workbooks belonging to a project.
    fn list_workbooks(
        &self,
        session: &Session,
        request: &WorkbookPageRequest,
    ) -> Result<WorkbookPage, AppError>;

    /// Fetch a workbook's views with usage statistics.
    fn list_views(&self, session: &Session, workbook_id: &str) -> Result<Vec<RawView>, AppError>;

    /// Fetch a workbook's data-source connections.
    fn list_connections(
        &self,
        session: &Session,
        workbook_id: &str,
    ) -> Result<Vec<RawConnection>, AppError>;
}
