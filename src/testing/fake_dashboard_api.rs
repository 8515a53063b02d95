use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use crate::domain::{
    AppError, Credentials, RawConnection, RawView, RawWorkbook, Session, WorkbookPage,
};
use crate::ports::{DashboardApi, WorkbookPageRequest};

/// A call observed by [`FakeDashboardApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    SignIn,
    ListWorkbooks(WorkbookPageRequest),
    ListViews(String),
    ListConnections(String),
}

/// Scriptable in-memory dashboard server.
#[derive(Clone, Default)]
pub struct FakeDashboardApi {
    calls: Arc<Mutex<Vec<ApiCall>>>,
    pages: HashMap<String, Vec<WorkbookPage>>,
    repeat_last_page: HashSet<String>,
    views: HashMap<String, Vec<RawView>>,
    connections: HashMap<String, Vec<RawConnection>>,
    failing_projects: HashSet<String>,
    failing_views: HashSet<String>,
    failing_connections: HashSet<String>,
    reject_sign_in: bool,
}

#[allow(dead_code)]
impl FakeDashboardApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `workbooks` for `project`, split into pages of `page_size`, with an accurate total.
    pub fn with_workbooks(
        mut self,
        project: &str,
        workbooks: Vec<RawWorkbook>,
        page_size: usize,
    ) -> Self {
        let total = workbooks.len() as u64;
        let pages = workbooks
            .chunks(page_size.max(1))
            .map(|chunk| WorkbookPage { workbooks: chunk.to_vec(), total_available: Some(total) })
            .collect();
        self.pages.insert(project.to_string(), pages);
        self
    }

    /// Serve explicit pages for `project`, in order.
    pub fn with_pages(mut self, project: &str, pages: Vec<WorkbookPage>) -> Self {
        self.pages.insert(project.to_string(), pages);
        self
    }

    /// Keep serving the last configured page for any later page number.
    pub fn repeating_last_page(mut self, project: &str) -> Self {
        self.repeat_last_page.insert(project.to_string());
        self
    }

    pub fn with_views(mut self, workbook_id: &str, views: Vec<RawView>) -> Self {
        self.views.insert(workbook_id.to_string(), views);
        self
    }

    pub fn with_connections(mut self, workbook_id: &str, connections: Vec<RawConnection>) -> Self {
        self.connections.insert(workbook_id.to_string(), connections);
        self
    }

    pub fn failing_project(mut self, project: &str) -> Self {
        self.failing_projects.insert(project.to_string());
        self
    }

    pub fn failing_views(mut self, workbook_id: &str) -> Self {
        self.failing_views.insert(workbook_id.to_string());
        self
    }

    pub fn failing_connections(mut self, workbook_id: &str) -> Self {
        self.failing_connections.insert(workbook_id.to_string());
        self
    }

    pub fn rejecting_sign_in(mut self) -> Self {
        self.reject_sign_in = true;
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn page_requests(&self, project: &str) -> Vec<u32> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ApiCall::ListWorkbooks(req) if req.project == project => Some(req.page_number),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push(call);
    }
}

fn server_error(what: &str) -> AppError {
    AppError::ApiError { message: format!("{} failed: Server error", what), status: Some(500) }
}

impl DashboardApi for FakeDashboardApi {
    fn sign_in(&self, _credentials: &Credentials) -> Result<Session, AppError> {
        self.record(ApiCall::SignIn);
        if self.reject_sign_in {
            return Err(AppError::AuthenticationFailed {
                message: "Invalid token".to_string(),
                status: Some(401),
            });
        }
        Ok(Session { token: "fake-token".to_string(), site_id: "fake-site".to_string() })
    }

    fn list_workbooks(
        &self,
        _session: &Session,
        request: &WorkbookPageRequest,
    ) -> Result<WorkbookPage, AppError> {
        self.record(ApiCall::ListWorkbooks(request.clone()));
        if self.failing_projects.contains(&request.project) {
            return Err(server_error("Workbook listing"));
        }

        let Some(pages) = self.pages.get(&request.project) else {
            return Ok(WorkbookPage::default());
        };
        let index = request.page_number.saturating_sub(1) as usize;
        let page = match pages.get(index) {
            Some(page) => page.clone(),
            None if self.repeat_last_page.contains(&request.project) => {
                pages.last().cloned().unwrap_or_default()
            }
            None => WorkbookPage::default(),
        };
        Ok(page)
    }

    fn list_views(&self, _session: &Session, workbook_id: &str) -> Result<Vec<RawView>, AppError> {
        self.record(ApiCall::ListViews(workbook_id.to_string()));
        if self.failing_views.contains(workbook_id) {
            return Err(server_error("View listing"));
        }
        Ok(self.views.get(workbook_id).cloned().unwrap_or_default())
    }

    fn list_connections(
        &self,
        _session: &Session,
        workbook_id: &str,
    ) -> Result<Vec<RawConnection>, AppError> {
        self.record(ApiCall::ListConnections(workbook_id.to_string()));
        if self.failing_connections.contains(workbook_id) {
            return Err(server_error("Connection listing"));
        }
        Ok(self.connections.get(workbook_id).cloned().unwrap_or_default())
    }
}
