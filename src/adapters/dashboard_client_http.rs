//! Dashboard-server REST client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::domain::workbook::count_from_value;
use crate::domain::{
    ApiConfig, AppError, Credentials, RawConnection, RawView, RawWorkbook, Session, WorkbookPage,
};
use crate::ports::{DashboardApi, WorkbookPageRequest};

const AUTH_HEADER: &str = "X-Tableau-Auth";
const APPLICATION_JSON: &str = "application/json";
const DEFAULT_STATUS_MESSAGE: &str = "Dashboard API request failed";

/// HTTP transport for the dashboard-server REST API.
///
/// Every call performs a single request. Failures surface immediately.
#[derive(Clone)]
pub struct HttpDashboardClient {
    api_root: String,
    client: Client,
}

impl std::fmt::Debug for HttpDashboardClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDashboardClient").field("api_root", &self.api_root).finish()
    }
}

impl HttpDashboardClient {
    /// Create a client for `server` using the configured API version and timeout.
    pub fn new(server: &Url, config: &ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::ApiError {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        let api_root = format!(
            "{}/api/{}",
            server.as_str().trim_end_matches('/'),
            config.api_version.trim()
        );

        Ok(Self { api_root, client })
    }

    fn site_url(&self, session: &Session, tail: &str) -> String {
        format!("{}/sites/{}/{}", self.api_root, session.site_id, tail)
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        session: &Session,
        url: &str,
        query: &[(&str, String)],
        context: &str,
    ) -> Result<T, AppError> {
        debug!(url, "GET {}", context);
        let request = self
            .client
            .get(url)
            .header(AUTH_HEADER, &session.token)
            .header(ACCEPT, APPLICATION_JSON)
            .query(query);

        let (status, body) = send(request, context)?;
        if !(200..300).contains(&status) {
            return Err(AppError::ApiError {
                message: format!("{} failed: {}", context, failure_message(status, &body)),
                status: Some(status),
            });
        }

        serde_json::from_str(&body).map_err(|e| AppError::ApiError {
            message: format!("Failed to parse {} response: {}", context, e),
            status: Some(status),
        })
    }
}

fn send(request: RequestBuilder, context: &str) -> Result<(u16, String), AppError> {
    let response = request.send().map_err(|e| AppError::ApiError {
        message: format!("{} request failed: {}", context, e),
        status: None,
    })?;
    let status = response.status().as_u16();
    let body = response.text().unwrap_or_default();
    Ok((status, body))
}

fn failure_message(status: u16, body: &str) -> String {
    extract_error_message(body).unwrap_or_else(|| {
        if !body.trim().is_empty() {
            body.trim().to_string()
        } else if status == 401 {
            "Unauthorized".to_string()
        } else if (500..600).contains(&status) {
            "Server error".to_string()
        } else {
            DEFAULT_STATUS_MESSAGE.to_string()
        }
    })
}

/// Pull a human-readable message out of a JSON error body.
fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<Value>(body).ok()?;

    if let Some(error) = parsed.get("error") {
        for key in ["detail", "summary", "message"] {
            if let Some(msg) = error.get(key).and_then(Value::as_str).filter(|m| !m.is_empty()) {
                return Some(msg.to_string());
            }
        }
    }

    parsed.get("message").and_then(Value::as_str).map(ToOwned::to_owned)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    credentials: SignInCredentials<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInCredentials<'a> {
    personal_access_token_name: &'a str,
    personal_access_token_secret: &'a str,
    site: SiteContent<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SiteContent<'a> {
    content_url: &'a str,
}

#[derive(Debug, Deserialize)]
struct SignInResponse {
    credentials: Option<SignInGrant>,
}

#[derive(Debug, Deserialize)]
struct SignInGrant {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    site: Option<SiteRef>,
}

#[derive(Debug, Deserialize)]
struct SiteRef {
    #[serde(default)]
    id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WorkbooksEnvelope {
    #[serde(default)]
    pagination: Option<Pagination>,
    #[serde(default)]
    workbooks: Option<WorkbookList>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Pagination {
    #[serde(default)]
    total_available: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct WorkbookList {
    #[serde(default)]
    workbook: Vec<RawWorkbook>,
}

#[derive(Debug, Default, Deserialize)]
struct ViewsEnvelope {
    #[serde(default)]
    views: Option<ViewList>,
}

#[derive(Debug, Default, Deserialize)]
struct ViewList {
    #[serde(default)]
    view: Vec<RawView>,
}

#[derive(Debug, Default, Deserialize)]
struct ConnectionsEnvelope {
    #[serde(default)]
    connections: Option<ConnectionList>,
}

#[derive(Debug, Default, Deserialize)]
struct ConnectionList {
    #[serde(default)]
    connection: Vec<RawConnection>,
}

impl DashboardApi for HttpDashboardClient {
    fn sign_in(&self, credentials: &Credentials) -> Result<Session, AppError> {
        let payload = SignInRequest {
            credentials: SignInCredentials {
                personal_access_token_name: &credentials.token_name,
                personal_access_token_secret: &credentials.token_value,
                site: SiteContent { content_url: &credentials.site_name },
            },
        };
        let url = format!("{}/auth/signin", self.api_root);
        debug!(url = %url, "POST sign-in");

        let request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(ACCEPT, APPLICATION_JSON)
            .json(&payload);

        let (status, body) = send(request, "Sign-in").map_err(|e| match e {
            AppError::ApiError { message, status } => {
                AppError::AuthenticationFailed { message, status }
            }
            other => other,
        })?;

        if !(200..300).contains(&status) {
            return Err(AppError::AuthenticationFailed {
                message: failure_message(status, &body),
                status: Some(status),
            });
        }

        let parsed: SignInResponse =
            serde_json::from_str(&body).map_err(|e| AppError::AuthenticationFailed {
                message: format!("Failed to parse sign-in response: {}", e),
                status: Some(status),
            })?;

        let grant = parsed.credentials.ok_or_else(|| AppError::AuthenticationFailed {
            message: "No credentials in sign-in response".into(),
            status: Some(status),
        })?;
        let token = grant.token.filter(|t| !t.is_empty()).ok_or_else(|| {
            AppError::AuthenticationFailed {
                message: "No token in sign-in response".into(),
                status: Some(status),
            }
        })?;
        let site_id = grant.site.and_then(|s| s.id).filter(|id| !id.is_empty()).ok_or_else(|| {
            AppError::AuthenticationFailed {
                message: "No site id in sign-in response".into(),
                status: Some(status),
            }
        })?;

        Ok(Session { token, site_id })
    }

    fn list_workbooks(
        &self,
        session: &Session,
        request: &WorkbookPageRequest,
    ) -> Result<WorkbookPage, AppError> {
        let url = self.site_url(session, "workbooks");
        let query = [
            ("filter", format!("projectName:eq:{}", request.project)),
            ("pageSize", request.page_size.to_string()),
            ("pageNumber", request.page_number.to_string()),
        ];
        let envelope: WorkbooksEnvelope = self.get_json(session, &url, &query, "Workbook listing")?;

        Ok(WorkbookPage {
            workbooks: envelope.workbooks.map(|w| w.workbook).unwrap_or_default(),
            total_available: envelope
                .pagination
                .and_then(|p| p.total_available)
                .map(|total| count_from_value(&total)),
        })
    }

    fn list_views(&self, session: &Session, workbook_id: &str) -> Result<Vec<RawView>, AppError> {
        let url = self.site_url(session, &format!("workbooks/{}/views", workbook_id));
        let query = [("includeUsageStatistics", "true".to_string())];
        let envelope: ViewsEnvelope = self.get_json(session, &url, &query, "View listing")?;
        Ok(envelope.views.map(|v| v.view).unwrap_or_default())
    }

    fn list_connections(
        &self,
        session: &Session,
        workbook_id: &str,
    ) -> Result<Vec<RawConnection>, AppError> {
        let url = self.site_url(session, &format!("workbooks/{}/connections", workbook_id));
        let envelope: ConnectionsEnvelope =
            self.get_json(session, &url, &[], "Connection listing")?;
        Ok(envelope.connections.map(|c| c.connection).unwrap_or_default())
    }
}
