pub mod artifact_filesystem;
pub mod credentials;
pub mod dashboard_client_http;
pub mod page_template;
