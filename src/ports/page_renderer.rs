//! Port for turning the page model into a document.

use crate::domain::{AppError, PageModel};

/// Renders the catalog page.
pub trait PageRenderer {
    fn render_page(&self, page: &PageModel) -> Result<String, AppError>;
}
