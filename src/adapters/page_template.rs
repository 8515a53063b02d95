//! Catalog page rendering with embedded Minijinja templates.

use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::{AppError, PageModel};
use crate::ports::PageRenderer;

static PAGE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/page");

const PAGE_TEMPLATE: &str = "catalog.html";

/// Renders `catalog.html`, which pulls in the stylesheet and filter script.
///
/// Output is HTML-escaped through the `.html` template name.
pub struct MinijinjaPageRenderer {
    env: Environment<'static>,
}

impl MinijinjaPageRenderer {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        for file in PAGE_DIR.files() {
            let name = file.path().to_str().ok_or_else(|| {
                AppError::Template(format!(
                    "Page asset has a non UTF-8 path: {}",
                    file.path().to_string_lossy()
                ))
            })?;
            let source = file.contents_utf8().ok_or_else(|| {
                AppError::Template(format!("Page asset is not UTF-8: {}", name))
            })?;
            env.add_template(name, source).map_err(|e| template_error(name, e))?;
        }

        Ok(Self { env })
    }
}

impl PageRenderer for MinijinjaPageRenderer {
    fn render_page(&self, page: &PageModel) -> Result<String, AppError> {
        let template =
            self.env.get_template(PAGE_TEMPLATE).map_err(|e| template_error(PAGE_TEMPLATE, e))?;
        template.render(context! { page => page }).map_err(|e| template_error(PAGE_TEMPLATE, e))
    }
}

fn template_error(name: &str, err: impl std::fmt::Display) -> AppError {
    AppError::Template(format!("{}: {}", name, err))
}
