//! Render command: turn a snapshot into the static catalog page.

use std::path::PathBuf;

use tracing::info;

use crate::domain::{AppError, CatalogConfig, PageModel, Snapshot};
use crate::ports::{ArtifactStore, PageRenderer};

/// Options for the render command.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Snapshot to read; falls back to `[output].snapshot`.
    pub input: Option<PathBuf>,
    /// Page to write; falls back to `[output].page`.
    pub output: Option<PathBuf>,
}

/// Result of a completed render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutcome {
    pub page_path: PathBuf,
    pub production: usize,
    pub playground: usize,
}

impl RenderOutcome {
    pub fn total(&self) -> usize {
        self.production + self.playground
    }
}

pub fn execute<S, R>(
    store: &S,
    renderer: &R,
    config: &CatalogConfig,
    options: &RenderOptions,
) -> Result<RenderOutcome, AppError>
where
    S: ArtifactStore,
    R: PageRenderer,
{
    let input = options.input.clone().unwrap_or_else(|| config.output.snapshot.clone());
    if !store.file_exists(&input) {
        return Err(AppError::SnapshotMissing(input.display().to_string()));
    }

    let snapshot = Snapshot::from_json(&store.read_file(&input)?)?;
    let page = PageModel::build(&snapshot, &config.page);
    let html = renderer.render_page(&page)?;

    let page_path = options.output.clone().unwrap_or_else(|| config.output.page.clone());
    store.write_file(&page_path, &html)?;
    info!(path = %page_path.display(), total = page.total_count, "page written");

    Ok(RenderOutcome {
        page_path,
        production: page.production_count,
        playground: page.playground_count,
    })
}
