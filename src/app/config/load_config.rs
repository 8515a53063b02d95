//! Catalog configuration loading.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::config;
use crate::domain::{AppError, CatalogConfig};
use crate::ports::ArtifactStore;

/// Load `dashcat.toml`, or the file named by `explicit`.
///
/// A missing default file yields built-in defaults; a missing explicit file is an error.
pub fn load_config<S: ArtifactStore>(
    store: &S,
    explicit: Option<&Path>,
) -> Result<CatalogConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !store.file_exists(path) {
                return Err(AppError::ConfigFileMissing(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => {
            let path = PathBuf::from(config::paths::DEFAULT_CONFIG_FILE);
            if !store.file_exists(&path) {
                debug!("no {} found, using defaults", config::paths::DEFAULT_CONFIG_FILE);
                return Ok(CatalogConfig::default());
            }
            path
        }
    };

    debug!(path = %path.display(), "loading configuration");
    let content = store.read_file(&path)?;
    config::parse_config_content(&content)
}
