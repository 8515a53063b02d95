//! Port for reading and writing run artifacts (config, snapshot, page).

use std::path::Path;

use crate::domain::AppError;

/// Text-file storage for run artifacts.
pub trait ArtifactStore {
    fn file_exists(&self, path: &Path) -> bool;

    fn read_file(&self, path: &Path) -> Result<String, AppError>;

    /// Replace the file at `path`, creating parent directories as needed.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
