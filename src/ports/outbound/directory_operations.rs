use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

use crate::domain::SearchOption;
use crate::shared::Result;

/// DirectoryOperations port for directory-level operations addressed by path
///
/// Enumeration results are sorted so that callers (and fakes) observe a stable
/// order regardless of the platform's directory iteration order.
pub trait DirectoryOperations: Send + Sync {
    /// Returns true if `path` names an existing directory.
    fn exists(&self, path: &Path) -> bool;

    /// Creates `path` and any missing parents. Succeeds if it already exists.
    ///
    /// # Errors
    /// Returns `AlreadyExists` if a file occupies `path` or one of its parents.
    fn create_directory(&self, path: &Path) -> Result<()>;

    /// Deletes a directory; with `recursive` false it must be empty.
    fn delete(&self, path: &Path, recursive: bool) -> Result<()>;

    fn move_directory(&self, source: &Path, destination: &Path) -> Result<()>;

    /// Lists files under `path` whose names match `pattern` (all when `None`).
    ///
    /// # Errors
    /// - `path` does not exist or is not a directory
    /// - `pattern` is not a valid search pattern
    fn get_files(
        &self,
        path: &Path,
        pattern: Option<&str>,
        option: SearchOption,
    ) -> Result<Vec<PathBuf>>;

    /// Lists subdirectories under `path` whose names match `pattern`.
    fn get_directories(
        &self,
        path: &Path,
        pattern: Option<&str>,
        option: SearchOption,
    ) -> Result<Vec<PathBuf>>;

    /// Lists files and subdirectories under `path` whose names match `pattern`.
    fn get_file_system_entries(
        &self,
        path: &Path,
        pattern: Option<&str>,
        option: SearchOption,
    ) -> Result<Vec<PathBuf>>;

    fn get_current_directory(&self) -> Result<PathBuf>;

    fn set_current_directory(&self, path: &Path) -> Result<()>;

    /// Lexical parent of `path`; `None` for a root or an empty path.
    fn get_parent(&self, path: &Path) -> Option<PathBuf> {
        path.parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
    }

    fn get_last_write_time(&self, path: &Path) -> Result<DateTime<Utc>>;

    fn set_last_write_time(&self, path: &Path, time: DateTime<Utc>) -> Result<()>;
}
