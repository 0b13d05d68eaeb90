use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};
use uuid::Uuid;

use crate::shared::Result;

/// PathOperations port for path string utilities
///
/// Purely lexical operations are provided methods; only the operations that
/// depend on the environment (current directory, temp location) must be
/// supplied by an adapter.
pub trait PathOperations: Send + Sync {
    /// Resolves `path` to an absolute path against the current directory.
    ///
    /// `.` and `..` components are resolved lexically; symlinks are not followed.
    fn get_full_path(&self, path: &Path) -> Result<PathBuf>;

    /// Directory used for temporary files.
    fn get_temp_path(&self) -> PathBuf;

    /// Creates a uniquely named, zero-byte file in the temp directory and
    /// returns its path.
    fn get_temp_file_name(&self) -> Result<PathBuf>;

    /// Joins path parts. A rooted part discards everything before it and empty
    /// parts are skipped.
    fn combine(&self, parts: &[&str]) -> PathBuf {
        let mut combined = PathBuf::new();
        for part in parts.iter().filter(|p| !p.is_empty()) {
            combined.push(part);
        }
        combined
    }

    fn get_file_name(&self, path: &Path) -> Option<String> {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }

    fn get_file_name_without_extension(&self, path: &Path) -> Option<String> {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
    }

    /// Directory part of `path`, or `None` for a root or a bare file name
    /// without a directory.
    fn get_directory_name(&self, path: &Path) -> Option<PathBuf> {
        path.parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
    }

    /// Extension without the leading dot.
    fn get_extension(&self, path: &Path) -> Option<String> {
        path.extension()
            .map(|ext| ext.to_string_lossy().into_owned())
    }

    /// Replaces the extension; `None` removes it. A leading dot in
    /// `extension` is ignored.
    fn change_extension(&self, path: &Path, extension: Option<&str>) -> PathBuf {
        let extension = extension.map(|e| e.trim_start_matches('.')).unwrap_or("");
        path.with_extension(extension)
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension().is_some_and(|ext| !ext.is_empty())
    }

    /// True when `path` starts at a root (or, on Windows, a drive prefix).
    fn is_path_rooted(&self, path: &Path) -> bool {
        path.has_root() || matches!(path.components().next(), Some(Component::Prefix(_)))
    }

    fn directory_separator(&self) -> char {
        MAIN_SEPARATOR
    }

    /// Random 8.3-style name such as `k3j9x0a2.q7z`. Nothing is created.
    fn get_random_file_name(&self) -> String {
        let id = Uuid::new_v4().simple().to_string();
        format!("{}.{}", &id[..8], &id[8..11])
    }
}

/// Resolves `path` against `base` and removes `.`/`..` components lexically.
///
/// `..` at the root stays at the root.
pub fn normalize_path(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
            Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            Component::Normal(name) => normalized.push(name),
        }
    }
    normalized
}
