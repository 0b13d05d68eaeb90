use chrono::{DateTime, Utc};
use std::fmt::Debug;
use std::path::{Path, PathBuf};

use crate::domain::{FileAttributes, OpenRequest, SearchOption};
use crate::ports::outbound::{FileHandle, TextReader, TextWriter};
use crate::shared::Result;

/// Members shared by file and directory references.
///
/// A reference holds a path, not a snapshot: every query goes to the
/// filesystem again, so the answer always reflects its current state.
pub trait FileSystemInfo: Send + Sync + Debug {
    fn full_name(&self) -> &Path;

    /// Final path component.
    fn name(&self) -> String {
        self.full_name()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.full_name().to_string_lossy().into_owned())
    }

    /// Extension without the leading dot.
    fn extension(&self) -> Option<String> {
        self.full_name()
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
    }

    fn exists(&self) -> bool;

    fn attributes(&self) -> Result<FileAttributes>;

    fn last_write_time(&self) -> Result<DateTime<Utc>>;

    fn set_last_write_time(&self, time: DateTime<Utc>) -> Result<()>;

    /// Deletes the entry; a directory must be empty.
    fn delete(&self) -> Result<()>;
}

/// Reference to a file.
pub trait FileInfo: FileSystemInfo {
    /// Size in bytes.
    fn length(&self) -> Result<u64>;

    fn is_read_only(&self) -> Result<bool>;

    fn set_read_only(&self, read_only: bool) -> Result<()>;

    fn directory_name(&self) -> Option<PathBuf> {
        self.full_name()
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
    }

    /// Reference to the containing directory.
    fn directory(&self) -> Option<Box<dyn DirectoryInfo>>;

    /// Copies the file and returns a reference to the copy.
    fn copy_to(&self, destination: &Path, overwrite: bool) -> Result<Box<dyn FileInfo>>;

    /// Moves the file and returns a reference to its new location.
    fn move_to(&self, destination: &Path) -> Result<Box<dyn FileInfo>>;

    fn open(&self, request: OpenRequest) -> Result<Box<dyn FileHandle>>;

    fn open_text(&self) -> Result<Box<dyn TextReader>>;

    fn create_text(&self) -> Result<Box<dyn TextWriter>>;

    fn append_text(&self) -> Result<Box<dyn TextWriter>>;
}

/// Reference to a directory.
pub trait DirectoryInfo: FileSystemInfo {
    /// Parent directory; `None` at a root.
    fn parent(&self) -> Option<Box<dyn DirectoryInfo>>;

    /// Root of the path (e.g. `/` or `C:\`).
    fn root(&self) -> Box<dyn DirectoryInfo>;

    /// Creates the directory and any missing parents.
    fn create(&self) -> Result<()>;

    /// Creates `name` below this directory and returns a reference to it.
    fn create_subdirectory(&self, name: &str) -> Result<Box<dyn DirectoryInfo>>;

    fn delete_recursive(&self, recursive: bool) -> Result<()>;

    fn get_files(
        &self,
        pattern: Option<&str>,
        option: SearchOption,
    ) -> Result<Vec<Box<dyn FileInfo>>>;

    fn get_directories(
        &self,
        pattern: Option<&str>,
        option: SearchOption,
    ) -> Result<Vec<Box<dyn DirectoryInfo>>>;
}
