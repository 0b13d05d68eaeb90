use chrono::{DateTime, Utc};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use super::FsFileInfo;
use crate::domain::{FileAttributes, SearchOption};
use crate::ports::outbound::{DirectoryInfo, FileInfo, FileSystem, FileSystemInfo};
use crate::shared::error::FsError;
use crate::shared::Result;

/// Directory reference that forwards every member to a `FileSystem`.
#[derive(Clone)]
pub struct FsDirectoryInfo {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl FsDirectoryInfo {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }

    fn child(&self, path: PathBuf) -> Box<dyn DirectoryInfo> {
        Box::new(FsDirectoryInfo::new(Arc::clone(&self.fs), path))
    }
}

impl std::fmt::Debug for FsDirectoryInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FsDirectoryInfo")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl FileSystemInfo for FsDirectoryInfo {
    fn full_name(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.fs.directory().exists(&self.path)
    }

    fn attributes(&self) -> Result<FileAttributes> {
        self.fs.file().get_attributes(&self.path)
    }

    fn last_write_time(&self) -> Result<DateTime<Utc>> {
        self.fs.directory().get_last_write_time(&self.path)
    }

    fn set_last_write_time(&self, time: DateTime<Utc>) -> Result<()> {
        self.fs.directory().set_last_write_time(&self.path, time)
    }

    fn delete(&self) -> Result<()> {
        self.fs.directory().delete(&self.path, false)
    }
}

impl DirectoryInfo for FsDirectoryInfo {
    fn parent(&self) -> Option<Box<dyn DirectoryInfo>> {
        self.fs
            .directory()
            .get_parent(&self.path)
            .map(|parent| self.child(parent))
    }

    fn root(&self) -> Box<dyn DirectoryInfo> {
        let root: PathBuf = self
            .path
            .components()
            .take_while(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
            .collect();
        self.child(root)
    }

    fn create(&self) -> Result<()> {
        self.fs.directory().create_directory(&self.path)
    }

    fn create_subdirectory(&self, name: &str) -> Result<Box<dyn DirectoryInfo>> {
        let relative = Path::new(name);
        if name.is_empty() || self.fs.path().is_path_rooted(relative) {
            return Err(FsError::InvalidPath {
                path: relative.to_path_buf(),
                reason: "subdirectory name must be a non-empty relative path".to_string(),
            });
        }
        let path = self.path.join(relative);
        self.fs.directory().create_directory(&path)?;
        Ok(self.child(path))
    }

    fn delete_recursive(&self, recursive: bool) -> Result<()> {
        self.fs.directory().delete(&self.path, recursive)
    }

    fn get_files(
        &self,
        pattern: Option<&str>,
        option: SearchOption,
    ) -> Result<Vec<Box<dyn FileInfo>>> {
        Ok(self
            .fs
            .directory()
            .get_files(&self.path, pattern, option)?
            .into_iter()
            .map(|path| Box::new(FsFileInfo::new(Arc::clone(&self.fs), path)) as Box<dyn FileInfo>)
            .collect())
    }

    fn get_directories(
        &self,
        pattern: Option<&str>,
        option: SearchOption,
    ) -> Result<Vec<Box<dyn DirectoryInfo>>> {
        Ok(self
            .fs
            .directory()
            .get_directories(&self.path, pattern, option)?
            .into_iter()
            .map(|path| self.child(path))
            .collect())
    }
}
