use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::FsDirectoryInfo;
use crate::domain::{FileAttributes, OpenRequest};
use crate::ports::outbound::{
    DirectoryInfo, FileHandle, FileInfo, FileSystem, FileSystemInfo, TextReader, TextWriter,
};
use crate::shared::Result;

/// File reference that forwards every member to a `FileSystem`.
#[derive(Clone)]
pub struct FsFileInfo {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl FsFileInfo {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }
}

impl std::fmt::Debug for FsFileInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FsFileInfo")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl FileSystemInfo for FsFileInfo {
    fn full_name(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.fs.file().exists(&self.path)
    }

    fn attributes(&self) -> Result<FileAttributes> {
        self.fs.file().get_attributes(&self.path)
    }

    fn last_write_time(&self) -> Result<DateTime<Utc>> {
        self.fs.file().get_last_write_time(&self.path)
    }

    fn set_last_write_time(&self, time: DateTime<Utc>) -> Result<()> {
        self.fs.file().set_last_write_time(&self.path, time)
    }

    fn delete(&self) -> Result<()> {
        self.fs.file().delete(&self.path)
    }
}

impl FileInfo for FsFileInfo {
    fn length(&self) -> Result<u64> {
        self.fs.file().get_length(&self.path)
    }

    fn is_read_only(&self) -> Result<bool> {
        Ok(self.attributes()?.read_only())
    }

    fn set_read_only(&self, read_only: bool) -> Result<()> {
        let attributes = self.attributes()?.with_read_only(read_only);
        self.fs.file().set_attributes(&self.path, attributes)
    }

    fn directory(&self) -> Option<Box<dyn DirectoryInfo>> {
        self.directory_name().map(|dir| {
            Box::new(FsDirectoryInfo::new(Arc::clone(&self.fs), dir)) as Box<dyn DirectoryInfo>
        })
    }

    fn copy_to(&self, destination: &Path, overwrite: bool) -> Result<Box<dyn FileInfo>> {
        self.fs.file().copy(&self.path, destination, overwrite)?;
        Ok(Box::new(FsFileInfo::new(Arc::clone(&self.fs), destination)))
    }

    fn move_to(&self, destination: &Path) -> Result<Box<dyn FileInfo>> {
        self.fs.file().move_file(&self.path, destination)?;
        Ok(Box::new(FsFileInfo::new(Arc::clone(&self.fs), destination)))
    }

    fn open(&self, request: OpenRequest) -> Result<Box<dyn FileHandle>> {
        self.fs.file().open(&self.path, request)
    }

    fn open_text(&self) -> Result<Box<dyn TextReader>> {
        self.fs.file().open_text(&self.path)
    }

    fn create_text(&self) -> Result<Box<dyn TextWriter>> {
        self.fs.file().create_text(&self.path)
    }

    fn append_text(&self) -> Result<Box<dyn TextWriter>> {
        self.fs.file().append_text(&self.path)
    }
}
