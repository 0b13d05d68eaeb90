use std::path::Path;
use std::sync::Arc;

use crate::adapters::outbound::info::{FsDirectoryInfo, FsFileInfo};
use crate::ports::outbound::{DirectoryInfo, DriveInfo, FileInfo, FileSystem};
use crate::shared::Result;

/// Factory for file, directory and drive references bound to one filesystem
///
/// Every reference it hands out shares the factory's `FileSystem`, so a test
/// that builds the factory over a fake gets fake-backed references.
#[derive(Clone)]
pub struct InfoFactory {
    fs: Arc<dyn FileSystem>,
}

impl InfoFactory {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Reference to the file at `path`; the file need not exist.
    pub fn file_info(&self, path: impl AsRef<Path>) -> Box<dyn FileInfo> {
        Box::new(FsFileInfo::new(Arc::clone(&self.fs), path.as_ref()))
    }

    /// Reference to the directory at `path`; the directory need not exist.
    pub fn directory_info(&self, path: impl AsRef<Path>) -> Box<dyn DirectoryInfo> {
        Box::new(FsDirectoryInfo::new(Arc::clone(&self.fs), path.as_ref()))
    }

    /// Looks up a mounted volume by name or root directory.
    ///
    /// # Errors
    /// Returns `FsError::DriveNotFound` when nothing matches.
    pub fn drive_info(&self, name: &str) -> Result<Box<dyn DriveInfo>> {
        self.fs.drive().get_drive(name)
    }
}

impl std::fmt::Debug for InfoFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InfoFactory").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::memory::{FakeDrive, InMemoryFileSystem};
    use crate::domain::DriveType;
    use crate::shared::error::FsError;

    fn factory() -> InfoFactory {
        InfoFactory::new(Arc::new(
            InMemoryFileSystem::new()
                .with_file("/etc/hosts", "127.0.0.1 localhost")
                .with_drive(FakeDrive::new("/media/cd").with_drive_type(DriveType::CdRom)),
        ))
    }

    #[test]
    fn test_file_info() {
        let info = factory().file_info("/etc/hosts");
        assert!(info.exists());
        assert_eq!(info.length().unwrap(), 19);
    }

    #[test]
    fn test_directory_info() {
        let factory = factory();
        let dir = factory.directory_info("/etc");
        assert!(dir.exists());
        assert!(!factory.directory_info("/var").exists());
    }

    #[test]
    fn test_drive_info() {
        let factory = factory();
        assert_eq!(
            factory.drive_info("/media/cd").unwrap().drive_type(),
            DriveType::CdRom
        );
        assert!(matches!(
            factory.drive_info("/nope"),
            Err(FsError::DriveNotFound { .. })
        ));
    }
}
