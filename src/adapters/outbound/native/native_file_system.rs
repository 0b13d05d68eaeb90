use super::{NativeDirectory, NativeDrive, NativeFile, NativePath};
use crate::ports::outbound::{
    DirectoryOperations, DriveOperations, FileOperations, FileSystem, PathOperations,
};

/// NativeFileSystem adapter - production wiring of every filesystem port
///
/// Each operation forwards to the platform unchanged.
#[derive(Debug, Clone, Default)]
pub struct NativeFileSystem {
    file: NativeFile,
    directory: NativeDirectory,
    path: NativePath,
    drive: NativeDrive,
}

impl NativeFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps text readers and writers in the logging decorators.
    pub fn with_stream_logging(mut self, enabled: bool) -> Self {
        self.file = self.file.with_stream_logging(enabled);
        self
    }
}

impl FileSystem for NativeFileSystem {
    fn file(&self) -> &dyn FileOperations {
        &self.file
    }

    fn directory(&self) -> &dyn DirectoryOperations {
        &self.directory
    }

    fn path(&self) -> &dyn PathOperations {
        &self.path
    }

    fn drive(&self) -> &dyn DriveOperations {
        &self.drive
    }
}
