use std::path::Path;
use std::sync::Arc;

use super::memory_drive::{FakeDrive, MemoryDrive};
use super::memory_directory::MemoryDirectory;
use super::memory_file::MemoryFile;
use super::memory_path::MemoryPath;
use super::state::MemoryState;
use crate::ports::outbound::{
    DirectoryOperations, DriveOperations, FileOperations, FileSystem, PathOperations,
};

/// InMemoryFileSystem - a thread-safe fake implementing every filesystem port
///
/// Clones share the same tree. Errors carry the `std::io::ErrorKind` the
/// native adapter reports on Unix for the same situation, so code under test
/// cannot tell the two apart by error kind.
///
/// # Examples
/// ```
/// use fs_facade::prelude::*;
/// use std::path::Path;
///
/// let fs = InMemoryFileSystem::new()
///     .with_file("/work/notes.txt", "hello")
///     .with_current_directory("/work");
///
/// assert_eq!(fs.file().read_all_text(Path::new("notes.txt"), None).unwrap(), "hello");
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryFileSystem {
    state: Arc<MemoryState>,
    file: MemoryFile,
    directory: MemoryDirectory,
    path: MemoryPath,
    drive: MemoryDrive,
}

impl InMemoryFileSystem {
    /// Creates an empty tree containing only the root directory and a single
    /// drive mounted at the root.
    pub fn new() -> Self {
        let state = Arc::new(MemoryState::new());
        Self {
            file: MemoryFile::new(Arc::clone(&state)),
            directory: MemoryDirectory::new(Arc::clone(&state)),
            path: MemoryPath::new(Arc::clone(&state)),
            drive: MemoryDrive::new(Arc::clone(&state)),
            state,
        }
    }

    /// Adds a file, creating missing parent directories. Replaces whatever
    /// already exists at `path`.
    pub fn with_file(self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) -> Self {
        let path = self.state.resolve(path.as_ref());
        self.state
            .insert_forced(&path, MemoryState::new_file_node(content.as_ref().to_vec()));
        self
    }

    /// Adds a directory and its missing parents.
    pub fn with_directory(self, path: impl AsRef<Path>) -> Self {
        let path = self.state.resolve(path.as_ref());
        if !self.state.is_directory(&path) {
            self.state
                .insert_forced(&path, MemoryState::new_directory_node());
        }
        self
    }

    /// Adds a drive, replacing an existing drive of the same name.
    pub fn with_drive(self, drive: FakeDrive) -> Self {
        self.state.add_drive(drive);
        self
    }

    /// Creates `path` as a directory and makes it the current directory.
    pub fn with_current_directory(self, path: impl AsRef<Path>) -> Self {
        let this = self.with_directory(path.as_ref());
        let path = this.state.resolve(path.as_ref());
        this.state.set_current_dir(path);
        this
    }
}

impl Default for InMemoryFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for InMemoryFileSystem {
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
