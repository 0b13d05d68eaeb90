use crate::ports::outbound::{DirectoryOperations, DriveOperations, FileOperations, PathOperations};

/// FileSystem port - the single injection point for consumers
///
/// Consumer code takes a `FileSystem` (generic or `Arc<dyn FileSystem>`) and
/// reaches every other port through it. Production wiring passes
/// `NativeFileSystem`; tests pass `InMemoryFileSystem` or a hand-written mock.
pub trait FileSystem: Send + Sync {
    fn file(&self) -> &dyn FileOperations;

    fn directory(&self) -> &dyn DirectoryOperations;

    fn path(&self) -> &dyn PathOperations;

    fn drive(&self) -> &dyn DriveOperations;
}
