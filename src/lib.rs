//! fs-facade - mockable file system access
//!
//! This library puts the operating system's file, directory, path, drive and
//! text-stream primitives behind traits, so that code which touches the disk
//! can be tested against an in-memory fake instead.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`domain`): Value types such as `OpenRequest`, `FileAttributes` and `SearchPattern`
//! - **Ports** (`ports`): The traits consumer code depends on, reached through `FileSystem`
//! - **Adapters** (`adapters`): The native implementation, the in-memory fake, text streams and logging decorators
//! - **Application Layer** (`application`): Handle factory, command use case and output rendering
//! - **Shared** (`shared`): Common error and result types
//!
//! # Example
//!
//! ```
//! use fs_facade::prelude::*;
//! use std::path::Path;
//!
//! fn count_lines(fs: &dyn FileSystem, path: &Path) -> Result<usize> {
//!     Ok(fs.file().read_all_lines(path, None)?.len())
//! }
//!
//! # fn main() -> Result<()> {
//! let fake = InMemoryFileSystem::new().with_file("/log.txt", "a\nb\nc\n");
//! assert_eq!(count_lines(&fake, Path::new("/log.txt"))?, 3);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::decorators::{LoggingTextReader, LoggingTextWriter};
    pub use crate::adapters::outbound::info::{FsDirectoryInfo, FsFileInfo};
    pub use crate::adapters::outbound::memory::{FakeDrive, InMemoryFileSystem};
    pub use crate::adapters::outbound::native::NativeFileSystem;
    pub use crate::adapters::outbound::streams::{StreamTextReader, StreamTextWriter};
    pub use crate::application::factories::InfoFactory;
    pub use crate::domain::{
        DriveType, FileAccess, FileAttributes, FileMode, FileShare, OpenRequest, SearchOption,
        TextEncoding,
    };
    pub use crate::ports::outbound::{
        DirectoryInfo, DirectoryOperations, DriveInfo, DriveOperations, FileHandle, FileInfo,
        FileOperations, FileSystem, FileSystemInfo, PathOperations, TextReader, TextWriter,
    };
    pub use crate::shared::error::{FsError, FsErrorKind};
    pub use crate::shared::Result;
}
