/// In-memory fake of every filesystem port, for tests
mod in_memory_file_system;
mod memory_directory;
mod memory_drive;
mod memory_file;
mod memory_file_handle;
mod memory_path;
mod state;

pub use in_memory_file_system::InMemoryFileSystem;
pub use memory_directory::MemoryDirectory;
pub use memory_drive::{FakeDrive, MemoryDrive};
pub use memory_file::MemoryFile;
pub use memory_file_handle::MemoryFileHandle;
pub use memory_path::MemoryPath;
