/// Native adapters backed by `std::fs`, `std::env` and the platform mount table
mod metadata;
mod native_directory;
mod native_drive;
mod native_file;
mod native_file_system;
mod native_path;

pub use native_directory::NativeDirectory;
pub use native_drive::{NativeDrive, NativeDriveInfo};
pub use native_file::{NativeFile, NativeFileHandle};
pub use native_file_system::NativeFileSystem;
pub use native_path::NativePath;
