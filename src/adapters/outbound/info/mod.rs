/// File and directory references bound to a `FileSystem`
mod fs_directory_info;
mod fs_file_info;

pub use fs_directory_info::FsDirectoryInfo;
pub use fs_file_info::FsFileInfo;
