/// Outbound ports (Driven ports) - Filesystem and presentation interfaces
///
/// These ports define the interfaces that consumer code uses to reach the
/// file system, so that tests can substitute fakes for the platform.
pub mod directory_operations;
pub mod drive_operations;
pub mod file_operations;
pub mod file_system;
pub mod file_system_info;
pub mod output_presenter;
pub mod path_operations;
pub mod response_formatter;
pub mod text_stream;

pub use directory_operations::DirectoryOperations;
pub use drive_operations::{DriveInfo, DriveOperations};
pub use file_operations::{FileHandle, FileOperations};
pub use file_system::FileSystem;
pub use file_system_info::{DirectoryInfo, FileInfo, FileSystemInfo};
pub use output_presenter::OutputPresenter;
pub use path_operations::PathOperations;
pub use response_formatter::ResponseFormatter;
pub use text_stream::{TextReader, TextWriter};
