/// Domain layer - value types shared by every filesystem port
///
/// Nothing here performs I/O; these types describe requests to and answers from
/// the platform.
pub mod drive_type;
pub mod file_attributes;
pub mod open_request;
pub mod search_pattern;
pub mod text_encoding;

pub use drive_type::DriveType;
pub use file_attributes::FileAttributes;
pub use open_request::{FileAccess, FileMode, FileShare, OpenRequest};
pub use search_pattern::{EntryKind, SearchOption, SearchPattern};
pub use text_encoding::TextEncoding;

/// Line terminator used by text writers and `write_all_lines`.
#[cfg(windows)]
pub const NEWLINE: &str = "\r\n";

/// Line terminator used by text writers and `write_all_lines`.
#[cfg(not(windows))]
pub const NEWLINE: &str = "\n";
