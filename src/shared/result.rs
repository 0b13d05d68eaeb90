use crate::shared::error::FsError;

/// Type alias for Result with FsError as the error type.
/// Every port and adapter in the library returns this.
pub type Result<T> = std::result::Result<T, FsError>;
