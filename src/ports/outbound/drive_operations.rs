use std::fmt::Debug;
use std::path::PathBuf;

use crate::domain::DriveType;
use crate::shared::Result;

/// A mounted volume.
///
/// Capacity figures are read from the platform on every call.
pub trait DriveInfo: Send + Sync + Debug {
    /// Drive name; the mount point on Unix, e.g. `C:\` on Windows.
    fn name(&self) -> String;

    fn root_directory(&self) -> PathBuf;

    fn drive_type(&self) -> DriveType;

    /// Filesystem format, e.g. `ext4`, `NTFS`.
    fn drive_format(&self) -> String;

    /// True when the volume can be queried.
    fn is_ready(&self) -> bool;

    fn volume_label(&self) -> String;

    /// Total capacity in bytes.
    fn total_size(&self) -> Result<u64>;

    /// Free bytes on the volume, including space reserved for privileged users.
    fn total_free_space(&self) -> Result<u64>;

    /// Free bytes available to the current user.
    fn available_free_space(&self) -> Result<u64>;
}

/// DriveOperations port for enumerating volumes
pub trait DriveOperations: Send + Sync {
    /// Lists every mounted volume.
    fn get_drives(&self) -> Result<Vec<Box<dyn DriveInfo>>>;

    /// Looks up a volume by name or root directory.
    ///
    /// # Errors
    /// Returns `FsError::DriveNotFound` when no mounted volume matches.
    fn get_drive(&self, name: &str) -> Result<Box<dyn DriveInfo>>;
}
