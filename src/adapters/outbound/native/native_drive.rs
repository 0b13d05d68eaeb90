use std::io;
use std::path::{Path, PathBuf};

use crate::domain::DriveType;
use crate::ports::outbound::{DriveInfo, DriveOperations};
use crate::shared::error::FsError;
use crate::shared::Result;

/// Mount table read by `get_drives` on Linux
#[cfg(target_os = "linux")]
const MOUNT_TABLE: &str = "/proc/self/mounts";

/// A mounted volume as listed by the platform.
///
/// Only the identity of the mount is stored; capacity and readiness are read
/// from the platform on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeDriveInfo {
    device: String,
    mount_point: PathBuf,
    fs_type: String,
}

impl NativeDriveInfo {
    pub fn new(device: impl Into<String>, mount_point: PathBuf, fs_type: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            mount_point,
            fs_type: fs_type.into(),
        }
    }

    fn capacity(&self) -> Result<Capacity> {
        statvfs(&self.mount_point)
    }
}

impl DriveInfo for NativeDriveInfo {
    fn name(&self) -> String {
        self.mount_point.display().to_string()
    }

    fn root_directory(&self) -> PathBuf {
        self.mount_point.clone()
    }

    fn drive_type(&self) -> DriveType {
        DriveType::from_fs_type(&self.fs_type)
    }

    fn drive_format(&self) -> String {
        self.fs_type.clone()
    }

    fn is_ready(&self) -> bool {
        self.capacity().is_ok()
    }

    fn volume_label(&self) -> String {
        self.device.clone()
    }

    fn total_size(&self) -> Result<u64> {
        Ok(self.capacity()?.total)
    }

    fn total_free_space(&self) -> Result<u64> {
        Ok(self.capacity()?.free)
    }

    fn available_free_space(&self) -> Result<u64> {
        Ok(self.capacity()?.available)
    }
}

#[derive(Debug, Clone, Copy)]
struct Capacity {
    total: u64,
    free: u64,
    available: u64,
}

#[cfg(unix)]
#[allow(clippy::unnecessary_cast)]
fn statvfs(path: &Path) -> Result<Capacity> {
    let stats = nix::sys::statvfs::statvfs(path).map_err(io::Error::from)?;

    let fragment = stats.fragment_size() as u64;
    Ok(Capacity {
        total: stats.blocks() as u64 * fragment,
        free: stats.blocks_free() as u64 * fragment,
        available: stats.blocks_available() as u64 * fragment,
    })
}

#[cfg(not(unix))]
fn statvfs(_path: &Path) -> Result<Capacity> {
    Err(unsupported().into())
}

#[cfg_attr(target_os = "linux", allow(dead_code))]
fn unsupported() -> io::Error {
    io::Error::new(
        io::ErrorKind::Unsupported,
        "drive enumeration is not supported on this platform",
    )
}

/// Parses mount table lines of the form
/// `device mount_point fs_type options dump pass`.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
pub(crate) fn parse_mount_table(content: &str) -> Vec<NativeDriveInfo> {
    content
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let device = fields.next()?;
            let mount_point = fields.next()?;
            let fs_type = fields.next()?;
            Some(NativeDriveInfo::new(
                unescape_mount_field(device),
                PathBuf::from(unescape_mount_field(mount_point)),
                fs_type,
            ))
        })
        .collect()
}

/// Decodes the `\NNN` octal escapes the kernel uses for spaces, tabs and
/// backslashes in mount table fields.
fn unescape_mount_field(field: &str) -> String {
    let bytes = field.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'\\' && i + 3 < bytes.len() && is_octal_escape(&bytes[i + 1..i + 4]) {
            let value = (bytes[i + 1] - b'0') * 64 + (bytes[i + 2] - b'0') * 8 + (bytes[i + 3] - b'0');
            out.push(value);
            i += 4;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn is_octal_escape(digits: &[u8]) -> bool {
    digits.len() == 3
        && digits[0] <= b'3'
        && digits.iter().all(|d| (b'0'..=b'7').contains(d))
}

/// NativeDrive adapter listing the volumes mounted on this machine
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeDrive;

impl NativeDrive {
    pub fn new() -> Self {
        Self
    }

    #[cfg(target_os = "linux")]
    fn mounted(&self) -> Result<Vec<NativeDriveInfo>> {
        let content = std::fs::read_to_string(MOUNT_TABLE)?;
        Ok(parse_mount_table(&content))
    }

    #[cfg(not(target_os = "linux"))]
    fn mounted(&self) -> Result<Vec<NativeDriveInfo>> {
        Err(unsupported().into())
    }
}

impl DriveOperations for NativeDrive {
    fn get_drives(&self) -> Result<Vec<Box<dyn DriveInfo>>> {
        Ok(self
            .mounted()?
            .into_iter()
            .map(|drive| Box::new(drive) as Box<dyn DriveInfo>)
            .collect())
    }

    fn get_drive(&self, name: &str) -> Result<Box<dyn DriveInfo>> {
        // Later mounts shadow earlier ones on the same mount point.
        self.mounted()?
            .into_iter()
            .rev()
            .find(|drive| drive_matches(drive, name))
            .map(|drive| Box::new(drive) as Box<dyn DriveInfo>)
            .ok_or_else(|| FsError::DriveNotFound {
                name: name.to_string(),
            })
    }
}

fn drive_matches(drive: &NativeDriveInfo, name: &str) -> bool {
    drive.mount_point == Path::new(name) || drive.device == name
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_MOUNTS: &str = "\
/dev/sda1 / ext4 rw,relatime 0 0
proc /proc proc rw,nosuid,nodev,noexec,relatime 0 0
tmpfs /run/user/1000 tmpfs rw,nosuid,nodev 0 0
server:/export /mnt/my\\040share nfs4 rw 0 0
";

    #[test]
    fn test_parse_mount_table() {
        let drives = parse_mount_table(SAMPLE_MOUNTS);
        assert_eq!(drives.len(), 4);

        assert_eq!(drives[0].name(), "/");
        assert_eq!(drives[0].volume_label(), "/dev/sda1");
        assert_eq!(drives[0].drive_format(), "ext4");
        assert_eq!(drives[0].drive_type(), DriveType::Fixed);

        assert_eq!(drives[1].drive_type(), DriveType::Ram);
        assert_eq!(drives[3].root_directory(), PathBuf::from("/mnt/my share"));
        assert_eq!(drives[3].drive_type(), DriveType::Network);
    }

    #[test]
    fn test_parse_skips_malformed_lines() {
        let drives = parse_mount_table("only-one-field\n\n/dev/sdb1 /data\n/dev/sdc1 /srv xfs rw 0 0\n");
        assert_eq!(drives.len(), 1);
        assert_eq!(drives[0].root_directory(), PathBuf::from("/srv"));
    }

    #[test]
    fn test_unescape_mount_field() {
        assert_eq!(unescape_mount_field("a\\040b\\011c"), "a b\tc");
        assert_eq!(unescape_mount_field("back\\134slash"), "back\\slash");
        assert_eq!(unescape_mount_field("trailing\\04"), "trailing\\04");
        assert_eq!(unescape_mount_field("plain"), "plain");
    }

    #[cfg(unix)]
    #[test]
    fn test_root_capacity_is_consistent() {
        let root = NativeDriveInfo::new("rootfs", PathBuf::from("/"), "ext4");
        assert!(root.is_ready());
        let total = root.total_size().unwrap();
        let free = root.total_free_space().unwrap();
        let available = root.available_free_space().unwrap();
        assert!(free <= total);
        assert!(available <= free);
    }

    #[cfg(unix)]
    #[test]
    fn test_missing_mount_point_is_not_ready() {
        let drive = NativeDriveInfo::new("none", PathBuf::from("/definitely/not/mounted"), "ext4");
        assert!(!drive.is_ready());
        let err = drive.total_size().unwrap_err();
        assert!(matches!(&err, FsError::Io(e) if e.kind() == io::ErrorKind::NotFound));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_get_drives_lists_root() {
        let drives = NativeDrive::new().get_drives().unwrap();
        assert!(drives.iter().any(|d| d.root_directory() == Path::new("/")));

        let root = NativeDrive::new().get_drive("/").unwrap();
        assert_eq!(root.name(), "/");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_get_unknown_drive() {
        let err = NativeDrive::new().get_drive("/no/such/mount").unwrap_err();
        assert!(matches!(err, FsError::DriveNotFound { .. }));
    }
}
