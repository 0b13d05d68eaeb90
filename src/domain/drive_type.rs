use serde::Serialize;
use std::fmt;

/// Kind of volume behind a drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveType {
    Unknown,
    NoRootDirectory,
    Removable,
    Fixed,
    Network,
    CdRom,
    Ram,
}

impl DriveType {
    /// Classifies a volume from its filesystem type name (e.g. `ext4`, `nfs4`, `tmpfs`).
    pub fn from_fs_type(fs_type: &str) -> Self {
        match fs_type.to_lowercase().as_str() {
            "" => DriveType::Unknown,
            "nfs" | "nfs4" | "cifs" | "smb" | "smb2" | "smbfs" | "sshfs" | "fuse.sshfs"
            | "9p" | "afs" | "ncpfs" => DriveType::Network,
            "iso9660" | "udf" => DriveType::CdRom,
            "tmpfs" | "ramfs" | "devtmpfs" | "proc" | "sysfs" | "devpts" | "cgroup"
            | "cgroup2" | "mqueue" | "securityfs" | "debugfs" | "tracefs" | "pstore"
            | "bpf" | "configfs" | "hugetlbfs" | "fusectl" | "binfmt_misc" | "autofs" => {
                DriveType::Ram
            }
            "vfat" | "exfat" | "msdos" => DriveType::Removable,
            _ => DriveType::Fixed,
        }
    }
}

impl fmt::Display for DriveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DriveType::Unknown => "unknown",
            DriveType::NoRootDirectory => "no root directory",
            DriveType::Removable => "removable",
            DriveType::Fixed => "fixed",
            DriveType::Network => "network",
            DriveType::CdRom => "cd-rom",
            DriveType::Ram => "ram",
        };
        f.write_str(name)
    }
}
