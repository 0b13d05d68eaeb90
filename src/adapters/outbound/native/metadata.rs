use chrono::{DateTime, Utc};
use std::fs::{self, File, Metadata};
use std::io;
use std::path::Path;
use std::time::SystemTime;

use crate::domain::FileAttributes;
use crate::shared::Result;

/// Reads attributes, following symlinks for everything but the symlink flag.
pub(super) fn read_attributes(path: &Path) -> Result<FileAttributes> {
    let link_metadata = fs::symlink_metadata(path)?;
    let metadata = if link_metadata.is_symlink() {
        fs::metadata(path)?
    } else {
        link_metadata.clone()
    };

    Ok(FileAttributes::new(
        metadata.permissions().readonly(),
        is_hidden(path, &metadata),
        metadata.is_dir(),
        link_metadata.is_symlink(),
    ))
}

#[cfg(windows)]
fn is_hidden(_path: &Path, metadata: &Metadata) -> bool {
    use std::os::windows::fs::MetadataExt;
    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
    metadata.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0
}

#[cfg(not(windows))]
fn is_hidden(path: &Path, _metadata: &Metadata) -> bool {
    path.file_name()
        .map(|name| FileAttributes::is_hidden_name(&name.to_string_lossy()))
        .unwrap_or(false)
}

/// Applies the `read_only` flag.
pub(super) fn write_read_only(path: &Path, read_only: bool) -> Result<()> {
    let mut permissions = fs::metadata(path)?.permissions();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = permissions.mode();
        let mode = if read_only { mode & !0o222 } else { mode | 0o200 };
        permissions.set_mode(mode);
    }

    #[cfg(not(unix))]
    permissions.set_readonly(read_only);

    fs::set_permissions(path, permissions)?;
    Ok(())
}

/// File size from metadata; directories are rejected the way `open` would.
pub(super) fn read_length(path: &Path) -> Result<u64> {
    let metadata = fs::metadata(path)?;
    if metadata.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::IsADirectory,
            format!("Is a directory: {}", path.display()),
        )
        .into());
    }
    Ok(metadata.len())
}

pub(super) fn read_modified(path: &Path) -> Result<DateTime<Utc>> {
    let modified = fs::metadata(path)?.modified()?;
    Ok(DateTime::<Utc>::from(modified))
}

pub(super) fn write_modified(path: &Path, time: DateTime<Utc>) -> Result<()> {
    let handle = open_for_timestamps(path)?;
    handle.set_modified(SystemTime::from(time))?;
    Ok(())
}

#[cfg(windows)]
fn open_for_timestamps(path: &Path) -> Result<File> {
    use std::os::windows::fs::OpenOptionsExt;
    const FILE_WRITE_ATTRIBUTES: u32 = 0x100;
    const FILE_FLAG_BACKUP_SEMANTICS: u32 = 0x0200_0000;
    let file = fs::OpenOptions::new()
        .access_mode(FILE_WRITE_ATTRIBUTES)
        .custom_flags(FILE_FLAG_BACKUP_SEMANTICS)
        .open(path)?;
    Ok(file)
}

#[cfg(not(windows))]
fn open_for_timestamps(path: &Path) -> Result<File> {
    Ok(File::open(path)?)
}
