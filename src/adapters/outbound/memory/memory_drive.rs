use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::state::MemoryState;
use crate::domain::DriveType;
use crate::ports::outbound::{DriveInfo, DriveOperations};
use crate::shared::error::FsError;
use crate::shared::Result;

/// A scripted volume for tests.
///
/// Defaults to a ready, fixed drive with zero capacity; use the builder
/// methods to describe anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeDrive {
    name: String,
    root_directory: PathBuf,
    drive_type: DriveType,
    drive_format: String,
    volume_label: String,
    total_size: u64,
    total_free_space: u64,
    available_free_space: u64,
    is_ready: bool,
}

impl FakeDrive {
    pub fn new(root_directory: impl Into<PathBuf>) -> Self {
        let root_directory = root_directory.into();
        Self {
            name: root_directory.display().to_string(),
            root_directory,
            drive_type: DriveType::Fixed,
            drive_format: "memfs".to_string(),
            volume_label: String::new(),
            total_size: 0,
            total_free_space: 0,
            available_free_space: 0,
            is_ready: true,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_drive_type(mut self, drive_type: DriveType) -> Self {
        self.drive_type = drive_type;
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.drive_format = format.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.volume_label = label.into();
        self
    }

    /// Sets total, free and user-available bytes.
    pub fn with_capacity(mut self, total: u64, free: u64, available: u64) -> Self {
        self.total_size = total;
        self.total_free_space = free;
        self.available_free_space = available;
        self
    }

    /// Marks the drive as not ready; capacity queries then fail.
    pub fn not_ready(mut self) -> Self {
        self.is_ready = false;
        self
    }

    pub(super) fn name_str(&self) -> &str {
        &self.name
    }

    fn matches(&self, name: &str) -> bool {
        self.name == name || self.root_directory == Path::new(name)
    }

    fn ready_value(&self, value: u64) -> Result<u64> {
        if self.is_ready {
            Ok(value)
        } else {
            Err(io::Error::other(format!("drive {} is not ready", self.name)).into())
        }
    }
}

impl DriveInfo for FakeDrive {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn root_directory(&self) -> PathBuf {
        self.root_directory.clone()
    }

    fn drive_type(&self) -> DriveType {
        self.drive_type
    }

    fn drive_format(&self) -> String {
        self.drive_format.clone()
    }

    fn is_ready(&self) -> bool {
        self.is_ready
    }

    fn volume_label(&self) -> String {
        self.volume_label.clone()
    }

    fn total_size(&self) -> Result<u64> {
        self.ready_value(self.total_size)
    }

    fn total_free_space(&self) -> Result<u64> {
        self.ready_value(self.total_free_space)
    }

    fn available_free_space(&self) -> Result<u64> {
        self.ready_value(self.available_free_space)
    }
}

/// Drive port of the in-memory filesystem
#[derive(Debug, Clone)]
pub struct MemoryDrive {
    state: Arc<MemoryState>,
}

impl MemoryDrive {
    pub(super) fn new(state: Arc<MemoryState>) -> Self {
        Self { state }
    }
}

impl DriveOperations for MemoryDrive {
    fn get_drives(&self) -> Result<Vec<Box<dyn DriveInfo>>> {
        Ok(self
            .state
            .drives()
            .into_iter()
            .map(|drive| Box::new(drive) as Box<dyn DriveInfo>)
            .collect())
    }

    fn get_drive(&self, name: &str) -> Result<Box<dyn DriveInfo>> {
        self.state
            .drives()
            .into_iter()
            .find(|drive| drive.matches(name))
            .map(|drive| Box::new(drive) as Box<dyn DriveInfo>)
            .ok_or_else(|| FsError::DriveNotFound {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_drive_is_root() {
        let drives = MemoryDrive::new(Arc::new(MemoryState::new()))
            .get_drives()
            .unwrap();
        assert_eq!(drives.len(), 1);
        assert!(drives[0].is_ready());
        assert_eq!(drives[0].drive_format(), "memfs");
    }

    #[test]
    fn test_add_and_lookup_drive() {
        let state = Arc::new(MemoryState::new());
        state.add_drive(
            FakeDrive::new("/mnt/usb")
                .with_drive_type(DriveType::Removable)
                .with_format("vfat")
                .with_label("USB")
                .with_capacity(1000, 400, 300),
        );
        let drive_port = MemoryDrive::new(state);

        let usb = drive_port.get_drive("/mnt/usb").unwrap();
        assert_eq!(usb.drive_type(), DriveType::Removable);
        assert_eq!(usb.volume_label(), "USB");
        assert_eq!(usb.total_size().unwrap(), 1000);
        assert_eq!(usb.total_free_space().unwrap(), 400);
        assert_eq!(usb.available_free_space().unwrap(), 300);
        assert_eq!(drive_port.get_drives().unwrap().len(), 2);
    }

    #[test]
    fn test_not_ready_drive_fails_capacity() {
        let drive = FakeDrive::new("/cdrom").with_drive_type(DriveType::CdRom).not_ready();
        assert!(!drive.is_ready());
        assert!(drive.total_size().is_err());
    }

    #[test]
    fn test_unknown_drive() {
        let err = MemoryDrive::new(Arc::new(MemoryState::new()))
            .get_drive("Z:")
            .unwrap_err();
        assert!(matches!(err, FsError::DriveNotFound { .. }));
    }
}
