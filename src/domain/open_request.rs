use std::fs::OpenOptions;

use crate::shared::error::FsError;
use crate::shared::Result;

/// How the platform should treat an existing (or missing) file when opening it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMode {
    /// Create a new file; fail if it already exists.
    CreateNew,
    /// Create a new file, truncating any existing one.
    Create,
    /// Open an existing file; fail if it does not exist.
    Open,
    /// Open the file if it exists, otherwise create it.
    OpenOrCreate,
    /// Open an existing file and truncate it to zero length.
    Truncate,
    /// Open or create the file and position writes at its end.
    Append,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAccess {
    Read,
    Write,
    ReadWrite,
}

impl FileAccess {
    pub fn can_read(&self) -> bool {
        matches!(self, FileAccess::Read | FileAccess::ReadWrite)
    }

    pub fn can_write(&self) -> bool {
        matches!(self, FileAccess::Write | FileAccess::ReadWrite)
    }
}

/// Sharing granted to other handles while this one is open.
///
/// Honoured on Windows; advisory on every other platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileShare {
    None,
    #[default]
    Read,
    Write,
    ReadWrite,
    Delete,
}

impl FileShare {
    /// Windows `FILE_SHARE_*` flags.
    pub fn share_mode_flags(&self) -> u32 {
        const FILE_SHARE_READ: u32 = 0x1;
        const FILE_SHARE_WRITE: u32 = 0x2;
        const FILE_SHARE_DELETE: u32 = 0x4;
        match self {
            FileShare::None => 0,
            FileShare::Read => FILE_SHARE_READ,
            FileShare::Write => FILE_SHARE_WRITE,
            FileShare::ReadWrite => FILE_SHARE_READ | FILE_SHARE_WRITE,
            FileShare::Delete => FILE_SHARE_DELETE,
        }
    }
}

/// Mode, access and sharing requested for a file handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenRequest {
    pub mode: FileMode,
    pub access: FileAccess,
    pub share: FileShare,
}

impl OpenRequest {
    pub fn new(mode: FileMode, access: FileAccess) -> Self {
        Self {
            mode,
            access,
            share: FileShare::default(),
        }
    }

    pub fn with_share(mut self, share: FileShare) -> Self {
        self.share = share;
        self
    }

    /// Open an existing file for reading.
    pub fn read() -> Self {
        Self::new(FileMode::Open, FileAccess::Read)
    }

    /// Create or truncate a file for writing.
    pub fn create() -> Self {
        Self::new(FileMode::Create, FileAccess::Write)
    }

    /// Open or create a file, appending writes.
    pub fn append() -> Self {
        Self::new(FileMode::Append, FileAccess::Write)
    }

    /// Rejects mode/access combinations the platform cannot satisfy.
    pub fn validate(&self) -> Result<()> {
        match self.mode {
            FileMode::Append if self.access != FileAccess::Write => {
                Err(FsError::InvalidOpenOptions {
                    details: format!(
                        "{:?} mode requires Write access, got {:?}",
                        self.mode, self.access
                    ),
                })
            }
            FileMode::CreateNew | FileMode::Create | FileMode::OpenOrCreate | FileMode::Truncate
                if !self.access.can_write() =>
            {
                Err(FsError::InvalidOpenOptions {
                    details: format!(
                        "{:?} mode requires write access, got {:?}",
                        self.mode, self.access
                    ),
                })
            }
            _ => Ok(()),
        }
    }

    /// Translates the request into `std::fs::OpenOptions`.
    pub fn to_open_options(&self) -> Result<OpenOptions> {
        self.validate()?;

        let mut options = OpenOptions::new();
        options
            .read(self.access.can_read())
            .write(self.access.can_write());

        match self.mode {
            FileMode::CreateNew => {
                options.create_new(true);
            }
            FileMode::Create => {
                options.create(true).truncate(true);
            }
            FileMode::Open => {}
            FileMode::OpenOrCreate => {
                options.create(true);
            }
            FileMode::Truncate => {
                options.truncate(true);
            }
            FileMode::Append => {
                options.append(true).create(true);
            }
        }

        #[cfg(windows)]
        {
            use std::os::windows::fs::OpenOptionsExt;
            options.share_mode(self.share.share_mode_flags());
        }

        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use tempfile::TempDir;

    #[test]
    fn test_append_requires_write_access() {
        let request = OpenRequest::new(FileMode::Append, FileAccess::ReadWrite);
        let result = request.validate();
        assert!(matches!(result, Err(FsError::InvalidOpenOptions { .. })));

        assert!(OpenRequest::append().validate().is_ok());
    }

    #[test]
    fn test_create_modes_require_write_access() {
        for mode in [
            FileMode::CreateNew,
            FileMode::Create,
            FileMode::OpenOrCreate,
            FileMode::Truncate,
        ] {
            let request = OpenRequest::new(mode, FileAccess::Read);
            assert!(request.validate().is_err(), "{:?} accepted Read", mode);
        }
        assert!(OpenRequest::read().validate().is_ok());
    }

    #[test]
    fn test_create_new_fails_on_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("existing.txt");
        std::fs::write(&path, "data").unwrap();

        let options = OpenRequest::new(FileMode::CreateNew, FileAccess::Write)
            .to_open_options()
            .unwrap();
        let err = options.open(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_append_mode_appends() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("log.txt");
        std::fs::write(&path, "one").unwrap();

        let mut file = OpenRequest::append().to_open_options().unwrap().open(&path).unwrap();
        file.write_all(b"two").unwrap();
        drop(file);

        let mut content = String::new();
        OpenRequest::read()
            .to_open_options()
            .unwrap()
            .open(&path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "onetwo");
    }

    #[test]
    fn test_share_mode_flags() {
        assert_eq!(FileShare::None.share_mode_flags(), 0);
        assert_eq!(FileShare::ReadWrite.share_mode_flags(), 0x3);
        assert_eq!(FileShare::default(), FileShare::Read);
    }
}
