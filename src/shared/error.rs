use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::TextEncoding;

/// Coarse classification of a filesystem failure.
///
/// Callers that only care about "what went wrong" can match on this instead of
/// digging into the wrapped `std::io::Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsErrorKind {
    NotFound,
    AccessDenied,
    AlreadyExists,
    InvalidPath,
    Io,
}

impl fmt::Display for FsErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsErrorKind::NotFound => write!(f, "not found"),
            FsErrorKind::AccessDenied => write!(f, "access denied"),
            FsErrorKind::AlreadyExists => write!(f, "already exists"),
            FsErrorKind::InvalidPath => write!(f, "invalid path"),
            FsErrorKind::Io => write!(f, "i/o failure"),
        }
    }
}

/// Errors produced by the filesystem ports.
///
/// Platform failures travel through `Io` untouched. The remaining variants
/// cover arguments rejected before any platform call is made.
#[derive(Debug, Error)]
pub enum FsError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("Invalid path: {path}\nReason: {reason}")]
    InvalidPath { path: PathBuf, reason: String },

    #[error("Invalid search pattern: '{pattern}'\nReason: {reason}")]
    InvalidSearchPattern { pattern: String, reason: String },

    #[error("Invalid open options: {details}")]
    InvalidOpenOptions { details: String },

    #[error("Unsupported encoding: '{name}'\n\n💡 Hint: Use one of utf-8, utf-8-bom, utf-16le, utf-16be, latin1")]
    UnsupportedEncoding { name: String },

    #[error("Failed to decode text as {encoding}: {details}")]
    Decode {
        encoding: TextEncoding,
        details: String,
    },

    #[error("Failed to encode text as {encoding}: {details}")]
    Encode {
        encoding: TextEncoding,
        details: String,
    },

    #[error("Drive not found: {name}")]
    DriveNotFound { name: String },

    #[error("Failed to render output: {details}")]
    Render { details: String },
}

impl FsError {
    /// Classifies the error.
    pub fn kind(&self) -> FsErrorKind {
        match self {
            FsError::Io(e) => match e.kind() {
                io::ErrorKind::NotFound => FsErrorKind::NotFound,
                io::ErrorKind::PermissionDenied => FsErrorKind::AccessDenied,
                io::ErrorKind::AlreadyExists => FsErrorKind::AlreadyExists,
                io::ErrorKind::InvalidInput => FsErrorKind::InvalidPath,
                _ => FsErrorKind::Io,
            },
            FsError::InvalidPath { .. } | FsError::InvalidSearchPattern { .. } => {
                FsErrorKind::InvalidPath
            }
            FsError::DriveNotFound { .. } => FsErrorKind::NotFound,
            FsError::InvalidOpenOptions { .. }
            | FsError::UnsupportedEncoding { .. }
            | FsError::Decode { .. }
            | FsError::Encode { .. }
            | FsError::Render { .. } => FsErrorKind::Io,
        }
    }

    /// Returns the underlying platform error, if this error came from one.
    pub fn as_io(&self) -> Option<&io::Error> {
        match self {
            FsError::Io(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the `io::ErrorKind` of the underlying platform error, if any.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        self.as_io().map(io::Error::kind)
    }
}

impl From<FsError> for io::Error {
    fn from(err: FsError) -> Self {
        match err {
            FsError::Io(e) => e,
            FsError::InvalidPath { .. } | FsError::InvalidSearchPattern { .. } => {
                io::Error::new(io::ErrorKind::InvalidInput, err)
            }
            FsError::InvalidOpenOptions { .. } | FsError::UnsupportedEncoding { .. } => {
                io::Error::new(io::ErrorKind::InvalidInput, err)
            }
            FsError::Decode { .. } | FsError::Encode { .. } => {
                io::Error::new(io::ErrorKind::InvalidData, err)
            }
            FsError::DriveNotFound { .. } => io::Error::new(io::ErrorKind::NotFound, err),
            FsError::Render { .. } => io::Error::other(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_is_transparent() {
        let error = FsError::from(io::Error::new(io::ErrorKind::NotFound, "no such file"));
        assert_eq!(format!("{}", error), "no such file");
        assert_eq!(error.kind(), FsErrorKind::NotFound);
        assert_eq!(error.io_kind(), Some(io::ErrorKind::NotFound));
    }

    #[test]
    fn test_kind_classification() {
        let denied = FsError::from(io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(denied.kind(), FsErrorKind::AccessDenied);

        let exists = FsError::from(io::Error::from(io::ErrorKind::AlreadyExists));
        assert_eq!(exists.kind(), FsErrorKind::AlreadyExists);

        let other = FsError::from(io::Error::from(io::ErrorKind::UnexpectedEof));
        assert_eq!(other.kind(), FsErrorKind::Io);

        let drive = FsError::DriveNotFound {
            name: "Z:".to_string(),
        };
        assert_eq!(drive.kind(), FsErrorKind::NotFound);
        assert!(drive.as_io().is_none());
    }

    #[test]
    fn test_invalid_search_pattern_display() {
        let error = FsError::InvalidSearchPattern {
            pattern: "../*".to_string(),
            reason: "must not contain '..'".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid search pattern"));
        assert!(display.contains("../*"));
        assert!(display.contains("must not contain"));
        assert_eq!(error.kind(), FsErrorKind::InvalidPath);
    }

    #[test]
    fn test_unsupported_encoding_display() {
        let error = FsError::UnsupportedEncoding {
            name: "ebcdic".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("ebcdic"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_decode_error_display() {
        let error = FsError::Decode {
            encoding: TextEncoding::Utf8,
            details: "invalid byte 0xff".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("utf-8"));
        assert!(display.contains("0xff"));
    }

    #[test]
    fn test_into_io_error_round_trips_platform_error() {
        let original = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let back: io::Error = FsError::from(original).into();
        assert_eq!(back.kind(), io::ErrorKind::PermissionDenied);
        assert_eq!(back.to_string(), "denied");
    }

    #[test]
    fn test_into_io_error_for_argument_errors() {
        let err: io::Error = FsError::InvalidOpenOptions {
            details: "append requires write access".to_string(),
        }
        .into();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

        let err: io::Error = FsError::DriveNotFound {
            name: "/mnt/none".to_string(),
        }
        .into();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
