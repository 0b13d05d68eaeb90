use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

use crate::domain::{DriveType, FileAttributes};

/// Kind of entry found at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    File,
    Directory,
    Missing,
}

/// Metadata snapshot of one file or directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryStat {
    pub path: PathBuf,
    pub entry_type: EntryType,
    /// Size in bytes; `None` for directories.
    pub length: Option<u64>,
    pub attributes: FileAttributes,
    pub last_write_time: DateTime<Utc>,
}

/// Description of a mounted volume. Capacity figures are `None` when the
/// volume cannot be queried.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriveSummary {
    pub name: String,
    pub root_directory: PathBuf,
    pub drive_type: DriveType,
    pub drive_format: String,
    pub volume_label: String,
    pub is_ready: bool,
    pub total_size: Option<u64>,
    pub total_free_space: Option<u64>,
    pub available_free_space: Option<u64>,
}

/// Result of executing an `FsCommand`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommandResponse {
    Exists { path: PathBuf, entry_type: EntryType },
    Entries { path: PathBuf, entries: Vec<PathBuf> },
    Text { path: PathBuf, content: String },
    /// A mutating command finished; `message` describes what changed.
    Done { message: String },
    Stat(EntryStat),
    Drives { drives: Vec<DriveSummary> },
    Path { path: PathBuf },
    Name { name: String },
}
