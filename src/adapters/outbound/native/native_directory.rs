use chrono::{DateTime, Utc};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::metadata;
use crate::domain::{EntryKind, SearchOption, SearchPattern};
use crate::ports::outbound::DirectoryOperations;
use crate::shared::Result;

/// NativeDirectory adapter delegating directory operations to `std::fs` and
/// `std::env`
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeDirectory;

impl NativeDirectory {
    pub fn new() -> Self {
        Self
    }

    fn enumerate(
        &self,
        path: &Path,
        pattern: Option<&str>,
        option: SearchOption,
        kind: EntryKind,
    ) -> Result<Vec<PathBuf>> {
        let pattern = SearchPattern::from_option(pattern)?;
        let mut entries = Vec::new();
        collect_entries(path, &pattern, option, kind, &mut entries)?;
        entries.sort();
        Ok(entries)
    }
}

/// Walks `dir`, pushing matching entries. Symlinked directories are reported
/// but never descended into.
fn collect_entries(
    dir: &Path,
    pattern: &SearchPattern,
    option: SearchOption,
    kind: EntryKind,
    entries: &mut Vec<PathBuf>,
) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let file_type = entry.file_type()?;
        let is_directory = if file_type.is_symlink() {
            path.is_dir()
        } else {
            file_type.is_dir()
        };

        let name = entry.file_name();
        if kind.accepts(is_directory) && pattern.matches(&name.to_string_lossy()) {
            entries.push(path.clone());
        }

        if option.is_recursive() && file_type.is_dir() {
            collect_entries(&path, pattern, option, kind, entries)?;
        }
    }
    Ok(())
}

impl DirectoryOperations for NativeDirectory {
    fn exists(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_directory(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "create directory");
        fs::create_dir_all(path)?;
        Ok(())
    }

    fn delete(&self, path: &Path, recursive: bool) -> Result<()> {
        debug!(path = %path.display(), recursive, "delete directory");
        if recursive {
            fs::remove_dir_all(path)?;
        } else {
            fs::remove_dir(path)?;
        }
        Ok(())
    }

    fn move_directory(&self, source: &Path, destination: &Path) -> Result<()> {
        debug!(
            source = %source.display(),
            destination = %destination.display(),
            "move directory"
        );
        fs::rename(source, destination)?;
        Ok(())
    }

    fn get_files(
        &self,
        path: &Path,
        pattern: Option<&str>,
        option: SearchOption,
    ) -> Result<Vec<PathBuf>> {
        self.enumerate(path, pattern, option, EntryKind::Files)
    }

    fn get_directories(
        &self,
        path: &Path,
        pattern: Option<&str>,
        option: SearchOption,
    ) -> Result<Vec<PathBuf>> {
        self.enumerate(path, pattern, option, EntryKind::Directories)
    }

    fn get_file_system_entries(
        &self,
        path: &Path,
        pattern: Option<&str>,
        option: SearchOption,
    ) -> Result<Vec<PathBuf>> {
        self.enumerate(path, pattern, option, EntryKind::All)
    }

    fn get_current_directory(&self) -> Result<PathBuf> {
        Ok(env::current_dir()?)
    }

    fn set_current_directory(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "set current directory");
        env::set_current_dir(path)?;
        Ok(())
    }

    fn get_last_write_time(&self, path: &Path) -> Result<DateTime<Utc>> {
        metadata::read_modified(path)
    }

    fn set_last_write_time(&self, path: &Path, time: DateTime<Utc>) -> Result<()> {
        metadata::write_modified(path, time)
    }
}
