use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::state::{self, MemoryState, Node};
use crate::domain::{EntryKind, SearchOption, SearchPattern};
use crate::ports::outbound::DirectoryOperations;
use crate::shared::Result;

/// Directory port of the in-memory filesystem
#[derive(Debug, Clone)]
pub struct MemoryDirectory {
    state: Arc<MemoryState>,
}

impl MemoryDirectory {
    pub(super) fn new(state: Arc<MemoryState>) -> Self {
        Self { state }
    }

    fn enumerate(
        &self,
        path: &Path,
        pattern: Option<&str>,
        option: SearchOption,
        kind: EntryKind,
    ) -> Result<Vec<PathBuf>> {
        let pattern = SearchPattern::from_option(pattern)?;
        let resolved = self.state.resolve(path);
        self.state.require_directory(&resolved)?;

        // Entries are reported under `path` as given, like `read_dir` does.
        let mut entries: Vec<PathBuf> = self
            .state
            .descendants(&resolved, option.is_recursive())
            .into_iter()
            .filter(|(entry, is_directory)| {
                kind.accepts(*is_directory)
                    && entry
                        .file_name()
                        .is_some_and(|name| pattern.matches(&name.to_string_lossy()))
            })
            .filter_map(|(entry, _)| {
                entry
                    .strip_prefix(&resolved)
                    .ok()
                    .map(|relative| path.join(relative))
            })
            .collect();
        entries.sort();
        Ok(entries)
    }
}

impl DirectoryOperations for MemoryDirectory {
    fn exists(&self, path: &Path) -> bool {
        self.state.is_directory(&self.state.resolve(path))
    }

    fn create_directory(&self, path: &Path) -> Result<()> {
        self.state.create_directory_all(&self.state.resolve(path))
    }

    fn delete(&self, path: &Path, recursive: bool) -> Result<()> {
        let path = self.state.resolve(path);
        if path == self.state.root() {
            return Err(state::permission_denied(&path));
        }
        self.state.require_directory(&path)?;

        if self.state.has_children(&path) && !recursive {
            return Err(state::directory_not_empty(&path));
        }
        self.state.remove_subtree(&path);
        Ok(())
    }

    fn move_directory(&self, source: &Path, destination: &Path) -> Result<()> {
        let source = self.state.resolve(source);
        let destination = self.state.resolve(destination);

        self.state.require_directory(&source)?;
        if source == destination {
            return Ok(());
        }
        if destination.starts_with(&source) {
            return Err(state::invalid_input(
                "cannot move a directory into itself",
                &destination,
            ));
        }

        match self.state.node(&destination) {
            Some(Node::File(_)) => return Err(state::not_a_directory(&destination)),
            Some(Node::Directory(_)) if self.state.has_children(&destination) => {
                return Err(state::directory_not_empty(&destination))
            }
            Some(Node::Directory(_)) => self.state.remove(&destination),
            None => self.state.require_parent(&destination)?,
        }

        self.state.move_subtree(&source, &destination);
        let current_dir = self.state.current_dir();
        if let Ok(relative) = current_dir.strip_prefix(&source) {
            self.state.set_current_dir(destination.join(relative));
        }
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
        Ok(self.state.current_dir())
    }

    fn set_current_directory(&self, path: &Path) -> Result<()> {
        let path = self.state.resolve(path);
        self.state.require_directory(&path)?;
        self.state.set_current_dir(path);
        Ok(())
    }

    fn get_last_write_time(&self, path: &Path) -> Result<DateTime<Utc>> {
        let path = self.state.resolve(path);
        Ok(self.state.require_node(&path)?.modified())
    }

    fn set_last_write_time(&self, path: &Path, time: DateTime<Utc>) -> Result<()> {
        let path = self.state.resolve(path);
        self.state.set_modified(&path, time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    fn populated() -> MemoryDirectory {
        let state = Arc::new(MemoryState::new());
        state.create_directory_all(Path::new("/root/sub/deeper")).unwrap();
        for file in ["/root/a.txt", "/root/b.log", "/root/sub/c.txt", "/root/sub/deeper/d.txt"] {
            state.create_file(Path::new(file), Vec::new()).unwrap();
        }
        MemoryDirectory::new(state)
    }

    #[test]
    fn test_enumeration_matches_native_shape() {
        let directory = populated();

        assert_eq!(
            directory
                .get_files(Path::new("/root"), None, SearchOption::TopDirectoryOnly)
                .unwrap(),
            vec![PathBuf::from("/root/a.txt"), PathBuf::from("/root/b.log")]
        );
        assert_eq!(
            directory
                .get_files(Path::new("/root"), Some("*.txt"), SearchOption::AllDirectories)
                .unwrap(),
            vec![
                PathBuf::from("/root/a.txt"),
                PathBuf::from("/root/sub/c.txt"),
                PathBuf::from("/root/sub/deeper/d.txt"),
            ]
        );
        assert_eq!(
            directory
                .get_directories(Path::new("/root"), None, SearchOption::AllDirectories)
                .unwrap(),
            vec![PathBuf::from("/root/sub"), PathBuf::from("/root/sub/deeper")]
        );
        assert_eq!(
            directory
                .get_file_system_entries(Path::new("/root"), None, SearchOption::TopDirectoryOnly)
                .unwrap()
                .len(),
            3
        );
    }

    #[test]
    fn test_enumerate_errors() {
        let directory = populated();
        let err = directory
            .get_files(Path::new("/missing"), None, SearchOption::TopDirectoryOnly)
            .unwrap_err();
        assert_eq!(err.io_kind(), Some(ErrorKind::NotFound));

        let err = directory
            .get_files(Path::new("/root/a.txt"), None, SearchOption::TopDirectoryOnly)
            .unwrap_err();
        assert_eq!(err.io_kind(), Some(ErrorKind::NotADirectory));
    }

    #[test]
    fn test_delete_non_empty() {
        let directory = populated();
        let err = directory.delete(Path::new("/root/sub"), false).unwrap_err();
        assert_eq!(err.io_kind(), Some(ErrorKind::DirectoryNotEmpty));

        directory.delete(Path::new("/root/sub"), true).unwrap();
        assert!(!directory.exists(Path::new("/root/sub")));
        assert!(!directory.exists(Path::new("/root/sub/deeper")));
        assert!(directory.exists(Path::new("/root")));
    }

    #[test]
    fn test_delete_file_path_is_not_a_directory() {
        let err = populated()
            .delete(Path::new("/root/a.txt"), false)
            .unwrap_err();
        assert_eq!(err.io_kind(), Some(ErrorKind::NotADirectory));
    }

    #[test]
    fn test_move_directory() {
        let directory = populated();
        directory
            .move_directory(Path::new("/root/sub"), Path::new("/moved"))
            .unwrap();
        assert!(directory.exists(Path::new("/moved/deeper")));
        assert!(!directory.exists(Path::new("/root/sub")));

        let err = directory
            .move_directory(Path::new("/root"), Path::new("/root/inner"))
            .unwrap_err();
        assert_eq!(err.io_kind(), Some(ErrorKind::InvalidInput));
    }

    #[test]
    fn test_current_directory_resolves_relative_paths() {
        let directory = populated();
        directory.set_current_directory(Path::new("/root/sub")).unwrap();
        assert_eq!(
            directory.get_current_directory().unwrap(),
            PathBuf::from("/root/sub")
        );
        assert!(directory.exists(Path::new("deeper")));
        assert!(directory.exists(Path::new("../sub")));

        let err = directory
            .set_current_directory(Path::new("/root/a.txt"))
            .unwrap_err();
        assert_eq!(err.io_kind(), Some(ErrorKind::NotADirectory));
    }

    #[test]
    fn test_relative_enumeration_keeps_caller_prefix() {
        let directory = populated();
        directory.set_current_directory(Path::new("/root")).unwrap();

        assert_eq!(
            directory
                .get_files(Path::new("sub"), None, SearchOption::AllDirectories)
                .unwrap(),
            vec![PathBuf::from("sub/c.txt"), PathBuf::from("sub/deeper/d.txt")]
        );
        assert_eq!(
            directory
                .get_directories(Path::new("."), None, SearchOption::TopDirectoryOnly)
                .unwrap(),
            vec![PathBuf::from("./sub")]
        );
        assert_eq!(
            directory
                .get_file_system_entries(
                    Path::new("sub/deeper/.."),
                    Some("c*"),
                    SearchOption::TopDirectoryOnly
                )
                .unwrap(),
            vec![PathBuf::from("sub/deeper/../c.txt")]
        );
    }

    #[test]
    fn test_create_directory_is_idempotent() {
        let directory = populated();
        directory.create_directory(Path::new("/x/y")).unwrap();
        directory.create_directory(Path::new("/x/y")).unwrap();
        assert!(directory.exists(Path::new("/x")));
    }

    #[test]
    fn test_adding_child_updates_parent_timestamp() {
        let directory = populated();
        let old = DateTime::<Utc>::from_timestamp(0, 0).unwrap();
        directory.set_last_write_time(Path::new("/root"), old).unwrap();

        directory.create_directory(Path::new("/root/new")).unwrap();
        assert!(directory.get_last_write_time(Path::new("/root")).unwrap() > old);
    }
}
