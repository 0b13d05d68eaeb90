use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

use super::state::{self, MemoryState};
use crate::ports::outbound::PathOperations;
use crate::shared::Result;

const TEMP_NAME_ATTEMPTS: usize = 16;

/// Path port of the in-memory filesystem; relative paths resolve against the
/// fake's own current directory, never the process one.
#[derive(Debug, Clone)]
pub struct MemoryPath {
    state: Arc<MemoryState>,
}

impl MemoryPath {
    pub(super) fn new(state: Arc<MemoryState>) -> Self {
        Self { state }
    }
}

impl PathOperations for MemoryPath {
    fn get_full_path(&self, path: &Path) -> Result<PathBuf> {
        Ok(self.state.resolve(path))
    }

    fn get_temp_path(&self) -> PathBuf {
        self.state.temp_dir()
    }

    fn get_temp_file_name(&self) -> Result<PathBuf> {
        let temp_dir = self.state.temp_dir();
        self.state.create_directory_all(&temp_dir)?;

        for _ in 0..TEMP_NAME_ATTEMPTS {
            let id = Uuid::new_v4().simple().to_string();
            let candidate = temp_dir.join(format!("tmp{}.tmp", &id[..8]));
            match self.state.create_file(&candidate, Vec::new()) {
                Ok(_) => return Ok(candidate),
                Err(e) if e.io_kind() == Some(ErrorKind::AlreadyExists) => continue,
                Err(e) => return Err(e),
            }
        }
        Err(state::already_exists(&temp_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_path_uses_fake_current_directory() {
        let state = Arc::new(MemoryState::new());
        state.create_directory_all(Path::new("/home/me")).unwrap();
        state.set_current_dir(PathBuf::from("/home/me"));
        let path = MemoryPath::new(state);

        assert_eq!(
            path.get_full_path(Path::new("docs/../a.txt")).unwrap(),
            PathBuf::from("/home/me/a.txt")
        );
    }

    #[test]
    fn test_temp_file_is_created_empty() {
        let state = Arc::new(MemoryState::new());
        let path = MemoryPath::new(Arc::clone(&state));

        let temp = path.get_temp_file_name().unwrap();
        assert!(temp.starts_with(path.get_temp_path()));
        assert!(state.is_file(&temp));
        assert_ne!(temp, path.get_temp_file_name().unwrap());
    }
}
