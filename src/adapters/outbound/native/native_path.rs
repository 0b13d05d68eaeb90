use std::env;
use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::ports::outbound::path_operations::normalize_path;
use crate::ports::outbound::PathOperations;
use crate::shared::Result;

/// Attempts before giving up on finding an unused temp file name
const TEMP_NAME_ATTEMPTS: usize = 16;

/// NativePath adapter resolving paths against the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePath;

impl NativePath {
    pub fn new() -> Self {
        Self
    }
}

impl PathOperations for NativePath {
    fn get_full_path(&self, path: &Path) -> Result<PathBuf> {
        let base = env::current_dir()?;
        Ok(normalize_path(&base, path))
    }

    fn get_temp_path(&self) -> PathBuf {
        env::temp_dir()
    }

    fn get_temp_file_name(&self) -> Result<PathBuf> {
        let temp_dir = self.get_temp_path();
        let mut last_error = None;

        for _ in 0..TEMP_NAME_ATTEMPTS {
            let id = Uuid::new_v4().simple().to_string();
            let candidate = temp_dir.join(format!("tmp{}.tmp", &id[..8]));
            match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&candidate)
            {
                Ok(_) => return Ok(candidate),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => last_error = Some(e),
                Err(e) => return Err(e.into()),
            }
        }

        Err(last_error
            .unwrap_or_else(|| ErrorKind::AlreadyExists.into())
            .into())
    }
}
