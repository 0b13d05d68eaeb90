use std::path::PathBuf;

use crate::domain::TextEncoding;

/// A single filesystem command requested by a caller (the CLI, a script, a test).
///
/// Commands are plain data; `ExecuteCommandUseCase` decides how each one maps
/// onto the filesystem ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsCommand {
    /// Reports whether a path is a file, a directory, or missing.
    Exists { path: PathBuf },
    /// Lists entries of a directory.
    List {
        path: PathBuf,
        pattern: Option<String>,
        recursive: bool,
        /// List directories instead of files.
        directories: bool,
    },
    /// Reads a whole text file.
    Cat {
        path: PathBuf,
        encoding: Option<TextEncoding>,
    },
    /// Writes (or appends) text to a file.
    Write {
        path: PathBuf,
        text: String,
        append: bool,
        encoding: Option<TextEncoding>,
    },
    Copy {
        source: PathBuf,
        destination: PathBuf,
        overwrite: bool,
    },
    Move {
        source: PathBuf,
        destination: PathBuf,
    },
    /// Removes a file, or a directory (recursively when asked).
    Remove { path: PathBuf, recursive: bool },
    MakeDirectory { path: PathBuf },
    Stat { path: PathBuf },
    Drives,
    Combine { parts: Vec<String> },
    RandomName,
}

impl FsCommand {
    /// Short command name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            FsCommand::Exists { .. } => "exists",
            FsCommand::List { .. } => "ls",
            FsCommand::Cat { .. } => "cat",
            FsCommand::Write { .. } => "write",
            FsCommand::Copy { .. } => "cp",
            FsCommand::Move { .. } => "mv",
            FsCommand::Remove { .. } => "rm",
            FsCommand::MakeDirectory { .. } => "mkdir",
            FsCommand::Stat { .. } => "stat",
            FsCommand::Drives => "drives",
            FsCommand::Combine { .. } => "combine",
            FsCommand::RandomName => "random-name",
        }
    }
}
