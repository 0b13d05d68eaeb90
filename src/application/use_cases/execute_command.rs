use std::path::{Path, PathBuf};

use crate::application::dto::{CommandResponse, DriveSummary, EntryStat, EntryType, FsCommand};
use crate::domain::SearchOption;
use crate::ports::inbound::CommandPort;
use crate::ports::outbound::{DriveInfo, FileSystem, TextReader, TextWriter};
use crate::shared::Result;

/// ExecuteCommandUseCase - runs one `FsCommand` against the injected filesystem
///
/// The use case only talks to the ports reachable through `FileSystem`, so the
/// CLI runs it over `NativeFileSystem` and tests run it over
/// `InMemoryFileSystem` without any other change.
///
/// # Type Parameters
/// * `F` - FileSystem implementation
pub struct ExecuteCommandUseCase<F> {
    fs: F,
}

impl<F: FileSystem> ExecuteCommandUseCase<F> {
    /// Creates a new ExecuteCommandUseCase with an injected filesystem
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Executes the command
    ///
    /// # Errors
    /// Platform failures are returned unchanged as `FsError::Io`; argument
    /// errors (bad pattern, unknown drive) carry their own variants.
    pub fn execute(&self, command: FsCommand) -> Result<CommandResponse> {
        let name = command.name();
        tracing::info!(command = name, "executing command");

        let result = self.dispatch(command);
        if let Err(e) = &result {
            tracing::debug!(command = name, error = %e, "command failed");
        }
        result
    }

    fn dispatch(&self, command: FsCommand) -> Result<CommandResponse> {
        match command {
            FsCommand::Exists { path } => Ok(CommandResponse::Exists {
                entry_type: self.entry_type(&path),
                path,
            }),
            FsCommand::List {
                path,
                pattern,
                recursive,
                directories,
            } => {
                let option = if recursive {
                    SearchOption::AllDirectories
                } else {
                    SearchOption::TopDirectoryOnly
                };
                let directory = self.fs.directory();
                let entries = if directories {
                    directory.get_directories(&path, pattern.as_deref(), option)?
                } else {
                    directory.get_files(&path, pattern.as_deref(), option)?
                };
                tracing::debug!(path = %path.display(), count = entries.len(), "listed entries");
                Ok(CommandResponse::Entries { path, entries })
            }
            FsCommand::Cat { path, encoding } => {
                let content = match encoding {
                    // Default encoding reads through a TextReader, which may be logged.
                    None => self.fs.file().open_text(&path)?.read_to_end()?,
                    Some(_) => self.fs.file().read_all_text(&path, encoding)?,
                };
                Ok(CommandResponse::Text { path, content })
            }
            FsCommand::Write {
                path,
                text,
                append,
                encoding,
            } => {
                let file = self.fs.file();
                match (encoding, append) {
                    (None, false) => write_through(file.create_text(&path)?, &text)?,
                    (None, true) => write_through(file.append_text(&path)?, &text)?,
                    (Some(_), false) => file.write_all_text(&path, &text, encoding)?,
                    (Some(_), true) => file.append_all_text(&path, &text, encoding)?,
                }
                Ok(done(format!(
                    "{} {} characters to {}",
                    if append { "Appended" } else { "Wrote" },
                    text.chars().count(),
                    path.display()
                )))
            }
            FsCommand::Copy {
                source,
                destination,
                overwrite,
            } => {
                self.fs.file().copy(&source, &destination, overwrite)?;
                Ok(done(format!(
                    "Copied {} to {}",
                    source.display(),
                    destination.display()
                )))
            }
            FsCommand::Move {
                source,
                destination,
            } => {
                if self.fs.directory().exists(&source) {
                    self.fs.directory().move_directory(&source, &destination)?;
                } else {
                    self.fs.file().move_file(&source, &destination)?;
                }
                Ok(done(format!(
                    "Moved {} to {}",
                    source.display(),
                    destination.display()
                )))
            }
            FsCommand::Remove { path, recursive } => {
                if self.fs.directory().exists(&path) {
                    self.fs.directory().delete(&path, recursive)?;
                } else {
                    self.fs.file().delete(&path)?;
                }
                Ok(done(format!("Removed {}", path.display())))
            }
            FsCommand::MakeDirectory { path } => {
                self.fs.directory().create_directory(&path)?;
                Ok(done(format!("Created directory {}", path.display())))
            }
            FsCommand::Stat { path } => self.stat(path).map(CommandResponse::Stat),
            FsCommand::Drives => {
                let drives = self
                    .fs
                    .drive()
                    .get_drives()?
                    .iter()
                    .map(|drive| summarize(drive.as_ref()))
                    .collect();
                Ok(CommandResponse::Drives { drives })
            }
            FsCommand::Combine { parts } => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                Ok(CommandResponse::Path {
                    path: self.fs.path().combine(&parts),
                })
            }
            FsCommand::RandomName => Ok(CommandResponse::Name {
                name: self.fs.path().get_random_file_name(),
            }),
        }
    }

    fn entry_type(&self, path: &Path) -> EntryType {
        if self.fs.file().exists(path) {
            EntryType::File
        } else if self.fs.directory().exists(path) {
            EntryType::Directory
        } else {
            EntryType::Missing
        }
    }

    fn stat(&self, path: PathBuf) -> Result<EntryStat> {
        let attributes = self.fs.file().get_attributes(&path)?;
        let (entry_type, length, last_write_time) = if attributes.is_directory() {
            (
                EntryType::Directory,
                None,
                self.fs.directory().get_last_write_time(&path)?,
            )
        } else {
            let length = self.fs.file().get_length(&path)?;
            (
                EntryType::File,
                Some(length),
                self.fs.file().get_last_write_time(&path)?,
            )
        };
        Ok(EntryStat {
            path,
            entry_type,
            length,
            attributes,
            last_write_time,
        })
    }
}

impl<F: FileSystem> CommandPort for ExecuteCommandUseCase<F> {
    fn execute(&self, command: FsCommand) -> Result<CommandResponse> {
        ExecuteCommandUseCase::execute(self, command)
    }
}

fn write_through(mut writer: Box<dyn TextWriter>, text: &str) -> Result<()> {
    writer.write_str(text)?;
    writer.flush()
}

fn done(message: String) -> CommandResponse {
    CommandResponse::Done { message }
}

/// Snapshot of a drive; capacity reads that fail become `None`.
fn summarize(drive: &dyn DriveInfo) -> DriveSummary {
    DriveSummary {
        name: drive.name(),
        root_directory: drive.root_directory(),
        drive_type: drive.drive_type(),
        drive_format: drive.drive_format(),
        volume_label: drive.volume_label(),
        is_ready: drive.is_ready(),
        total_size: drive.total_size().ok(),
        total_free_space: drive.total_free_space().ok(),
        available_free_space: drive.available_free_space().ok(),
    }
}
