use chrono::{DateTime, Utc};
use std::fmt::Debug;
use std::io::{Read, Seek, Write};
use std::path::Path;

use crate::domain::{FileAttributes, OpenRequest, TextEncoding};
use crate::ports::outbound::{TextReader, TextWriter};
use crate::shared::Result;

/// An open byte-level file handle.
pub trait FileHandle: Read + Write + Seek + Send + Debug {
    /// Current length of the file in bytes.
    fn len(&self) -> Result<u64>;

    /// Returns true when the file holds no bytes.
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Truncates or extends the file.
    fn set_len(&mut self, len: u64) -> Result<()>;

    /// Flushes data and metadata to the backing store.
    fn sync_all(&mut self) -> Result<()>;
}

/// FileOperations port for whole-file operations addressed by path
///
/// Every method maps onto a single platform call; errors raised by the
/// platform are returned unmodified in `FsError::Io`.
pub trait FileOperations: Send + Sync {
    /// Returns true if `path` names an existing regular file.
    ///
    /// Never fails: unreadable or missing paths report `false`.
    fn exists(&self, path: &Path) -> bool;

    /// Deletes the file at `path`.
    ///
    /// # Errors
    /// - The file does not exist
    /// - `path` is a directory
    /// - Permissions prevent removal
    fn delete(&self, path: &Path) -> Result<()>;

    /// Copies `source` to `destination`.
    ///
    /// # Errors
    /// Returns `AlreadyExists` when `destination` exists and `overwrite` is false.
    fn copy(&self, source: &Path, destination: &Path, overwrite: bool) -> Result<()>;

    /// Moves (renames) a file.
    fn move_file(&self, source: &Path, destination: &Path) -> Result<()>;

    fn get_attributes(&self, path: &Path) -> Result<FileAttributes>;

    /// Size of the file in bytes, read from metadata without opening it.
    ///
    /// Returns `IsADirectory` when `path` names a directory.
    fn get_length(&self, path: &Path) -> Result<u64>;

    /// Applies the settable attribute flags (`read_only`).
    fn set_attributes(&self, path: &Path, attributes: FileAttributes) -> Result<()>;

    fn get_last_write_time(&self, path: &Path) -> Result<DateTime<Utc>>;

    fn set_last_write_time(&self, path: &Path, time: DateTime<Utc>) -> Result<()>;

    /// Opens a byte-level handle with the requested mode, access and sharing.
    fn open(&self, path: &Path, request: OpenRequest) -> Result<Box<dyn FileHandle>>;

    fn read_all_bytes(&self, path: &Path) -> Result<Vec<u8>>;

    /// Reads every line of a text file.
    ///
    /// Lines end at `\n`, `\r\n` or `\r`; terminators are not included.
    fn read_all_lines(&self, path: &Path, encoding: Option<TextEncoding>) -> Result<Vec<String>>;

    /// Reads a whole text file.
    ///
    /// A byte order mark selects the encoding; otherwise `encoding` is used,
    /// defaulting to UTF-8.
    fn read_all_text(&self, path: &Path, encoding: Option<TextEncoding>) -> Result<String>;

    /// Creates or truncates `path` and writes `bytes`.
    fn write_all_bytes(&self, path: &Path, bytes: &[u8]) -> Result<()>;

    /// Creates or truncates `path` and writes every line followed by a newline.
    fn write_all_lines(
        &self,
        path: &Path,
        lines: &[String],
        encoding: Option<TextEncoding>,
    ) -> Result<()>;

    /// Creates or truncates `path` and writes `text`, preceded by the
    /// encoding's preamble.
    fn write_all_text(&self, path: &Path, text: &str, encoding: Option<TextEncoding>)
        -> Result<()>;

    /// Appends `text`, creating the file if needed.
    ///
    /// The encoding's preamble is written only when the file is empty.
    fn append_all_text(
        &self,
        path: &Path,
        text: &str,
        encoding: Option<TextEncoding>,
    ) -> Result<()>;

    /// Opens an existing file as a UTF-8 text reader (BOM-detecting).
    fn open_text(&self, path: &Path) -> Result<Box<dyn TextReader>>;

    /// Creates or truncates a file and returns a UTF-8 text writer.
    fn create_text(&self, path: &Path) -> Result<Box<dyn TextWriter>>;

    /// Opens or creates a file and returns a UTF-8 text writer positioned at its end.
    fn append_text(&self, path: &Path) -> Result<Box<dyn TextWriter>>;
}

/// Splits decoded text into lines the way text readers do.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\n' => lines.push(std::mem::take(&mut current)),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                lines.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Joins lines with `newline`, terminating every line.
pub fn join_lines(lines: &[String], newline: &str) -> String {
    let mut text = String::new();
    for line in lines {
        text.push_str(line);
        text.push_str(newline);
    }
    text
}
