use chrono::{DateTime, Utc};
use fs_facade::prelude::*;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// FileSystem that records every file-level call before forwarding it to an
/// in-memory fake
///
/// Directory, path and drive calls go straight to the fake.
#[derive(Clone)]
pub struct RecordingFileSystem {
    inner: InMemoryFileSystem,
    file: RecordingFileOperations,
}

impl RecordingFileSystem {
    pub fn new(inner: InMemoryFileSystem) -> Self {
        Self {
            file: RecordingFileOperations {
                inner: inner.clone(),
                calls: Arc::new(Mutex::new(Vec::new())),
            },
            inner,
        }
    }

    /// Calls made so far, as `"name path"` strings.
    pub fn get_calls(&self) -> Vec<String> {
        self.file.calls.lock().unwrap().clone()
    }
}

impl FileSystem for RecordingFileSystem {
    fn file(&self) -> &dyn FileOperations {
        &self.file
    }

    fn directory(&self) -> &dyn DirectoryOperations {
        self.inner.directory()
    }

    fn path(&self) -> &dyn PathOperations {
        self.inner.path()
    }

    fn drive(&self) -> &dyn DriveOperations {
        self.inner.drive()
    }
}

#[derive(Clone)]
struct RecordingFileOperations {
    inner: InMemoryFileSystem,
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingFileOperations {
    fn record(&self, name: &str, path: &Path) -> &dyn FileOperations {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{} {}", name, path.display()));
        self.inner.file()
    }
}

impl FileOperations for RecordingFileOperations {
    fn exists(&self, path: &Path) -> bool {
        self.record("exists", path).exists(path)
    }

    fn delete(&self, path: &Path) -> Result<()> {
        self.record("delete", path).delete(path)
    }

    fn copy(&self, source: &Path, destination: &Path, overwrite: bool) -> Result<()> {
        self.record("copy", source)
            .copy(source, destination, overwrite)
    }

    fn move_file(&self, source: &Path, destination: &Path) -> Result<()> {
        self.record("move_file", source).move_file(source, destination)
    }

    fn get_attributes(&self, path: &Path) -> Result<FileAttributes> {
        self.record("get_attributes", path).get_attributes(path)
    }

    fn get_length(&self, path: &Path) -> Result<u64> {
        self.record("get_length", path).get_length(path)
    }

    fn set_attributes(&self, path: &Path, attributes: FileAttributes) -> Result<()> {
        self.record("set_attributes", path)
            .set_attributes(path, attributes)
    }

    fn get_last_write_time(&self, path: &Path) -> Result<DateTime<Utc>> {
        self.record("get_last_write_time", path)
            .get_last_write_time(path)
    }

    fn set_last_write_time(&self, path: &Path, time: DateTime<Utc>) -> Result<()> {
        self.record("set_last_write_time", path)
            .set_last_write_time(path, time)
    }

    fn open(&self, path: &Path, request: OpenRequest) -> Result<Box<dyn FileHandle>> {
        self.record("open", path).open(path, request)
    }

    fn read_all_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        self.record("read_all_bytes", path).read_all_bytes(path)
    }

    fn read_all_lines(&self, path: &Path, encoding: Option<TextEncoding>) -> Result<Vec<String>> {
        self.record("read_all_lines", path)
            .read_all_lines(path, encoding)
    }

    fn read_all_text(&self, path: &Path, encoding: Option<TextEncoding>) -> Result<String> {
        self.record("read_all_text", path)
            .read_all_text(path, encoding)
    }

    fn write_all_bytes(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        self.record("write_all_bytes", path)
            .write_all_bytes(path, bytes)
    }

    fn write_all_lines(
        &self,
        path: &Path,
        lines: &[String],
        encoding: Option<TextEncoding>,
    ) -> Result<()> {
        self.record("write_all_lines", path)
            .write_all_lines(path, lines, encoding)
    }

    fn write_all_text(
        &self,
        path: &Path,
        text: &str,
        encoding: Option<TextEncoding>,
    ) -> Result<()> {
        self.record("write_all_text", path)
            .write_all_text(path, text, encoding)
    }

    fn append_all_text(
        &self,
        path: &Path,
        text: &str,
        encoding: Option<TextEncoding>,
    ) -> Result<()> {
        self.record("append_all_text", path)
            .append_all_text(path, text, encoding)
    }

    fn open_text(&self, path: &Path) -> Result<Box<dyn TextReader>> {
        self.record("open_text", path).open_text(path)
    }

    fn create_text(&self, path: &Path) -> Result<Box<dyn TextWriter>> {
        self.record("create_text", path).create_text(path)
    }

    fn append_text(&self, path: &Path) -> Result<Box<dyn TextWriter>> {
        self.record("append_text", path).append_text(path)
    }
}
