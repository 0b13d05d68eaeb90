use chrono::{DateTime, Utc};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::metadata;
use crate::adapters::outbound::decorators::{LoggingTextReader, LoggingTextWriter};
use crate::adapters::outbound::streams::{StreamTextReader, StreamTextWriter};
use crate::domain::{FileAttributes, OpenRequest, TextEncoding, NEWLINE};
use crate::ports::outbound::file_operations::{join_lines, split_lines};
use crate::ports::outbound::{FileHandle, FileOperations, TextReader, TextWriter};
use crate::shared::Result;

/// Byte handle over an open `std::fs::File`.
#[derive(Debug)]
pub struct NativeFileHandle {
    file: File,
    path: PathBuf,
}

impl NativeFileHandle {
    pub fn new(file: File, path: PathBuf) -> Self {
        Self { file, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_file(self) -> File {
        self.file
    }
}

impl Read for NativeFileHandle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl Write for NativeFileHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl Seek for NativeFileHandle {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.file.seek(pos)
    }
}

impl FileHandle for NativeFileHandle {
    fn len(&self) -> Result<u64> {
        Ok(self.file.metadata()?.len())
    }

    fn set_len(&mut self, len: u64) -> Result<()> {
        self.file.set_len(len)?;
        Ok(())
    }

    fn sync_all(&mut self) -> Result<()> {
        self.file.sync_all()?;
        Ok(())
    }
}

/// NativeFile adapter delegating file operations to `std::fs`
///
/// When stream logging is enabled, the text readers and writers it hands out
/// are wrapped in the logging decorators.
#[derive(Debug, Clone, Default)]
pub struct NativeFile {
    log_streams: bool,
}

impl NativeFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stream_logging(mut self, enabled: bool) -> Self {
        self.log_streams = enabled;
        self
    }

    fn boxed_reader(&self, file: File, path: &Path) -> Box<dyn TextReader> {
        let reader = StreamTextReader::utf8(BufReader::new(file));
        if self.log_streams {
            Box::new(LoggingTextReader::new(reader, path.display().to_string()))
        } else {
            Box::new(reader)
        }
    }

    fn boxed_writer(&self, file: File, path: &Path) -> Box<dyn TextWriter> {
        let writer = StreamTextWriter::new(file, TextEncoding::Utf8);
        if self.log_streams {
            Box::new(LoggingTextWriter::new(writer, path.display().to_string()))
        } else {
            Box::new(writer)
        }
    }
}

impl FileOperations for NativeFile {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn delete(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "delete file");
        fs::remove_file(path)?;
        Ok(())
    }

    fn copy(&self, source: &Path, destination: &Path, overwrite: bool) -> Result<()> {
        debug!(
            source = %source.display(),
            destination = %destination.display(),
            overwrite,
            "copy file"
        );
        if overwrite {
            fs::copy(source, destination)?;
            return Ok(());
        }

        // Fail on a missing source before reserving the destination name.
        fs::metadata(source)?;
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(destination)?;
        if let Err(e) = fs::copy(source, destination) {
            let _ = fs::remove_file(destination);
            return Err(e.into());
        }
        Ok(())
    }

    fn move_file(&self, source: &Path, destination: &Path) -> Result<()> {
        debug!(source = %source.display(), destination = %destination.display(), "move file");
        fs::rename(source, destination)?;
        Ok(())
    }

    fn get_attributes(&self, path: &Path) -> Result<FileAttributes> {
        metadata::read_attributes(path)
    }

    fn get_length(&self, path: &Path) -> Result<u64> {
        metadata::read_length(path)
    }

    fn set_attributes(&self, path: &Path, attributes: FileAttributes) -> Result<()> {
        metadata::write_read_only(path, attributes.read_only())
    }

    fn get_last_write_time(&self, path: &Path) -> Result<DateTime<Utc>> {
        metadata::read_modified(path)
    }

    fn set_last_write_time(&self, path: &Path, time: DateTime<Utc>) -> Result<()> {
        metadata::write_modified(path, time)
    }

    fn open(&self, path: &Path, request: OpenRequest) -> Result<Box<dyn FileHandle>> {
        let file = request.to_open_options()?.open(path)?;
        Ok(Box::new(NativeFileHandle::new(file, path.to_path_buf())))
    }

    fn read_all_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        Ok(fs::read(path)?)
    }

    fn read_all_lines(&self, path: &Path, encoding: Option<TextEncoding>) -> Result<Vec<String>> {
        let text = self.read_all_text(path, encoding)?;
        Ok(split_lines(&text))
    }

    fn read_all_text(&self, path: &Path, encoding: Option<TextEncoding>) -> Result<String> {
        let bytes = fs::read(path)?;
        TextEncoding::decode_detecting_bom(&bytes, encoding)
    }

    fn write_all_bytes(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        debug!(path = %path.display(), len = bytes.len(), "write file");
        fs::write(path, bytes)?;
        Ok(())
    }

    fn write_all_lines(
        &self,
        path: &Path,
        lines: &[String],
        encoding: Option<TextEncoding>,
    ) -> Result<()> {
        self.write_all_text(path, &join_lines(lines, NEWLINE), encoding)
    }

    fn write_all_text(
        &self,
        path: &Path,
        text: &str,
        encoding: Option<TextEncoding>,
    ) -> Result<()> {
        let encoding = encoding.unwrap_or_default();
        let mut bytes = encoding.preamble().to_vec();
        bytes.extend(encoding.encode(text)?);
        self.write_all_bytes(path, &bytes)
    }

    fn append_all_text(
        &self,
        path: &Path,
        text: &str,
        encoding: Option<TextEncoding>,
    ) -> Result<()> {
        let encoding = encoding.unwrap_or_default();
        let encoded = encoding.encode(text)?;

        let mut file = OpenOptions::new().append(true).create(true).open(path)?;
        if file.metadata()?.len() == 0 {
            file.write_all(encoding.preamble())?;
        }
        file.write_all(&encoded)?;
        Ok(())
    }

    fn open_text(&self, path: &Path) -> Result<Box<dyn TextReader>> {
        let file = File::open(path)?;
        Ok(self.boxed_reader(file, path))
    }

    fn create_text(&self, path: &Path) -> Result<Box<dyn TextWriter>> {
        let file = File::create(path)?;
        Ok(self.boxed_writer(file, path))
    }

    fn append_text(&self, path: &Path) -> Result<Box<dyn TextWriter>> {
        let file = OpenOptions::new().append(true).create(true).open(path)?;
        Ok(self.boxed_writer(file, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FileAccess, FileMode};
    use std::io::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_exists_matches_std() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("a.txt");
        let file = NativeFile::new();

        assert_eq!(file.exists(&file_path), file_path.is_file());
        fs::write(&file_path, "x").unwrap();
        assert_eq!(file.exists(&file_path), file_path.is_file());
        assert!(!file.exists(temp_dir.path()));
    }

    #[test]
    fn test_delete_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let err = NativeFile::new()
            .delete(&temp_dir.path().join("missing.txt"))
            .unwrap_err();
        assert_eq!(err.io_kind(), Some(ErrorKind::NotFound));
    }

    #[test]
    fn test_copy_without_overwrite_refuses_existing_destination() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("src.txt");
        let destination = temp_dir.path().join("dst.txt");
        fs::write(&source, "new").unwrap();
        fs::write(&destination, "old").unwrap();

        let file = NativeFile::new();
        let err = file.copy(&source, &destination, false).unwrap_err();
        assert_eq!(err.io_kind(), Some(ErrorKind::AlreadyExists));
        assert_eq!(fs::read_to_string(&destination).unwrap(), "old");

        file.copy(&source, &destination, true).unwrap();
        assert_eq!(fs::read_to_string(&destination).unwrap(), "new");
    }

    #[test]
    fn test_copy_missing_source_leaves_no_destination() {
        let temp_dir = TempDir::new().unwrap();
        let destination = temp_dir.path().join("dst.txt");
        let err = NativeFile::new()
            .copy(&temp_dir.path().join("nope"), &destination, false)
            .unwrap_err();
        assert_eq!(err.io_kind(), Some(ErrorKind::NotFound));
        assert!(!destination.exists());
    }

    #[test]
    fn test_move_file() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("a.txt");
        let destination = temp_dir.path().join("b.txt");
        fs::write(&source, "moved").unwrap();

        NativeFile::new().move_file(&source, &destination).unwrap();
        assert!(!source.exists());
        assert_eq!(fs::read_to_string(&destination).unwrap(), "moved");
    }

    #[test]
    fn test_write_lines_read_back_through_std() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("lines.txt");
        let lines = vec!["alpha".to_string(), "".to_string(), "gamma".to_string()];

        NativeFile::new().write_all_lines(&path, &lines, None).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, format!("alpha{0}{0}gamma{0}", NEWLINE));
        let read_back: Vec<String> = content.lines().map(str::to_string).collect();
        assert_eq!(read_back, lines);
    }

    #[test]
    fn test_read_lines_written_through_std() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("lines.txt");
        fs::write(&path, "one\r\ntwo\nthree").unwrap();

        let lines = NativeFile::new().read_all_lines(&path, None).unwrap();
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_write_text_with_encoding_writes_preamble() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("utf16.txt");
        let file = NativeFile::new();

        file.write_all_text(&path, "hé", Some(TextEncoding::Utf16Le))
            .unwrap();
        let bytes = fs::read(&path).unwrap();
        assert_eq!(bytes, vec![0xFF, 0xFE, b'h', 0, 0xE9, 0]);

        // BOM detection without an explicit encoding
        assert_eq!(file.read_all_text(&path, None).unwrap(), "hé");
    }

    #[test]
    fn test_default_text_has_no_bom() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plain.txt");
        NativeFile::new().write_all_text(&path, "plain", None).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"plain");
    }

    #[test]
    fn test_append_all_text_writes_preamble_once() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("append.txt");
        let file = NativeFile::new();

        file.append_all_text(&path, "a", Some(TextEncoding::Utf8Bom))
            .unwrap();
        file.append_all_text(&path, "b", Some(TextEncoding::Utf8Bom))
            .unwrap();
        assert_eq!(fs::read(&path).unwrap(), vec![0xEF, 0xBB, 0xBF, b'a', b'b']);
        assert_eq!(file.read_all_text(&path, None).unwrap(), "ab");
    }

    #[test]
    fn test_bytes_round_trip_with_std() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bin");
        let file = NativeFile::new();
        file.write_all_bytes(&path, &[0, 1, 2, 255]).unwrap();
        assert_eq!(fs::read(&path).unwrap(), vec![0, 1, 2, 255]);
        assert_eq!(file.read_all_bytes(&path).unwrap(), fs::read(&path).unwrap());
    }

    #[test]
    fn test_open_handle_read_write_seek() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("handle.bin");
        let file = NativeFile::new();

        let mut handle = file
            .open(&path, OpenRequest::new(FileMode::CreateNew, FileAccess::ReadWrite))
            .unwrap();
        handle.write_all(b"hello world").unwrap();
        assert_eq!(handle.len().unwrap(), 11);

        handle.seek(SeekFrom::Start(6)).unwrap();
        let mut rest = String::new();
        handle.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "world");

        handle.set_len(5).unwrap();
        handle.sync_all().unwrap();
        drop(handle);
        assert_eq!(fs::read(&path).unwrap(), b"hello");
    }

    #[test]
    fn test_open_existing_with_create_new_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("exists.bin");
        fs::write(&path, "x").unwrap();

        let err = NativeFile::new()
            .open(&path, OpenRequest::new(FileMode::CreateNew, FileAccess::Write))
            .unwrap_err();
        assert_eq!(err.io_kind(), Some(ErrorKind::AlreadyExists));
    }

    #[test]
    fn test_text_writer_then_reader() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stream.txt");
        let file = NativeFile::new().with_stream_logging(true);

        let mut writer = file.create_text(&path).unwrap();
        writer.set_new_line("\n");
        writer.write_line_str("first").unwrap();
        writer.write_i32(42).unwrap();
        writer.write_line().unwrap();
        writer.flush().unwrap();
        drop(writer);

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\n42\n");

        let mut appender = file.append_text(&path).unwrap();
        appender.write_str("tail").unwrap();
        drop(appender);

        let mut reader = file.open_text(&path).unwrap();
        assert_eq!(reader.read_line().unwrap().as_deref(), Some("first"));
        assert_eq!(reader.read_line().unwrap().as_deref(), Some("42"));
        assert_eq!(reader.read_line().unwrap().as_deref(), Some("tail"));
        assert_eq!(reader.read_line().unwrap(), None);
    }

    #[test]
    fn test_attributes_match_std_metadata() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("attrs.txt");
        fs::write(&path, "x").unwrap();
        let file = NativeFile::new();

        file.set_attributes(&path, FileAttributes::normal().with_read_only(true))
            .unwrap();
        let attrs = file.get_attributes(&path).unwrap();
        assert_eq!(
            attrs.read_only(),
            fs::metadata(&path).unwrap().permissions().readonly()
        );
        assert!(attrs.read_only());

        file.set_attributes(&path, attrs.with_read_only(false)).unwrap();
        assert!(!file.get_attributes(&path).unwrap().read_only());
    }

    #[test]
    fn test_last_write_time_matches_std() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("t.txt");
        fs::write(&path, "x").unwrap();
        let file = NativeFile::new();

        let reported = file.get_last_write_time(&path).unwrap();
        let expected = DateTime::<Utc>::from(fs::metadata(&path).unwrap().modified().unwrap());
        assert_eq!(reported, expected);
    }
}
