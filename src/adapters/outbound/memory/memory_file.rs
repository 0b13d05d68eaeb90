use chrono::{DateTime, Utc};
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use super::memory_file_handle::MemoryFileHandle;
use super::state::{self, MemoryState, Node, SharedContent};
use crate::adapters::outbound::streams::{StreamTextReader, StreamTextWriter};
use crate::domain::{FileAttributes, FileMode, OpenRequest, TextEncoding, NEWLINE};
use crate::ports::outbound::file_operations::{join_lines, split_lines};
use crate::ports::outbound::{FileHandle, FileOperations, TextReader, TextWriter};
use crate::shared::Result;

/// File port of the in-memory filesystem
#[derive(Debug, Clone)]
pub struct MemoryFile {
    state: Arc<MemoryState>,
}

impl MemoryFile {
    pub(super) fn new(state: Arc<MemoryState>) -> Self {
        Self { state }
    }

    fn open_handle(&self, path: &Path, request: OpenRequest) -> Result<MemoryFileHandle> {
        request.validate()?;
        let path = self.state.resolve(path);

        let content = match (self.state.node(&path), request.mode) {
            (Some(Node::Directory(_)), _) => return Err(state::is_a_directory(&path)),
            (Some(Node::File(_)), FileMode::CreateNew) => return Err(state::already_exists(&path)),
            (Some(Node::File(content)), _) => content,
            (None, FileMode::Open | FileMode::Truncate) => return Err(state::not_found(&path)),
            (None, _) => self.state.create_file(&path, Vec::new())?,
        };

        if request.access.can_write() && content.read().read_only {
            return Err(state::permission_denied(&path));
        }
        if matches!(request.mode, FileMode::Create | FileMode::Truncate) {
            let mut guard = content.write();
            guard.bytes.clear();
            guard.modified = Utc::now();
        }

        Ok(MemoryFileHandle::new(
            content,
            request.access,
            request.mode == FileMode::Append,
        ))
    }

    /// Runs `update` on the bytes of the file at `path`, creating it first
    /// when missing.
    fn update_file(&self, path: &Path, update: impl FnOnce(&mut Vec<u8>)) -> Result<()> {
        let path = self.state.resolve(path);
        let content: SharedContent = match self.state.node(&path) {
            Some(Node::Directory(_)) => return Err(state::is_a_directory(&path)),
            Some(Node::File(content)) => content,
            None => self.state.create_file(&path, Vec::new())?,
        };

        let mut guard = content.write();
        if guard.read_only {
            return Err(state::permission_denied(&path));
        }
        update(&mut guard.bytes);
        guard.modified = Utc::now();
        Ok(())
    }
}

impl FileOperations for MemoryFile {
    fn exists(&self, path: &Path) -> bool {
        self.state.is_file(&self.state.resolve(path))
    }

    fn delete(&self, path: &Path) -> Result<()> {
        let path = self.state.resolve(path);
        self.state.require_file(&path)?;
        self.state.remove(&path);
        Ok(())
    }

    fn copy(&self, source: &Path, destination: &Path, overwrite: bool) -> Result<()> {
        let source = self.state.resolve(source);
        let destination = self.state.resolve(destination);

        let (bytes, read_only) = match self.state.node(&source) {
            Some(Node::File(content)) => {
                let guard = content.read();
                (guard.bytes.clone(), guard.read_only)
            }
            Some(Node::Directory(_)) => {
                return Err(state::invalid_input(
                    "the source path is not a regular file",
                    &source,
                ))
            }
            None => return Err(state::not_found(&source)),
        };

        match self.state.node(&destination) {
            Some(Node::Directory(_)) => Err(state::is_a_directory(&destination)),
            Some(Node::File(_)) if !overwrite => Err(state::already_exists(&destination)),
            Some(Node::File(_)) if source == destination => Ok(()),
            Some(Node::File(existing)) => {
                let mut guard = existing.write();
                if guard.read_only {
                    return Err(state::permission_denied(&destination));
                }
                guard.bytes = bytes;
                guard.read_only = read_only;
                guard.modified = Utc::now();
                Ok(())
            }
            None => {
                let content = self.state.create_file(&destination, bytes)?;
                content.write().read_only = read_only;
                Ok(())
            }
        }
    }

    fn move_file(&self, source: &Path, destination: &Path) -> Result<()> {
        let source = self.state.resolve(source);
        let destination = self.state.resolve(destination);

        let content = self.state.require_file(&source)?;
        match self.state.node(&destination) {
            Some(Node::Directory(_)) => return Err(state::is_a_directory(&destination)),
            Some(Node::File(_)) => {}
            None => self.state.require_parent(&destination)?,
        }
        if source == destination {
            return Ok(());
        }

        self.state.remove(&source);
        self.state.insert_forced(&destination, Node::File(content));
        Ok(())
    }

    fn get_attributes(&self, path: &Path) -> Result<FileAttributes> {
        let path = self.state.resolve(path);
        Ok(self.state.require_node(&path)?.attributes(&path))
    }

    fn get_length(&self, path: &Path) -> Result<u64> {
        let path = self.state.resolve(path);
        let content = self.state.require_file(&path)?;
        let length = content.read().bytes.len() as u64;
        Ok(length)
    }

    fn set_attributes(&self, path: &Path, attributes: FileAttributes) -> Result<()> {
        let path = self.state.resolve(path);
        self.state.set_read_only(&path, attributes.read_only())
    }

    fn get_last_write_time(&self, path: &Path) -> Result<DateTime<Utc>> {
        let path = self.state.resolve(path);
        Ok(self.state.require_node(&path)?.modified())
    }

    fn set_last_write_time(&self, path: &Path, time: DateTime<Utc>) -> Result<()> {
        let path = self.state.resolve(path);
        self.state.set_modified(&path, time)
    }

    fn open(&self, path: &Path, request: OpenRequest) -> Result<Box<dyn FileHandle>> {
        Ok(Box::new(self.open_handle(path, request)?))
    }

    fn read_all_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        let path = self.state.resolve(path);
        let content = self.state.require_file(&path)?;
        let bytes = content.read().bytes.clone();
        Ok(bytes)
    }

    fn read_all_lines(&self, path: &Path, encoding: Option<TextEncoding>) -> Result<Vec<String>> {
        let text = self.read_all_text(path, encoding)?;
        Ok(split_lines(&text))
    }

    fn read_all_text(&self, path: &Path, encoding: Option<TextEncoding>) -> Result<String> {
        let bytes = self.read_all_bytes(path)?;
        TextEncoding::decode_detecting_bom(&bytes, encoding)
    }

    fn write_all_bytes(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        self.update_file(path, |content| {
            content.clear();
            content.extend_from_slice(bytes);
        })
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
        self.update_file(path, |content| {
            if content.is_empty() {
                content.extend_from_slice(encoding.preamble());
            }
            content.extend_from_slice(&encoded);
        })
    }

    fn open_text(&self, path: &Path) -> Result<Box<dyn TextReader>> {
        let handle = self.open_handle(path, OpenRequest::read())?;
        Ok(Box::new(StreamTextReader::utf8(BufReader::new(handle))))
    }

    fn create_text(&self, path: &Path) -> Result<Box<dyn TextWriter>> {
        let handle = self.open_handle(path, OpenRequest::create())?;
        Ok(Box::new(StreamTextWriter::new(handle, TextEncoding::Utf8)))
    }

    fn append_text(&self, path: &Path) -> Result<Box<dyn TextWriter>> {
        let handle = self.open_handle(path, OpenRequest::append())?;
        Ok(Box::new(StreamTextWriter::new(handle, TextEncoding::Utf8)))
    }
}
