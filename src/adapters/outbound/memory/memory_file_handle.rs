use chrono::Utc;
use std::io::{self, Read, Seek, SeekFrom, Write};

use super::state::SharedContent;
use crate::domain::FileAccess;
use crate::ports::outbound::FileHandle;
use crate::shared::Result;

/// Byte handle over an in-memory file.
///
/// The content is shared with the node table, so writes are visible to
/// every later read of the same path.
#[derive(Debug)]
pub struct MemoryFileHandle {
    content: SharedContent,
    position: u64,
    access: FileAccess,
    append: bool,
}

impl MemoryFileHandle {
    pub(super) fn new(content: SharedContent, access: FileAccess, append: bool) -> Self {
        Self {
            content,
            position: 0,
            access,
            append,
        }
    }

    fn require_write(&self) -> io::Result<()> {
        if self.access.can_write() {
            Ok(())
        } else {
            Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "handle was not opened for writing",
            ))
        }
    }
}

impl Read for MemoryFileHandle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.access.can_read() {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "handle was not opened for reading",
            ));
        }

        let content = self.content.read();
        let start = usize::try_from(self.position).unwrap_or(usize::MAX);
        if start >= content.bytes.len() {
            return Ok(0);
        }
        let count = buf.len().min(content.bytes.len() - start);
        buf[..count].copy_from_slice(&content.bytes[start..start + count]);
        self.position += count as u64;
        Ok(count)
    }
}

impl Write for MemoryFileHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.require_write()?;

        let mut content = self.content.write();
        if self.append {
            self.position = content.bytes.len() as u64;
        }
        // Vec cannot grow past isize::MAX bytes.
        let end = usize::try_from(self.position)
            .ok()
            .and_then(|start| start.checked_add(buf.len()))
            .filter(|&end| end <= isize::MAX as usize)
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::FileTooLarge, "write past the maximum file size")
            })?;
        let start = end - buf.len();
        if content.bytes.len() < end {
            content.bytes.resize(end, 0);
        }
        content.bytes[start..end].copy_from_slice(buf);
        content.modified = Utc::now();
        self.position = end as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for MemoryFileHandle {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let len = self.content.read().bytes.len() as i128;
        let target = match pos {
            SeekFrom::Start(offset) => offset as i128,
            SeekFrom::End(offset) => len + offset as i128,
            SeekFrom::Current(offset) => self.position as i128 + offset as i128,
        };
        if target < 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "invalid seek to a negative position",
            ));
        }
        self.position = u64::try_from(target)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "seek position overflow"))?;
        Ok(self.position)
    }
}

impl FileHandle for MemoryFileHandle {
    fn len(&self) -> Result<u64> {
        Ok(self.content.read().bytes.len() as u64)
    }

    fn set_len(&mut self, len: u64) -> Result<()> {
        self.require_write()?;
        let len = usize::try_from(len)
            .ok()
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or_else(|| io::Error::new(io::ErrorKind::FileTooLarge, "length out of range"))?;
        let mut content = self.content.write();
        content.bytes.resize(len, 0);
        content.modified = Utc::now();
        Ok(())
    }

    fn sync_all(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::memory::state::MemoryState;
    use std::path::Path;

    fn handle(access: FileAccess, append: bool) -> MemoryFileHandle {
        let state = MemoryState::new();
        let content = state.create_file(Path::new("/h.bin"), b"abc".to_vec()).unwrap();
        MemoryFileHandle::new(content, access, append)
    }

    #[test]
    fn test_write_at_far_offset_is_an_error() {
        let mut handle = handle(FileAccess::ReadWrite, false);
        handle.seek(SeekFrom::Start(u64::MAX)).unwrap();

        let err = handle.write(b"z").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::FileTooLarge);
        assert_eq!(handle.len().unwrap(), 3);
    }

    #[test]
    fn test_set_len_beyond_limit_is_an_error() {
        let mut handle = handle(FileAccess::Write, false);
        let err = handle.set_len(u64::MAX).unwrap_err();
        assert_eq!(err.io_kind(), Some(io::ErrorKind::FileTooLarge));
    }

    #[test]
    fn test_write_past_end_zero_fills() {
        let mut handle = handle(FileAccess::ReadWrite, false);
        handle.seek(SeekFrom::End(2)).unwrap();
        handle.write_all(b"!").unwrap();

        handle.rewind().unwrap();
        let mut bytes = Vec::new();
        handle.read_to_end(&mut bytes).unwrap();
        assert_eq!(bytes, b"abc\0\0!");
    }

    #[test]
    fn test_append_ignores_position() {
        let mut handle = handle(FileAccess::Write, true);
        handle.seek(SeekFrom::Start(0)).unwrap();
        handle.write_all(b"de").unwrap();
        assert_eq!(handle.len().unwrap(), 5);
        assert_eq!(handle.stream_position().unwrap(), 5);
    }

    #[test]
    fn test_read_only_handle_rejects_writes() {
        let mut handle = handle(FileAccess::Read, false);
        let err = handle.write(b"x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }
}
