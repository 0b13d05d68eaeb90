use tracing::debug;

use crate::domain::TextEncoding;
use crate::ports::outbound::TextReader;
use crate::shared::Result;

/// Decorator that forwards every `TextReader` member to the wrapped reader,
/// emitting a debug event per call.
#[derive(Debug)]
pub struct LoggingTextReader<R> {
    inner: R,
    label: String,
}

impl<R: TextReader> LoggingTextReader<R> {
    /// `label` identifies the stream in log events (usually its path).
    pub fn new(inner: R, label: impl Into<String>) -> Self {
        Self {
            inner,
            label: label.into(),
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: TextReader> TextReader for LoggingTextReader<R> {
    fn current_encoding(&self) -> TextEncoding {
        debug!(stream = %self.label, "current_encoding");
        self.inner.current_encoding()
    }

    fn peek(&mut self) -> Result<Option<char>> {
        debug!(stream = %self.label, "peek");
        self.inner.peek()
    }

    fn read_char(&mut self) -> Result<Option<char>> {
        debug!(stream = %self.label, "read_char");
        self.inner.read_char()
    }

    fn read_chars(&mut self, buf: &mut [char]) -> Result<usize> {
        debug!(stream = %self.label, len = buf.len(), "read_chars");
        self.inner.read_chars(buf)
    }

    fn read_block(&mut self, buf: &mut [char]) -> Result<usize> {
        debug!(stream = %self.label, len = buf.len(), "read_block");
        self.inner.read_block(buf)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        debug!(stream = %self.label, "read_line");
        self.inner.read_line()
    }

    fn read_to_end(&mut self) -> Result<String> {
        debug!(stream = %self.label, "read_to_end");
        self.inner.read_to_end()
    }
}
