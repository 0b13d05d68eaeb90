use std::fmt;
use std::io::{BufWriter, Write};

use crate::domain::{TextEncoding, NEWLINE};
use crate::ports::outbound::TextWriter;
use crate::shared::Result;

/// Buffered text writer over any byte sink.
///
/// Buffered bytes are flushed on `flush` and when the writer is dropped.
#[derive(Debug)]
pub struct StreamTextWriter<W: Write> {
    inner: BufWriter<W>,
    encoding: TextEncoding,
    new_line: String,
}

impl<W: Write + Send> StreamTextWriter<W> {
    /// Writer that emits no preamble.
    pub fn new(inner: W, encoding: TextEncoding) -> Self {
        Self {
            inner: BufWriter::new(inner),
            encoding,
            new_line: NEWLINE.to_string(),
        }
    }

    /// Writer that first emits the encoding's byte order mark.
    pub fn with_preamble(inner: W, encoding: TextEncoding) -> Result<Self> {
        let mut writer = Self::new(inner, encoding);
        writer.inner.write_all(encoding.preamble())?;
        Ok(writer)
    }

    /// Flushes and returns the underlying sink.
    pub fn into_inner(self) -> Result<W> {
        self.inner
            .into_inner()
            .map_err(|e| e.into_error().into())
    }
}

impl<W: Write + Send> TextWriter for StreamTextWriter<W> {
    fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    fn new_line(&self) -> &str {
        &self.new_line
    }

    fn set_new_line(&mut self, new_line: &str) {
        self.new_line = new_line.to_string();
    }

    fn write_str(&mut self, value: &str) -> Result<()> {
        let bytes = self.encoding.encode(value)?;
        self.inner.write_all(&bytes)?;
        Ok(())
    }

    fn write_char(&mut self, value: char) -> Result<()> {
        let mut buf = [0u8; 4];
        self.write_str(value.encode_utf8(&mut buf))
    }

    fn write_chars(&mut self, value: &[char]) -> Result<()> {
        let text: String = value.iter().collect();
        self.write_str(&text)
    }

    fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_str(&value.to_string())
    }

    fn write_i32(&mut self, value: i32) -> Result<()> {
        self.write_str(&value.to_string())
    }

    fn write_i64(&mut self, value: i64) -> Result<()> {
        self.write_str(&value.to_string())
    }

    fn write_u32(&mut self, value: u32) -> Result<()> {
        self.write_str(&value.to_string())
    }

    fn write_u64(&mut self, value: u64) -> Result<()> {
        self.write_str(&value.to_string())
    }

    fn write_f32(&mut self, value: f32) -> Result<()> {
        self.write_str(&value.to_string())
    }

    fn write_f64(&mut self, value: f64) -> Result<()> {
        self.write_str(&value.to_string())
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.write_str(&args.to_string())
    }

    fn write_line(&mut self) -> Result<()> {
        let new_line = self.new_line.clone();
        self.write_str(&new_line)
    }

    fn write_line_str(&mut self, value: &str) -> Result<()> {
        self.write_str(value)?;
        self.write_line()
    }

    fn write_line_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.write_str(&args.to_string())?;
        self.write_line()
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}
