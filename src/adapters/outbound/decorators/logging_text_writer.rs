use std::fmt;
use tracing::debug;

use crate::domain::TextEncoding;
use crate::ports::outbound::TextWriter;
use crate::shared::Result;

/// Decorator that forwards every `TextWriter` member to the wrapped writer,
/// emitting a debug event per call.
#[derive(Debug)]
pub struct LoggingTextWriter<W> {
    inner: W,
    label: String,
}

impl<W: TextWriter> LoggingTextWriter<W> {
    pub fn new(inner: W, label: impl Into<String>) -> Self {
        Self {
            inner,
            label: label.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: TextWriter> TextWriter for LoggingTextWriter<W> {
    fn encoding(&self) -> TextEncoding {
        debug!(stream = %self.label, "encoding");
        self.inner.encoding()
    }

    fn new_line(&self) -> &str {
        debug!(stream = %self.label, "new_line");
        self.inner.new_line()
    }

    fn set_new_line(&mut self, new_line: &str) {
        debug!(stream = %self.label, new_line = ?new_line, "set_new_line");
        self.inner.set_new_line(new_line)
    }

    fn write_str(&mut self, value: &str) -> Result<()> {
        debug!(stream = %self.label, len = value.len(), "write_str");
        self.inner.write_str(value)
    }

    fn write_char(&mut self, value: char) -> Result<()> {
        debug!(stream = %self.label, "write_char");
        self.inner.write_char(value)
    }

    fn write_chars(&mut self, value: &[char]) -> Result<()> {
        debug!(stream = %self.label, len = value.len(), "write_chars");
        self.inner.write_chars(value)
    }

    fn write_bool(&mut self, value: bool) -> Result<()> {
        debug!(stream = %self.label, "write_bool");
        self.inner.write_bool(value)
    }

    fn write_i32(&mut self, value: i32) -> Result<()> {
        debug!(stream = %self.label, "write_i32");
        self.inner.write_i32(value)
    }

    fn write_i64(&mut self, value: i64) -> Result<()> {
        debug!(stream = %self.label, "write_i64");
        self.inner.write_i64(value)
    }

    fn write_u32(&mut self, value: u32) -> Result<()> {
        debug!(stream = %self.label, "write_u32");
        self.inner.write_u32(value)
    }

    fn write_u64(&mut self, value: u64) -> Result<()> {
        debug!(stream = %self.label, "write_u64");
        self.inner.write_u64(value)
    }

    fn write_f32(&mut self, value: f32) -> Result<()> {
        debug!(stream = %self.label, "write_f32");
        self.inner.write_f32(value)
    }

    fn write_f64(&mut self, value: f64) -> Result<()> {
        debug!(stream = %self.label, "write_f64");
        self.inner.write_f64(value)
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        debug!(stream = %self.label, "write_fmt");
        self.inner.write_fmt(args)
    }

    fn write_line(&mut self) -> Result<()> {
        debug!(stream = %self.label, "write_line");
        self.inner.write_line()
    }

    fn write_line_str(&mut self, value: &str) -> Result<()> {
        debug!(stream = %self.label, len = value.len(), "write_line_str");
        self.inner.write_line_str(value)
    }

    fn write_line_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        debug!(stream = %self.label, "write_line_fmt");
        self.inner.write_line_fmt(args)
    }

    fn flush(&mut self) -> Result<()> {
        debug!(stream = %self.label, "flush");
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::streams::StreamTextWriter;

    #[test]
    fn test_output_matches_undecorated_writer() {
        fn exercise(writer: &mut dyn TextWriter) {
            writer.set_new_line("\n");
            writer.write_str("s").unwrap();
            writer.write_char('c').unwrap();
            writer.write_chars(&['x', 'y']).unwrap();
            writer.write_bool(false).unwrap();
            writer.write_i32(-1).unwrap();
            writer.write_i64(-2).unwrap();
            writer.write_u32(3).unwrap();
            writer.write_u64(4).unwrap();
            writer.write_f32(0.5).unwrap();
            writer.write_f64(2.25).unwrap();
            writer.write_fmt(format_args!("[{}]", 5)).unwrap();
            writer.write_line().unwrap();
            writer.write_line_str("line").unwrap();
            writer.write_line_fmt(format_args!("{}", "fmt")).unwrap();
            writer.flush().unwrap();
        }

        let mut plain = StreamTextWriter::new(Vec::new(), TextEncoding::Utf8);
        exercise(&mut plain);
        let expected = plain.into_inner().unwrap();

        let mut decorated =
            LoggingTextWriter::new(StreamTextWriter::new(Vec::new(), TextEncoding::Utf8), "mem");
        exercise(&mut decorated);
        assert_eq!(decorated.new_line(), "\n");
        assert_eq!(decorated.encoding(), TextEncoding::Utf8);
        let actual = decorated.into_inner().into_inner().unwrap();

        assert_eq!(actual, expected);
        assert_eq!(actual, b"scxyfalse-1-2340.52.25[5]\nline\nfmt\n");
    }
}
