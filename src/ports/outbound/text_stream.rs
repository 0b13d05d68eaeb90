use std::fmt;

use crate::domain::TextEncoding;
use crate::shared::Result;

/// Reader of characters and lines from a text stream.
pub trait TextReader: Send {
    /// Encoding currently used to decode the stream (after BOM detection).
    fn current_encoding(&self) -> TextEncoding;

    /// Next character without consuming it; `None` at end of stream.
    fn peek(&mut self) -> Result<Option<char>>;

    /// Consumes the next character; `None` at end of stream.
    fn read_char(&mut self) -> Result<Option<char>>;

    /// Reads up to `buf.len()` characters, returning how many were read.
    fn read_chars(&mut self, buf: &mut [char]) -> Result<usize>;

    /// Reads until `buf` is full or the stream ends.
    fn read_block(&mut self, buf: &mut [char]) -> Result<usize>;

    /// Reads a line without its terminator (`\n`, `\r\n` or `\r`);
    /// `None` at end of stream.
    fn read_line(&mut self) -> Result<Option<String>>;

    /// Reads everything that remains.
    fn read_to_end(&mut self) -> Result<String>;
}

/// Writer of characters, strings and primitive values to a text stream.
///
/// Values are rendered with their `Display` implementation.
pub trait TextWriter: Send {
    fn encoding(&self) -> TextEncoding;

    /// Line terminator appended by the `write_line*` methods.
    fn new_line(&self) -> &str;

    fn set_new_line(&mut self, new_line: &str);

    fn write_str(&mut self, value: &str) -> Result<()>;

    fn write_char(&mut self, value: char) -> Result<()>;

    fn write_chars(&mut self, value: &[char]) -> Result<()>;

    fn write_bool(&mut self, value: bool) -> Result<()>;

    fn write_i32(&mut self, value: i32) -> Result<()>;

    fn write_i64(&mut self, value: i64) -> Result<()>;

    fn write_u32(&mut self, value: u32) -> Result<()>;

    fn write_u64(&mut self, value: u64) -> Result<()>;

    fn write_f32(&mut self, value: f32) -> Result<()>;

    fn write_f64(&mut self, value: f64) -> Result<()>;

    /// Writes formatted text; makes `write!` usable on a writer.
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<()>;

    /// Writes the line terminator.
    fn write_line(&mut self) -> Result<()>;

    fn write_line_str(&mut self, value: &str) -> Result<()>;

    /// Writes formatted text followed by the line terminator.
    fn write_line_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<()>;

    fn flush(&mut self) -> Result<()>;
}

impl TextReader for Box<dyn TextReader> {
    fn current_encoding(&self) -> TextEncoding {
        (**self).current_encoding()
    }

    fn peek(&mut self) -> Result<Option<char>> {
        (**self).peek()
    }

    fn read_char(&mut self) -> Result<Option<char>> {
        (**self).read_char()
    }

    fn read_chars(&mut self, buf: &mut [char]) -> Result<usize> {
        (**self).read_chars(buf)
    }

    fn read_block(&mut self, buf: &mut [char]) -> Result<usize> {
        (**self).read_block(buf)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        (**self).read_line()
    }

    fn read_to_end(&mut self) -> Result<String> {
        (**self).read_to_end()
    }
}

impl TextWriter for Box<dyn TextWriter> {
    fn encoding(&self) -> TextEncoding {
        (**self).encoding()
    }

    fn new_line(&self) -> &str {
        (**self).new_line()
    }

    fn set_new_line(&mut self, new_line: &str) {
        (**self).set_new_line(new_line)
    }

    fn write_str(&mut self, value: &str) -> Result<()> {
        (**self).write_str(value)
    }

    fn write_char(&mut self, value: char) -> Result<()> {
        (**self).write_char(value)
    }

    fn write_chars(&mut self, value: &[char]) -> Result<()> {
        (**self).write_chars(value)
    }

    fn write_bool(&mut self, value: bool) -> Result<()> {
        (**self).write_bool(value)
    }

    fn write_i32(&mut self, value: i32) -> Result<()> {
        (**self).write_i32(value)
    }

    fn write_i64(&mut self, value: i64) -> Result<()> {
        (**self).write_i64(value)
    }

    fn write_u32(&mut self, value: u32) -> Result<()> {
        (**self).write_u32(value)
    }

    fn write_u64(&mut self, value: u64) -> Result<()> {
        (**self).write_u64(value)
    }

    fn write_f32(&mut self, value: f32) -> Result<()> {
        (**self).write_f32(value)
    }

    fn write_f64(&mut self, value: f64) -> Result<()> {
        (**self).write_f64(value)
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        (**self).write_fmt(args)
    }

    fn write_line(&mut self) -> Result<()> {
        (**self).write_line()
    }

    fn write_line_str(&mut self, value: &str) -> Result<()> {
        (**self).write_line_str(value)
    }

    fn write_line_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        (**self).write_line_fmt(args)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}
