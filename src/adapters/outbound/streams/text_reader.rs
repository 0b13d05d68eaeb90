use std::io::BufRead;

use crate::domain::TextEncoding;
use crate::ports::outbound::TextReader;
use crate::shared::error::FsError;
use crate::shared::Result;

/// Buffered text reader over any byte stream.
///
/// Characters are decoded one at a time in the reader's encoding. When BOM
/// detection is enabled, a byte order mark at the start of the stream
/// replaces the configured encoding and is skipped.
#[derive(Debug)]
pub struct StreamTextReader<R> {
    inner: R,
    encoding: TextEncoding,
    detect_bom: bool,
    bom_checked: bool,
    peeked: Option<char>,
}

impl<R: BufRead + Send> StreamTextReader<R> {
    pub fn new(inner: R, encoding: TextEncoding, detect_encoding_from_bom: bool) -> Self {
        Self {
            inner,
            encoding,
            detect_bom: detect_encoding_from_bom,
            bom_checked: false,
            peeked: None,
        }
    }

    /// UTF-8 reader that honours a byte order mark.
    pub fn utf8(inner: R) -> Self {
        Self::new(inner, TextEncoding::Utf8, true)
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn check_bom(&mut self) -> Result<()> {
        if self.bom_checked {
            return Ok(());
        }
        self.bom_checked = true;
        if !self.detect_bom {
            return Ok(());
        }

        let buf = self.inner.fill_buf()?;
        if let Some((encoding, bom_len)) = TextEncoding::detect_bom(buf) {
            self.encoding = encoding;
            self.inner.consume(bom_len);
        }
        Ok(())
    }

    fn read_byte(&mut self) -> Result<Option<u8>> {
        let buf = self.inner.fill_buf()?;
        let Some(&byte) = buf.first() else {
            return Ok(None);
        };
        self.inner.consume(1);
        Ok(Some(byte))
    }

    fn decode_error(&self, details: impl Into<String>) -> FsError {
        FsError::Decode {
            encoding: self.encoding,
            details: details.into(),
        }
    }

    fn read_unit(&mut self) -> Result<Option<u16>> {
        let Some(first) = self.read_byte()? else {
            return Ok(None);
        };
        let second = self
            .read_byte()?
            .ok_or_else(|| self.decode_error("stream ends inside a code unit"))?;
        Ok(Some(self.encoding.unit_from_bytes([first, second])))
    }

    fn decode_next(&mut self) -> Result<Option<char>> {
        match self.encoding {
            TextEncoding::Utf8 | TextEncoding::Utf8Bom => {
                let Some(first) = self.read_byte()? else {
                    return Ok(None);
                };
                let width = utf8_width(first);
                if width == 0 {
                    return Err(self.decode_error(format!("invalid leading byte 0x{:02x}", first)));
                }
                let mut bytes = [first, 0, 0, 0];
                for slot in bytes.iter_mut().take(width).skip(1) {
                    *slot = self
                        .read_byte()?
                        .ok_or_else(|| self.decode_error("stream ends inside a character"))?;
                }
                let decoded = std::str::from_utf8(&bytes[..width])
                    .map_err(|e| self.decode_error(e.to_string()))?;
                Ok(decoded.chars().next())
            }
            TextEncoding::Utf16Le | TextEncoding::Utf16Be => {
                let Some(unit) = self.read_unit()? else {
                    return Ok(None);
                };
                let units = if (0xD800..0xDC00).contains(&unit) {
                    let low = self
                        .read_unit()?
                        .ok_or_else(|| self.decode_error("unpaired surrogate at end of stream"))?;
                    vec![unit, low]
                } else {
                    vec![unit]
                };
                match char::decode_utf16(units).next() {
                    Some(Ok(c)) => Ok(Some(c)),
                    Some(Err(e)) => Err(self.decode_error(e.to_string())),
                    None => Ok(None),
                }
            }
            TextEncoding::Latin1 => Ok(self.read_byte()?.map(char::from)),
        }
    }

    fn next_char(&mut self) -> Result<Option<char>> {
        if let Some(c) = self.peeked.take() {
            return Ok(Some(c));
        }
        self.check_bom()?;
        self.decode_next()
    }
}

/// Byte length of a UTF-8 sequence from its first byte; 0 when invalid.
fn utf8_width(first: u8) -> usize {
    match first {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

impl<R: BufRead + Send> TextReader for StreamTextReader<R> {
    fn current_encoding(&self) -> TextEncoding {
        self.encoding
    }

    fn peek(&mut self) -> Result<Option<char>> {
        if self.peeked.is_none() {
            self.peeked = self.next_char()?;
        }
        Ok(self.peeked)
    }

    fn read_char(&mut self) -> Result<Option<char>> {
        self.next_char()
    }

    fn read_chars(&mut self, buf: &mut [char]) -> Result<usize> {
        let mut count = 0;
        while count < buf.len() {
            match self.next_char()? {
                Some(c) => {
                    buf[count] = c;
                    count += 1;
                }
                None => break,
            }
        }
        Ok(count)
    }

    fn read_block(&mut self, buf: &mut [char]) -> Result<usize> {
        // Character-at-a-time decoding never returns short reads before EOF.
        self.read_chars(buf)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let mut saw_any = false;

        loop {
            match self.next_char()? {
                None => return Ok(saw_any.then_some(line)),
                Some('\n') => return Ok(Some(line)),
                Some('\r') => {
                    if self.peek()? == Some('\n') {
                        self.peeked = None;
                    }
                    return Ok(Some(line));
                }
                Some(c) => {
                    saw_any = true;
                    line.push(c);
                }
            }
        }
    }

    fn read_to_end(&mut self) -> Result<String> {
        let mut text = String::new();
        while let Some(c) = self.next_char()? {
            text.push(c);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(bytes: &[u8]) -> StreamTextReader<Cursor<Vec<u8>>> {
        StreamTextReader::utf8(Cursor::new(bytes.to_vec()))
    }

    #[test]
    fn test_read_lines_with_mixed_terminators() {
        let mut r = reader(b"one\ntwo\r\nthree\rfour");
        assert_eq!(r.read_line().unwrap().as_deref(), Some("one"));
        assert_eq!(r.read_line().unwrap().as_deref(), Some("two"));
        assert_eq!(r.read_line().unwrap().as_deref(), Some("three"));
        assert_eq!(r.read_line().unwrap().as_deref(), Some("four"));
        assert_eq!(r.read_line().unwrap(), None);
    }

    #[test]
    fn test_read_line_empty_lines_and_trailing_newline() {
        let mut r = reader(b"a\n\nb\n");
        assert_eq!(r.read_line().unwrap().as_deref(), Some("a"));
        assert_eq!(r.read_line().unwrap().as_deref(), Some(""));
        assert_eq!(r.read_line().unwrap().as_deref(), Some("b"));
        assert_eq!(r.read_line().unwrap(), None);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut r = reader("é!".as_bytes());
        assert_eq!(r.peek().unwrap(), Some('é'));
        assert_eq!(r.peek().unwrap(), Some('é'));
        assert_eq!(r.read_char().unwrap(), Some('é'));
        assert_eq!(r.read_char().unwrap(), Some('!'));
        assert_eq!(r.read_char().unwrap(), None);
        assert_eq!(r.peek().unwrap(), None);
    }

    #[test]
    fn test_utf8_bom_is_skipped() {
        let mut r = reader(&[0xEF, 0xBB, 0xBF, b'h', b'i']);
        assert_eq!(r.read_to_end().unwrap(), "hi");
        assert_eq!(r.current_encoding(), TextEncoding::Utf8Bom);
    }

    #[test]
    fn test_utf16_bom_switches_encoding() {
        let mut bytes = vec![0xFF, 0xFE];
        bytes.extend(TextEncoding::Utf16Le.encode("a😀\nb").unwrap());
        let mut r = reader(&bytes);
        assert_eq!(r.read_line().unwrap().as_deref(), Some("a😀"));
        assert_eq!(r.read_line().unwrap().as_deref(), Some("b"));
        assert_eq!(r.current_encoding(), TextEncoding::Utf16Le);
    }

    #[test]
    fn test_bom_detection_disabled() {
        let bytes = [0xFF, b'a'];
        let mut r = StreamTextReader::new(Cursor::new(bytes.to_vec()), TextEncoding::Latin1, false);
        assert_eq!(r.read_to_end().unwrap(), "ÿa");
    }

    #[test]
    fn test_read_chars_and_block() {
        let mut r = reader(b"abcdef");
        let mut buf = ['\0'; 4];
        assert_eq!(r.read_chars(&mut buf).unwrap(), 4);
        assert_eq!(buf, ['a', 'b', 'c', 'd']);
        assert_eq!(r.read_block(&mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], &['e', 'f']);
        assert_eq!(r.read_block(&mut buf).unwrap(), 0);
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        let mut r = reader(&[b'o', b'k', 0xFF]);
        assert_eq!(r.read_char().unwrap(), Some('o'));
        assert_eq!(r.read_char().unwrap(), Some('k'));
        assert!(matches!(r.read_char(), Err(FsError::Decode { .. })));
    }

    #[test]
    fn test_truncated_utf8_sequence_is_decode_error() {
        let mut r = reader(&[0xE2, 0x82]);
        assert!(matches!(r.read_to_end(), Err(FsError::Decode { .. })));
    }

    #[test]
    fn test_empty_stream() {
        let mut r = reader(b"");
        assert_eq!(r.read_line().unwrap(), None);
        assert_eq!(r.read_to_end().unwrap(), "");
    }
}
