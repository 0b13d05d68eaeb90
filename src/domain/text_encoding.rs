use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::error::FsError;
use crate::shared::Result;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Character encodings understood by the text operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TextEncoding {
    /// UTF-8 without a byte order mark (default)
    #[default]
    Utf8,
    /// UTF-8 written with a byte order mark
    Utf8Bom,
    Utf16Le,
    Utf16Be,
    /// ISO-8859-1: one byte per character, U+0000..=U+00FF
    Latin1,
}

impl TextEncoding {
    /// Byte order mark written at the start of a new file.
    pub fn preamble(&self) -> &'static [u8] {
        match self {
            TextEncoding::Utf8 | TextEncoding::Latin1 => &[],
            TextEncoding::Utf8Bom => UTF8_BOM,
            TextEncoding::Utf16Le => UTF16LE_BOM,
            TextEncoding::Utf16Be => UTF16BE_BOM,
        }
    }

    /// Detects a byte order mark, returning the encoding and the BOM length.
    pub fn detect_bom(bytes: &[u8]) -> Option<(TextEncoding, usize)> {
        if bytes.starts_with(UTF8_BOM) {
            Some((TextEncoding::Utf8Bom, UTF8_BOM.len()))
        } else if bytes.starts_with(UTF16LE_BOM) {
            Some((TextEncoding::Utf16Le, UTF16LE_BOM.len()))
        } else if bytes.starts_with(UTF16BE_BOM) {
            Some((TextEncoding::Utf16Be, UTF16BE_BOM.len()))
        } else {
            None
        }
    }

    /// Encodes `text` without a preamble.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        match self {
            TextEncoding::Utf8 | TextEncoding::Utf8Bom => Ok(text.as_bytes().to_vec()),
            TextEncoding::Utf16Le => Ok(text
                .encode_utf16()
                .flat_map(|unit| unit.to_le_bytes())
                .collect()),
            TextEncoding::Utf16Be => Ok(text
                .encode_utf16()
                .flat_map(|unit| unit.to_be_bytes())
                .collect()),
            TextEncoding::Latin1 => text
                .chars()
                .map(|c| {
                    u8::try_from(u32::from(c)).map_err(|_| FsError::Encode {
                        encoding: *self,
                        details: format!("character {:?} is outside latin1", c),
                    })
                })
                .collect(),
        }
    }

    /// Decodes `bytes` strictly; a leading BOM is not stripped.
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        match self {
            TextEncoding::Utf8 | TextEncoding::Utf8Bom => String::from_utf8(bytes.to_vec())
                .map_err(|e| FsError::Decode {
                    encoding: *self,
                    details: e.to_string(),
                }),
            TextEncoding::Utf16Le | TextEncoding::Utf16Be => {
                if bytes.len() % 2 != 0 {
                    return Err(FsError::Decode {
                        encoding: *self,
                        details: format!("odd byte count {}", bytes.len()),
                    });
                }
                let units: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|pair| self.unit_from_bytes([pair[0], pair[1]]))
                    .collect();
                String::from_utf16(&units).map_err(|e| FsError::Decode {
                    encoding: *self,
                    details: e.to_string(),
                })
            }
            TextEncoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }

    /// Decodes a whole file: a BOM selects the encoding, otherwise `fallback` is used.
    pub fn decode_detecting_bom(bytes: &[u8], fallback: Option<TextEncoding>) -> Result<String> {
        match Self::detect_bom(bytes) {
            Some((encoding, bom_len)) => encoding.decode(&bytes[bom_len..]),
            None => fallback.unwrap_or_default().decode(bytes),
        }
    }

    /// Combines two bytes into a UTF-16 code unit in this encoding's byte order.
    pub(crate) fn unit_from_bytes(&self, pair: [u8; 2]) -> u16 {
        match self {
            TextEncoding::Utf16Be => u16::from_be_bytes(pair),
            _ => u16::from_le_bytes(pair),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Utf8Bom => "utf-8-bom",
            TextEncoding::Utf16Le => "utf-16le",
            TextEncoding::Utf16Be => "utf-16be",
            TextEncoding::Latin1 => "latin1",
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextEncoding {
    type Err = FsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "utf-8-bom" | "utf8-bom" | "utf-8bom" => Ok(TextEncoding::Utf8Bom),
            "utf-16" | "utf-16le" | "utf16" | "utf16le" | "unicode" => Ok(TextEncoding::Utf16Le),
            "utf-16be" | "utf16be" | "bigendianunicode" => Ok(TextEncoding::Utf16Be),
            "latin1" | "latin-1" | "iso-8859-1" => Ok(TextEncoding::Latin1),
            _ => Err(FsError::UnsupportedEncoding {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for TextEncoding {
    type Error = FsError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TextEncoding> for String {
    fn from(encoding: TextEncoding) -> Self {
        encoding.name().to_string()
    }
}
