//! Text encoding detection for CSV imports.
//!
//! Spreadsheets exported from Arabic-locale desktop tools are often saved as
//! windows-1256 rather than UTF-8. Detection looks for a UTF-8 byte order
//! mark, then validates multi-byte structure over a bounded prefix.

use encoding_rs::{UTF_8, WINDOWS_1256};
use serde::Serialize;

/// Number of leading bytes inspected when no byte order mark is present.
pub const ENCODING_SNIFF_LEN: usize = 4096;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// The text encoding a CSV import was decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextEncoding {
    /// UTF-8, with or without a byte order mark.
    Utf8,
    /// The legacy single-byte Arabic code page.
    Windows1256,
}

impl TextEncoding {
    /// Returns the WHATWG label of the encoding.
    pub fn label(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Windows1256 => "windows-1256",
        }
    }
}

/// Guesses the encoding of raw CSV bytes.
///
/// Falls back to windows-1256 only when a high byte was seen and at least
/// one multi-byte sequence in the sniffed prefix is not valid UTF-8.
///
/// # Examples
///
/// ```
/// use payroll_engine::import::{detect_encoding, TextEncoding};
///
/// assert_eq!(detect_encoding("الاسم".as_bytes()), TextEncoding::Utf8);
/// assert_eq!(detect_encoding(&[0xC7, 0xE1, 0xC7, 0xD3, 0xE3]), TextEncoding::Windows1256);
/// ```
pub fn detect_encoding(bytes: &[u8]) -> TextEncoding {
    if bytes.starts_with(&UTF8_BOM) {
        return TextEncoding::Utf8;
    }

    let limit = bytes.len().min(ENCODING_SNIFF_LEN);
    let mut i = 0;
    while i < limit {
        let lead = bytes[i];
        if lead < 0x80 {
            i += 1;
            continue;
        }

        let width = match lead {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => return TextEncoding::Windows1256,
        };

        // A sequence straddling the sniff limit is checked against the full
        // buffer; one cut off by the end of the data is invalid.
        let end = i + width;
        if end > bytes.len() {
            return TextEncoding::Windows1256;
        }
        if !bytes[i + 1..end].iter().all(|b| (0x80..=0xBF).contains(b)) {
            return TextEncoding::Windows1256;
        }
        i = end;
    }

    TextEncoding::Utf8
}

/// Decodes CSV bytes to text, removing any leading byte order mark.
///
/// Undecodable sequences become U+FFFD rather than failing the import.
pub fn decode_text(bytes: &[u8]) -> (String, TextEncoding) {
    let encoding = detect_encoding(bytes);
    let (text, _had_errors) = match encoding {
        TextEncoding::Utf8 => UTF_8.decode_with_bom_removal(bytes),
        TextEncoding::Windows1256 => WINDOWS_1256.decode_without_bom_handling(bytes),
    };

    (text.into_owned(), encoding)
}
