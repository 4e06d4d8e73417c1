//! Reading raw import bytes into a grid of cell strings.

use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::delimiter::detect_delimiter;
use super::encoding::decode_text;

/// The container format of an uploaded roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Delimited text in an unknown encoding.
    Csv,
    /// Office Open XML workbook.
    Xlsx,
    /// Legacy binary workbook.
    Xls,
}

impl FileKind {
    /// Infers the kind from a file name's extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::import::FileKind;
    ///
    /// assert_eq!(FileKind::from_file_name("roster.XLSX"), Some(FileKind::Xlsx));
    /// assert_eq!(FileKind::from_file_name("roster.txt"), None);
    /// ```
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, extension) = name.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "csv" => Some(FileKind::Csv),
            "xlsx" => Some(FileKind::Xlsx),
            "xls" => Some(FileKind::Xls),
            _ => None,
        }
    }
}

/// Reads every row of the file as raw cell strings.
///
/// CSV input is decoded and delimiter-sniffed first. Workbooks are read
/// from their first sheet.
pub fn read_rows(bytes: &[u8], kind: FileKind) -> EngineResult<Vec<Vec<String>>> {
    match kind {
        FileKind::Csv => read_csv_rows(bytes),
        FileKind::Xlsx | FileKind::Xls => read_workbook_rows(bytes),
    }
}

fn read_csv_rows(bytes: &[u8]) -> EngineResult<Vec<Vec<String>>> {
    let (text, encoding) = decode_text(bytes);
    let delimiter = detect_delimiter(&text);
    debug!(
        encoding = encoding.label(),
        delimiter = %char::from(delimiter),
        "Decoded CSV import"
    );

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| EngineError::parse(format!("Malformed CSV: {}", e)))?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

fn read_workbook_rows(bytes: &[u8]) -> EngineResult<Vec<Vec<String>>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| EngineError::parse(format!("Unreadable workbook: {}", e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| EngineError::parse("Workbook contains no sheets"))?
        .map_err(|e| EngineError::parse(format!("Unreadable worksheet: {}", e)))?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect())
}

/// Renders a workbook cell the way a user would type it.
///
/// Whole-number floats lose their `.0` so ID and phone columns stored as
/// numbers come through intact.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        other => other.to_string(),
    }
}
