//! Roster import normalization.
//!
//! This module turns an uploaded CSV or workbook into [`EmployeeRecord`]s:
//! encoding and delimiter sniffing for CSV, bilingual header resolution,
//! blank-row skipping, and permissive numeric parsing. Field completeness is
//! reported separately by [`incomplete_rows`]; the normalizer itself never
//! rejects a row for missing data other than a name.

mod aliases;
mod delimiter;
mod encoding;
mod sheet;
mod template;

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeField, EmployeeRecord, WorkType};

pub use aliases::{
    COLUMN_ALIASES, ColumnAliasTable, header_label, normalize_header, resolve_header,
};
pub use delimiter::{DELIMITER_SNIFF_LEN, detect_delimiter};
pub use encoding::{ENCODING_SNIFF_LEN, TextEncoding, decode_text, detect_encoding};
pub use sheet::{FileKind, read_rows};
pub use template::{export_template, template_columns};

/// The employees read from a roster file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportOutcome {
    /// Records in input row order.
    pub employees: Vec<EmployeeRecord>,
    /// Data rows dropped for being blank or nameless.
    pub skipped_count: usize,
}

/// A normalized record missing one or more required fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncompleteRow {
    /// 1-based position in the imported employee list.
    pub row: usize,
    /// The required fields that are empty.
    pub missing: Vec<EmployeeField>,
}

/// Maps each resolved field to the first column carrying it.
fn resolve_columns(header: &[String]) -> BTreeMap<EmployeeField, usize> {
    let mut columns = BTreeMap::new();
    for (index, cell) in header.iter().enumerate() {
        match resolve_header(cell) {
            Some(field) => {
                columns.entry(field).or_insert(index);
            }
            None if !cell.trim().is_empty() => {
                debug!(column = index, header = %cell.trim(), "Ignoring unmapped column");
            }
            None => {}
        }
    }
    columns
}

fn is_blank(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

fn decode_row(row: &[String], columns: &BTreeMap<EmployeeField, usize>) -> EmployeeRecord {
    let mut record = EmployeeRecord::default();
    for (field, index) in columns {
        let raw = row.get(*index).map(String::as_str).unwrap_or("");
        record.set_field(*field, raw);
    }
    if record.name.is_empty() {
        record.name = record.name_en.clone();
    }
    record
}

/// Normalizes an uploaded roster into employee records.
///
/// The first row is the header. Blank rows and rows without a name (Arabic
/// or English) are skipped and counted. `work_type` does not affect parsing.
///
/// # Errors
///
/// Returns [`EngineError::Parse`] when the file cannot be read or decoded,
/// or has fewer than two rows.
///
/// # Examples
///
/// ```
/// use payroll_engine::import::{normalize, FileKind};
/// use payroll_engine::models::WorkType;
/// use rust_decimal::Decimal;
///
/// let csv = "Employee Name;Iqama Number;Salary\nAli;2400000001;3,500\n;;\n";
/// let outcome = normalize(csv.as_bytes(), FileKind::Csv, WorkType::Salary).unwrap();
///
/// assert_eq!(outcome.employees.len(), 1);
/// assert_eq!(outcome.employees[0].basic_salary, Decimal::from(3500));
/// assert_eq!(outcome.skipped_count, 1);
/// ```
pub fn normalize(bytes: &[u8], kind: FileKind, work_type: WorkType) -> EngineResult<ImportOutcome> {
    let rows = read_rows(bytes, kind)?;
    if rows.len() < 2 {
        return Err(EngineError::parse(format!(
            "expected a header row and at least one data row, found {} row(s)",
            rows.len()
        )));
    }

    let columns = resolve_columns(&rows[0]);
    debug!(
        mapped_columns = columns.len(),
        header_cells = rows[0].len(),
        "Resolved import headers"
    );

    let mut employees = Vec::with_capacity(rows.len() - 1);
    let mut skipped_count = 0;
    for row in &rows[1..] {
        if is_blank(row) {
            skipped_count += 1;
            continue;
        }
        let record = decode_row(row, &columns);
        if record.name.is_empty() {
            skipped_count += 1;
            continue;
        }
        employees.push(record);
    }

    info!(
        kind = ?kind,
        work_type = work_type.as_str(),
        employees = employees.len(),
        skipped = skipped_count,
        "Normalized roster import"
    );

    Ok(ImportOutcome {
        employees,
        skipped_count,
    })
}

/// Lists the records missing required fields, for the caller to report.
pub fn incomplete_rows(employees: &[EmployeeRecord]) -> Vec<IncompleteRow> {
    employees
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let missing = record.missing_required_fields();
            (!missing.is_empty()).then_some(IncompleteRow {
                row: index + 1,
                missing,
            })
        })
        .collect()
}
