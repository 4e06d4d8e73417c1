//! Downloadable roster templates.
//!
//! Templates are UTF-8 CSV with a byte order mark so spreadsheet tools
//! display Arabic correctly. Each header cell carries the Arabic and English
//! labels on two lines, followed by one sample row written in Arabic and one
//! in English. Salaried staff get a housing column; order-driven packages get
//! user code and vehicle plate columns instead.

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeField, WorkType};

use super::aliases::header_label;

const SALARY_COLUMNS: [EmployeeField; 10] = [
    EmployeeField::Name,
    EmployeeField::NameEn,
    EmployeeField::IqamaNumber,
    EmployeeField::JobTitle,
    EmployeeField::Nationality,
    EmployeeField::Phone,
    EmployeeField::Email,
    EmployeeField::BasicSalary,
    EmployeeField::HousingAllowance,
    EmployeeField::Iban,
];

const ORDER_BASED_COLUMNS: [EmployeeField; 10] = [
    EmployeeField::Name,
    EmployeeField::NameEn,
    EmployeeField::IqamaNumber,
    EmployeeField::UserCode,
    EmployeeField::Nationality,
    EmployeeField::Phone,
    EmployeeField::Email,
    EmployeeField::BasicSalary,
    EmployeeField::VehiclePlate,
    EmployeeField::Iban,
];

/// Returns the template columns for a work type.
pub fn template_columns(work_type: WorkType) -> &'static [EmployeeField] {
    if work_type.is_salary() {
        &SALARY_COLUMNS
    } else {
        &ORDER_BASED_COLUMNS
    }
}

fn arabic_sample(field: EmployeeField) -> &'static str {
    match field {
        EmployeeField::Name => "محمد أحمد العتيبي",
        EmployeeField::NameEn => "Mohammed Ahmed Alotaibi",
        EmployeeField::IqamaNumber => "١٠٢٣٤٥٦٧٨٩",
        EmployeeField::JobTitle => "محاسب",
        EmployeeField::Nationality => "سعودي",
        EmployeeField::UserCode => "م-١٠١",
        EmployeeField::Phone => "٠٥٠١٢٣٤٥٦٧",
        EmployeeField::Email => "mohammed@example.com",
        EmployeeField::BasicSalary => "٤٠٠٠",
        EmployeeField::HousingAllowance => "١٠٠٠",
        EmployeeField::VehiclePlate => "أ ب ج ١٢٣٤",
        EmployeeField::Iban => "SA0380000000608010167519",
    }
}

fn english_sample(field: EmployeeField) -> &'static str {
    match field {
        EmployeeField::Name => "Rahul Kumar",
        EmployeeField::NameEn => "Rahul Kumar",
        EmployeeField::IqamaNumber => "2456789012",
        EmployeeField::JobTitle => "Accountant",
        EmployeeField::Nationality => "Indian",
        EmployeeField::UserCode => "EMP-102",
        EmployeeField::Phone => "0559876543",
        EmployeeField::Email => "rahul@example.com",
        EmployeeField::BasicSalary => "3,500.00",
        EmployeeField::HousingAllowance => "875",
        EmployeeField::VehiclePlate => "ABC 1234",
        EmployeeField::Iban => "SA4420000001234567891234",
    }
}

/// Writes the import template for a work type.
///
/// The output re-imports cleanly through [`super::normalize`], yielding the
/// two sample employees.
pub fn export_template(work_type: WorkType) -> EngineResult<Vec<u8>> {
    let columns = template_columns(work_type);
    let to_export_error = |e: csv::Error| EngineError::Export {
        message: e.to_string(),
    };

    let mut writer = csv::WriterBuilder::new().from_writer(vec![0xEF, 0xBB, 0xBF]);
    writer
        .write_record(columns.iter().map(|field| header_label(*field)))
        .map_err(to_export_error)?;
    writer
        .write_record(columns.iter().map(|field| arabic_sample(*field)))
        .map_err(to_export_error)?;
    writer
        .write_record(columns.iter().map(|field| english_sample(*field)))
        .map_err(to_export_error)?;

    let bytes = writer.into_inner().map_err(|e| EngineError::Export {
        message: e.to_string(),
    })?;

    debug!(
        work_type = work_type.as_str(),
        columns = columns.len(),
        bytes = bytes.len(),
        "Exported roster template"
    );
    Ok(bytes)
}
