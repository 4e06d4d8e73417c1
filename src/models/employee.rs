//! Employee roster model and canonical field names.
//!
//! This module defines the [`EmployeeRecord`] produced by the importer or by
//! manual entry, and the [`EmployeeField`] enum naming each canonical column.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient;

/// A canonical employee field that imported columns are mapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeField {
    /// Employee name (Arabic or primary script).
    Name,
    /// Employee name in English.
    NameEn,
    /// National ID or iqama (residency permit) number.
    IqamaNumber,
    /// Job title.
    JobTitle,
    /// Nationality.
    Nationality,
    /// Internal user or employee code.
    UserCode,
    /// Phone number.
    Phone,
    /// Email address.
    Email,
    /// Monthly basic salary.
    BasicSalary,
    /// Monthly housing allowance.
    HousingAllowance,
    /// Vehicle plate number.
    VehiclePlate,
    /// Bank IBAN.
    Iban,
}

impl EmployeeField {
    /// Every canonical field, in roster column order.
    pub const ALL: [EmployeeField; 12] = [
        EmployeeField::Name,
        EmployeeField::NameEn,
        EmployeeField::IqamaNumber,
        EmployeeField::JobTitle,
        EmployeeField::Nationality,
        EmployeeField::UserCode,
        EmployeeField::Phone,
        EmployeeField::Email,
        EmployeeField::BasicSalary,
        EmployeeField::HousingAllowance,
        EmployeeField::VehiclePlate,
        EmployeeField::Iban,
    ];

    /// Returns the snake_case field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeField::Name => "name",
            EmployeeField::NameEn => "name_en",
            EmployeeField::IqamaNumber => "iqama_number",
            EmployeeField::JobTitle => "job_title",
            EmployeeField::Nationality => "nationality",
            EmployeeField::UserCode => "user_code",
            EmployeeField::Phone => "phone",
            EmployeeField::Email => "email",
            EmployeeField::BasicSalary => "basic_salary",
            EmployeeField::HousingAllowance => "housing_allowance",
            EmployeeField::VehiclePlate => "vehicle_plate",
            EmployeeField::Iban => "iban",
        }
    }

    /// Returns true for fields holding money amounts.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            EmployeeField::BasicSalary | EmployeeField::HousingAllowance
        )
    }

    /// Returns true for fields a roster entry cannot be saved without.
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            EmployeeField::Name
                | EmployeeField::IqamaNumber
                | EmployeeField::Nationality
                | EmployeeField::BasicSalary
        )
    }
}

/// One row of roster data.
///
/// Records are built by the importer or by manual form entry. Completeness is
/// not enforced here; callers use [`EmployeeRecord::missing_required_fields`]
/// before persisting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeRecord {
    /// Employee name.
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    /// Employee name in English.
    #[serde(deserialize_with = "lenient::text")]
    pub name_en: String,
    /// National ID or iqama number.
    #[serde(deserialize_with = "lenient::text")]
    pub iqama_number: String,
    /// Job title.
    #[serde(deserialize_with = "lenient::text")]
    pub job_title: String,
    /// Nationality.
    #[serde(deserialize_with = "lenient::text")]
    pub nationality: String,
    /// Internal user or employee code.
    #[serde(deserialize_with = "lenient::text")]
    pub user_code: String,
    /// Phone number.
    #[serde(deserialize_with = "lenient::text")]
    pub phone: String,
    /// Email address.
    #[serde(deserialize_with = "lenient::text")]
    pub email: String,
    /// Monthly basic salary.
    #[serde(deserialize_with = "lenient::decimal")]
    pub basic_salary: Decimal,
    /// Monthly housing allowance.
    #[serde(deserialize_with = "lenient::decimal")]
    pub housing_allowance: Decimal,
    /// Vehicle plate number.
    #[serde(deserialize_with = "lenient::text")]
    pub vehicle_plate: String,
    /// Bank IBAN.
    #[serde(deserialize_with = "lenient::text")]
    pub iban: String,
}

impl EmployeeRecord {
    /// Sets a text field. Numeric fields are parsed permissively.
    pub fn set_field(&mut self, field: EmployeeField, raw: &str) {
        let value = raw.trim();
        match field {
            EmployeeField::Name => self.name = value.to_string(),
            EmployeeField::NameEn => self.name_en = value.to_string(),
            EmployeeField::IqamaNumber => self.iqama_number = value.to_string(),
            EmployeeField::JobTitle => self.job_title = value.to_string(),
            EmployeeField::Nationality => self.nationality = value.to_string(),
            EmployeeField::UserCode => self.user_code = value.to_string(),
            EmployeeField::Phone => self.phone = value.to_string(),
            EmployeeField::Email => self.email = value.to_string(),
            EmployeeField::BasicSalary => self.basic_salary = lenient::parse_decimal(value),
            EmployeeField::HousingAllowance => {
                self.housing_allowance = lenient::parse_decimal(value)
            }
            EmployeeField::VehiclePlate => self.vehicle_plate = value.to_string(),
            EmployeeField::Iban => self.iban = value.to_string(),
        }
    }

    /// Returns the required fields that are empty (or a non-positive salary).
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{EmployeeField, EmployeeRecord};
    ///
    /// let record = EmployeeRecord {
    ///     name: "Sara".to_string(),
    ///     ..Default::default()
    /// };
    /// assert_eq!(
    ///     record.missing_required_fields(),
    ///     vec![
    ///         EmployeeField::IqamaNumber,
    ///         EmployeeField::Nationality,
    ///         EmployeeField::BasicSalary
    ///     ]
    /// );
    /// ```
    pub fn missing_required_fields(&self) -> Vec<EmployeeField> {
        EmployeeField::ALL
            .into_iter()
            .filter(|field| field.is_required())
            .filter(|field| match field {
                EmployeeField::Name => self.name.trim().is_empty(),
                EmployeeField::IqamaNumber => self.iqama_number.trim().is_empty(),
                EmployeeField::Nationality => self.nationality.trim().is_empty(),
                EmployeeField::BasicSalary => self.basic_salary <= Decimal::ZERO,
                _ => false,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_record() -> EmployeeRecord {
        EmployeeRecord {
            name: "محمد أحمد".to_string(),
            name_en: "Mohammed Ahmed".to_string(),
            iqama_number: "2123456789".to_string(),
            job_title: "Driver".to_string(),
            nationality: "Saudi".to_string(),
            user_code: "EMP-001".to_string(),
            phone: "0500000000".to_string(),
            email: "m.ahmed@example.com".to_string(),
            basic_salary: Decimal::from(4000),
            housing_allowance: Decimal::from(1000),
            vehicle_plate: "ABC 1234".to_string(),
            iban: "SA0000000000000000000000".to_string(),
        }
    }

    #[test]
    fn test_complete_record_has_no_missing_fields() {
        assert!(complete_record().missing_required_fields().is_empty());
    }

    #[test]
    fn test_zero_salary_is_missing() {
        let mut record = complete_record();
        record.basic_salary = Decimal::ZERO;
        assert_eq!(
            record.missing_required_fields(),
            vec![EmployeeField::BasicSalary]
        );
    }

    #[test]
    fn test_whitespace_name_is_missing() {
        let mut record = complete_record();
        record.name = "   ".to_string();
        assert_eq!(record.missing_required_fields(), vec![EmployeeField::Name]);
    }

    #[test]
    fn test_set_field_trims_text_and_parses_numbers() {
        let mut record = EmployeeRecord::default();
        record.set_field(EmployeeField::Name, "  Sara Ali ");
        record.set_field(EmployeeField::BasicSalary, "3,500");
        record.set_field(EmployeeField::HousingAllowance, "not a number");

        assert_eq!(record.name, "Sara Ali");
        assert_eq!(record.basic_salary, Decimal::from(3500));
        assert_eq!(record.housing_allowance, Decimal::ZERO);
    }

    #[test]
    fn test_field_names_are_unique() {
        let mut names: Vec<&str> = EmployeeField::ALL.iter().map(|f| f.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), EmployeeField::ALL.len());
    }

    #[test]
    fn test_deserialize_partial_record_with_numeric_id() {
        let json = r#"{
            "name": "Omar",
            "iqama_number": 2456789012,
            "basic_salary": "2800"
        }"#;

        let record: EmployeeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Omar");
        assert_eq!(record.iqama_number, "2456789012");
        assert_eq!(record.basic_salary, Decimal::from(2800));
        assert_eq!(record.housing_allowance, Decimal::ZERO);
        assert!(record.email.is_empty());
    }

    #[test]
    fn test_field_serialization() {
        assert_eq!(
            serde_json::to_string(&EmployeeField::HousingAllowance).unwrap(),
            "\"housing_allowance\""
        );
        assert_eq!(
            serde_json::to_string(&EmployeeField::NameEn).unwrap(),
            "\"name_en\""
        );
    }
}
