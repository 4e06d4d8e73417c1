//! Bilingual column header aliases.
//!
//! Roster files arrive with Arabic, English, or two-line "Arabic\nEnglish"
//! headers in no fixed order. The [`ColumnAliasTable`] maps every recognized
//! header spelling to its [`EmployeeField`]; it is built once on first use.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use once_cell::sync::Lazy;

use crate::models::EmployeeField;

struct AliasEntry {
    field: EmployeeField,
    arabic: &'static str,
    english: &'static str,
    others: &'static [&'static str],
}

const ALIAS_ENTRIES: [AliasEntry; 12] = [
    AliasEntry {
        field: EmployeeField::Name,
        arabic: "اسم الموظف",
        english: "Employee Name",
        others: &["الاسم", "اسم الموظف بالعربي", "Name", "Full Name", "Arabic Name"],
    },
    AliasEntry {
        field: EmployeeField::NameEn,
        arabic: "الاسم بالإنجليزي",
        english: "English Name",
        others: &["الاسم بالانجليزي", "الاسم باللغة الإنجليزية", "Name EN", "Name (English)"],
    },
    AliasEntry {
        field: EmployeeField::IqamaNumber,
        arabic: "رقم الإقامة",
        english: "Iqama Number",
        others: &["رقم الاقامة", "الإقامة", "رقم الهوية", "Iqama", "Iqama No", "ID Number", "National ID"],
    },
    AliasEntry {
        field: EmployeeField::JobTitle,
        arabic: "المسمى الوظيفي",
        english: "Job Title",
        others: &["الوظيفة", "المهنة", "Position", "Title"],
    },
    AliasEntry {
        field: EmployeeField::Nationality,
        arabic: "الجنسية",
        english: "Nationality",
        others: &["Country"],
    },
    AliasEntry {
        field: EmployeeField::UserCode,
        arabic: "كود المستخدم",
        english: "User Code",
        others: &["رقم الموظف", "الرقم الوظيفي", "كود الموظف", "Employee Code", "Employee ID", "Emp Code"],
    },
    AliasEntry {
        field: EmployeeField::Phone,
        arabic: "رقم الجوال",
        english: "Phone",
        others: &["الجوال", "رقم الهاتف", "الهاتف", "Mobile", "Phone Number", "Mobile Number"],
    },
    AliasEntry {
        field: EmployeeField::Email,
        arabic: "البريد الإلكتروني",
        english: "Email",
        others: &["البريد الالكتروني", "الايميل", "E-mail", "Email Address"],
    },
    AliasEntry {
        field: EmployeeField::BasicSalary,
        arabic: "الراتب الأساسي",
        english: "Basic Salary",
        others: &["الراتب الاساسي", "الراتب", "Salary", "Base Salary"],
    },
    AliasEntry {
        field: EmployeeField::HousingAllowance,
        arabic: "بدل السكن",
        english: "Housing Allowance",
        others: &["السكن", "Housing"],
    },
    AliasEntry {
        field: EmployeeField::VehiclePlate,
        arabic: "رقم اللوحة",
        english: "Vehicle Plate",
        others: &["لوحة المركبة", "رقم لوحة السيارة", "Plate Number", "Plate"],
    },
    AliasEntry {
        field: EmployeeField::Iban,
        arabic: "الآيبان",
        english: "IBAN",
        others: &["الايبان", "رقم الآيبان", "رقم الايبان", "Bank Account", "IBAN Number"],
    },
];

/// Canonicalizes a header for lookup: trimmed, lowercased, inner
/// whitespace collapsed to single spaces.
///
/// # Examples
///
/// ```
/// use payroll_engine::import::normalize_header;
///
/// assert_eq!(normalize_header("  Basic\t  SALARY "), "basic salary");
/// ```
pub fn normalize_header(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Static mapping from employee field to its recognized header spellings.
#[derive(Debug)]
pub struct ColumnAliasTable {
    by_field: BTreeMap<EmployeeField, BTreeSet<String>>,
    by_alias: HashMap<String, EmployeeField>,
}

impl ColumnAliasTable {
    fn build() -> Self {
        let mut by_field: BTreeMap<EmployeeField, BTreeSet<String>> = BTreeMap::new();
        let mut by_alias = HashMap::new();

        for entry in &ALIAS_ENTRIES {
            let spellings = [entry.field.as_str(), entry.arabic, entry.english]
                .into_iter()
                .chain(entry.others.iter().copied());

            let set = by_field.entry(entry.field).or_default();
            for spelling in spellings {
                let key = normalize_header(spelling);
                by_alias.entry(key.clone()).or_insert(entry.field);
                set.insert(key);
            }
        }

        Self { by_field, by_alias }
    }

    /// Returns the normalized aliases of a field, sorted.
    pub fn aliases(&self, field: EmployeeField) -> impl Iterator<Item = &str> {
        self.by_field
            .get(&field)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Looks up a single header segment.
    pub fn lookup(&self, segment: &str) -> Option<EmployeeField> {
        self.by_alias.get(&normalize_header(segment)).copied()
    }

    /// Resolves a header cell to a field.
    ///
    /// Each line of a multi-line cell is tried in order, then the whole
    /// cell. `None` means the column is unmapped and should be ignored.
    pub fn resolve(&self, cell: &str) -> Option<EmployeeField> {
        cell.lines()
            .filter(|line| !line.trim().is_empty())
            .find_map(|line| self.lookup(line))
            .or_else(|| self.lookup(cell))
    }

    /// Number of distinct aliases across all fields.
    pub fn len(&self) -> usize {
        self.by_alias.len()
    }

    /// Returns true when the table holds no aliases.
    pub fn is_empty(&self) -> bool {
        self.by_alias.is_empty()
    }
}

/// The process-wide alias table.
pub static COLUMN_ALIASES: Lazy<ColumnAliasTable> = Lazy::new(ColumnAliasTable::build);

/// Resolves a header cell against [`COLUMN_ALIASES`].
///
/// # Examples
///
/// ```
/// use payroll_engine::import::resolve_header;
/// use payroll_engine::models::EmployeeField;
///
/// assert_eq!(resolve_header("Employee Name"), Some(EmployeeField::Name));
/// assert_eq!(resolve_header("اسم الموظف"), Some(EmployeeField::Name));
/// assert_eq!(resolve_header("Favourite Colour"), None);
/// ```
pub fn resolve_header(cell: &str) -> Option<EmployeeField> {
    COLUMN_ALIASES.resolve(cell)
}

/// The two-line bilingual header written for a field in exported templates.
pub fn header_label(field: EmployeeField) -> String {
    ALIAS_ENTRIES
        .iter()
        .find(|entry| entry.field == field)
        .map(|entry| format!("{}\n{}", entry.arabic, entry.english))
        .unwrap_or_else(|| field.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arabic_and_english_resolve_to_same_field() {
        assert_eq!(resolve_header("Employee Name"), resolve_header("اسم الموظف"));
        assert_eq!(resolve_header("IBAN"), resolve_header("الآيبان"));
        assert_eq!(resolve_header("Basic Salary"), Some(EmployeeField::BasicSalary));
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert_eq!(resolve_header("  employee   NAME "), Some(EmployeeField::Name));
        assert_eq!(resolve_header("HOUSING\tallowance"), Some(EmployeeField::HousingAllowance));
        assert_eq!(resolve_header(" رقم  الإقامة "), Some(EmployeeField::IqamaNumber));
    }

    #[test]
    fn test_snake_case_field_names_accepted() {
        for field in EmployeeField::ALL {
            assert_eq!(resolve_header(field.as_str()), Some(field));
        }
    }

    #[test]
    fn test_multiline_header_tries_each_segment() {
        assert_eq!(
            resolve_header("بدل غير معروف\nHousing Allowance"),
            Some(EmployeeField::HousingAllowance)
        );
        assert_eq!(
            resolve_header("الجنسية\r\nUnknown"),
            Some(EmployeeField::Nationality)
        );
    }

    #[test]
    fn test_unknown_header_is_unmapped() {
        assert_eq!(resolve_header("Notes"), None);
        assert_eq!(resolve_header(""), None);
        assert_eq!(resolve_header("\n\n"), None);
    }

    #[test]
    fn test_aliases_unique_across_fields() {
        let total: usize = EmployeeField::ALL
            .iter()
            .map(|field| COLUMN_ALIASES.aliases(*field).count())
            .sum();
        assert_eq!(total, COLUMN_ALIASES.len());
    }

    #[test]
    fn test_every_field_has_a_template_label_that_resolves() {
        for field in EmployeeField::ALL {
            let label = header_label(field);
            assert!(label.contains('\n'));
            assert_eq!(resolve_header(&label), Some(field));
            for line in label.lines() {
                assert_eq!(resolve_header(line), Some(field));
            }
        }
    }
}
