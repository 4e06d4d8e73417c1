//! Run-level aggregation over selected rows.

use rust_decimal::Decimal;

use crate::models::{AuditWarning, PayrollRow, PayrollTotals, WorkType};

/// Sums the selected rows of a run.
///
/// Negative nets are excluded from `total_salary`. Salary packages only
/// count the internal deduction; every other package also counts the target
/// shortfall, operator, and wallet deductions.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::summarize;
/// use payroll_engine::models::{EmployeeRecord, PayrollRow, WorkType};
/// use rust_decimal::Decimal;
///
/// let mut paid = PayrollRow::new(EmployeeRecord::default());
/// paid.net_salary = Decimal::from(3000);
/// let mut owing = PayrollRow::new(EmployeeRecord::default());
/// owing.net_salary = Decimal::from(-200);
///
/// let totals = summarize(&[paid, owing], WorkType::Salary);
/// assert_eq!(totals.total_salary, Decimal::from(3000));
/// assert_eq!(totals.selected_count, 2);
/// ```
pub fn summarize(rows: &[PayrollRow], work_type: WorkType) -> PayrollTotals {
    rows.iter()
        .filter(|row| row.selected)
        .fold(PayrollTotals::default(), |mut totals, row| {
            if row.net_salary >= Decimal::ZERO {
                totals.total_salary = totals.total_salary.saturating_add(row.net_salary);
            }
            totals.total_orders += u64::from(row.successful_orders);
            let deductions = if work_type.is_salary() {
                row.internal_deduction
            } else {
                row.target_deduction.saturating_add(row.total_deductions())
            };
            totals.total_deductions = totals.total_deductions.saturating_add(deductions);
            totals.selected_count += 1;
            if row.has_debt {
                totals.employees_with_debts += 1;
            }
            totals
        })
}

/// Flags selected rows that need attention before the run is saved.
///
/// - `MISSING_ORDERS`: an order-driven package row with zero orders
/// - `NEGATIVE_NET_SALARY`: a row whose net pay is below zero
pub fn collect_warnings(rows: &[PayrollRow], work_type: WorkType) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    let missing_orders: Vec<&str> = rows
        .iter()
        .filter(|row| row.selected && !work_type.is_salary() && row.successful_orders == 0)
        .map(|row| display_name(row))
        .collect();
    if !missing_orders.is_empty() {
        warnings.push(AuditWarning {
            code: "MISSING_ORDERS".to_string(),
            message: format!(
                "{} selected employee(s) have no orders entered: {}",
                missing_orders.len(),
                missing_orders.join(", ")
            ),
            severity: "medium".to_string(),
        });
    }

    for row in rows.iter().filter(|row| row.selected && row.is_negative()) {
        warnings.push(AuditWarning {
            code: "NEGATIVE_NET_SALARY".to_string(),
            message: format!(
                "{} has a negative net salary of {}",
                display_name(row),
                row.net_salary.normalize()
            ),
            severity: "high".to_string(),
        });
    }

    warnings
}

/// Includes or excludes every row.
pub fn set_all_selected(rows: &mut [PayrollRow], selected: bool) {
    for row in rows.iter_mut() {
        row.selected = selected;
    }
}

/// Drops excluded rows, keeping the rest in order.
pub fn retain_selected(rows: &mut Vec<PayrollRow>) {
    rows.retain(|row| row.selected);
}

fn display_name(row: &PayrollRow) -> &str {
    if row.employee.name.is_empty() {
        &row.employee.iqama_number
    } else {
        &row.employee.name
    }
}
