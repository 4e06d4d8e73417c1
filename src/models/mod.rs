//! Core data models for the Payroll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod achieved_tier;
mod calculation_result;
mod employee;
mod lenient;
mod payroll_month;
mod payroll_row;
mod plan;

pub use achieved_tier::{AchievedTier, FixedTierBand};
pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, PayrollRunResult, PayrollTotals};
pub use employee::{EmployeeField, EmployeeRecord};
pub use lenient::{parse_decimal, parse_orders};
pub use payroll_month::PayrollMonth;
pub use payroll_row::{DEFAULT_PAYMENT_METHOD, DebtRecord, PayrollRow, RowEdit};
pub use plan::{CompensationPlan, Slab, Tier, WorkType};
