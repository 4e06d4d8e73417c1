//! Payroll Engine for employee compensation packages
//!
//! This crate normalizes employee rosters imported from spreadsheets or CSV files and
//! calculates monthly net pay under salary, target, tiered, and commission packages.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod import;
pub mod models;
