//! Configuration loading and management for the Payroll Engine.
//!
//! This module loads the company metadata and the named compensation
//! packages employees are assigned to from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded company: {}", config.company().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CompanyMetadata, Package, PayrollConfig};
