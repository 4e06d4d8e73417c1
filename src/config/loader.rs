//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading company and
//! package configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{CompanyMetadata, Package, PayrollConfig};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── company.yaml        # Company metadata
/// └── packages/
///     └── *.yaml          # One compensation package per file
/// ```
///
/// # Example
///
/// ```
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// let package = loader.get_package("riders_target")?;
/// println!("{} uses {:?}", package.group_name, package.plan.work_type);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `company.yaml` or the `packages` directory is missing
    /// - the `packages` directory holds no YAML files
    /// - any file contains invalid YAML
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let company = Self::load_yaml::<CompanyMetadata>(&path.join("company.yaml"))?;
        let packages = Self::load_packages(&path.join("packages"))?;

        debug!(
            path = %path.display(),
            company = %company.code,
            packages = packages.len(),
            "Loaded payroll configuration"
        );

        Ok(Self {
            config: PayrollConfig::new(company, packages),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every package file, in file name order.
    fn load_packages(packages_dir: &Path) -> EngineResult<Vec<Package>> {
        let dir_str = packages_dir.display().to_string();

        let entries = fs::read_dir(packages_dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;
            let path = entry.path();
            if path
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
            {
                paths.push(path);
            }
        }
        paths.sort();

        if paths.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no package files found)", dir_str),
            });
        }

        paths.iter().map(|path| Self::load_yaml(path)).collect()
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the company metadata.
    pub fn company(&self) -> &CompanyMetadata {
        self.config.company()
    }

    /// Iterates over all packages in id order.
    pub fn packages(&self) -> impl Iterator<Item = &Package> {
        self.config.packages().values()
    }

    /// Gets a package by its id.
    ///
    /// # Returns
    ///
    /// Returns the package if found, or `PackageNotFound` error.
    pub fn get_package(&self, id: &str) -> EngineResult<&Package> {
        self.config
            .packages()
            .get(id)
            .ok_or_else(|| EngineError::PackageNotFound { id: id.to_string() })
    }
}
