//! Seed loading functionality.
//!
//! This module provides the [`SeedLoader`] type for loading the initial
//! collections and store settings from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::store::RecordStore;

use super::types::{AttendanceFile, EmployeesFile, PayrollFile, SeedData, StoreSettings};

/// Loads seed data from a directory.
///
/// # Directory Structure
///
/// ```text
/// seed/moderntech/
/// ├── settings.yaml    # Store settings (optional)
/// ├── employees.yaml   # Employee records
/// ├── attendance.yaml  # Attendance logs and leave requests
/// └── payroll.yaml     # Payroll records
/// ```
///
/// # Example
///
/// ```no_run
/// use hr_records::config::SeedLoader;
///
/// let store = SeedLoader::load("./seed/moderntech")?.into_store()?;
/// println!("Loaded {} employees", store.len());
/// # Ok::<(), hr_records::error::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SeedLoader {
    seed: SeedData,
}

impl SeedLoader {
    /// Loads seed data from the specified directory.
    ///
    /// Returns an error if a required file is missing or any file contains
    /// invalid YAML. Consistency between the collections is checked later,
    /// when the store is built.
    pub fn load<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path = path.as_ref();

        let settings_path = path.join("settings.yaml");
        let settings = if settings_path.exists() {
            Self::load_yaml::<StoreSettings>(&settings_path)?
        } else {
            StoreSettings::default()
        };

        let employees = Self::load_yaml::<EmployeesFile>(&path.join("employees.yaml"))?;
        let attendance = Self::load_yaml::<AttendanceFile>(&path.join("attendance.yaml"))?;
        let payroll = Self::load_yaml::<PayrollFile>(&path.join("payroll.yaml"))?;

        debug!(
            path = %path.display(),
            employees = employees.employees.len(),
            attendance_logs = attendance.attendance.len(),
            payroll_records = payroll.payroll.len(),
            "Loaded seed files"
        );

        Ok(Self {
            seed: SeedData {
                settings,
                employees: employees.employees,
                attendance: attendance.attendance,
                payroll: payroll.payroll,
            },
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> StoreResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| StoreError::SeedNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| StoreError::SeedParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded seed data.
    pub fn seed(&self) -> &SeedData {
        &self.seed
    }

    /// Returns the loaded settings.
    pub fn settings(&self) -> &StoreSettings {
        &self.seed.settings
    }

    /// Consumes the loader, returning the raw seed data.
    pub fn into_seed(self) -> SeedData {
        self.seed
    }

    /// Builds a store from the loaded data.
    pub fn into_store(self) -> StoreResult<RecordStore> {
        RecordStore::from_seed(self.seed)
    }
}
