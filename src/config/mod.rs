//! Configuration and seed loading for the HR record store.
//!
//! This module loads the initial employee, attendance and payroll
//! collections, plus store settings, from a directory of YAML files.
//!
//! # Example
//!
//! ```no_run
//! use hr_records::config::SeedLoader;
//!
//! let loader = SeedLoader::load("./seed/moderntech").unwrap();
//! println!("Seeded {} employees", loader.seed().employees.len());
//! ```

mod loader;
mod types;

pub use loader::SeedLoader;
pub use types::{
    AttendanceFile, DEFAULT_RECENT_LEAVE_LIMIT, EmployeesFile, PayrollFile, SeedAttendanceLog,
    SeedData, SeedPayrollRecord, StoreSettings,
};
