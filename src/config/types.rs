//! Configuration and seed types.
//!
//! This module contains the strongly-typed structures that are deserialized
//! from the YAML files of a seed directory.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceLog, AttendanceRecord, Employee, LeaveRequest, PayrollRecord};

/// The default number of entries in the recent leave feed.
pub const DEFAULT_RECENT_LEAVE_LIMIT: usize = 5;

/// Store behaviour switches, read from `settings.yaml`.
///
/// Every field has a default, so the file may be partial or absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Reject leave decisions on requests that are no longer `Pending`.
    pub enforce_pending_only_decisions: bool,
    /// How many entries the recent leave feed returns.
    pub recent_leave_limit: usize,
    /// The day the dashboard reports attendance for. When unset, the most
    /// recent date with any attendance is used.
    pub dashboard_date: Option<NaiveDate>,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            enforce_pending_only_decisions: false,
            recent_leave_limit: DEFAULT_RECENT_LEAVE_LIMIT,
            dashboard_date: None,
        }
    }
}

/// `employees.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeesFile {
    /// The initial employees.
    pub employees: Vec<Employee>,
}

/// One employee's attendance log as it appears in `attendance.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedAttendanceLog {
    /// The employee this log belongs to.
    pub employee_id: u32,
    /// Daily attendance entries.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    /// Leave requests.
    #[serde(default)]
    pub leave_requests: Vec<LeaveRequest>,
}

impl From<SeedAttendanceLog> for AttendanceLog {
    fn from(seed: SeedAttendanceLog) -> Self {
        AttendanceLog {
            attendance: seed.attendance,
            leave_requests: seed.leave_requests,
        }
    }
}

/// `attendance.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceFile {
    /// The initial attendance logs.
    pub attendance: Vec<SeedAttendanceLog>,
}

/// One employee's payroll record as it appears in `payroll.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPayrollRecord {
    /// The employee this record belongs to.
    pub employee_id: u32,
    /// Hours worked this period.
    pub hours_worked: Decimal,
    /// Leave taken this period, in hours.
    pub leave_deductions: Decimal,
    /// Salary payable after deductions.
    pub final_salary: Decimal,
}

impl From<SeedPayrollRecord> for PayrollRecord {
    fn from(seed: SeedPayrollRecord) -> Self {
        PayrollRecord {
            hours_worked: seed.hours_worked,
            leave_deductions: seed.leave_deductions,
            final_salary: seed.final_salary,
        }
    }
}

/// `payroll.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollFile {
    /// The initial payroll records.
    pub payroll: Vec<SeedPayrollRecord>,
}

/// Everything needed to build a store at process start.
///
/// The three collections are kept parallel here, exactly as supplied;
/// [`RecordStore::from_seed`](crate::store::RecordStore::from_seed) checks
/// that they agree before folding them into aggregates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedData {
    /// Store settings.
    pub settings: StoreSettings,
    /// Initial employees.
    pub employees: Vec<Employee>,
    /// Initial attendance logs, one per employee.
    pub attendance: Vec<SeedAttendanceLog>,
    /// Initial payroll records, one per employee.
    pub payroll: Vec<SeedPayrollRecord>,
}
