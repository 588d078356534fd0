//! The per-employee aggregate the store is keyed on.

use serde::{Deserialize, Serialize};

use super::{AttendanceLog, Employee, PayrollRecord};

/// An employee together with the records that live and die with them.
///
/// The store only ever inserts or removes whole aggregates, so an employee
/// can never exist without its attendance log and payroll record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeAggregate {
    /// The employee record.
    pub employee: Employee,
    /// Attendance and leave for this employee.
    pub attendance: AttendanceLog,
    /// Payroll for this employee.
    pub payroll: PayrollRecord,
}

impl EmployeeAggregate {
    /// Returns the id shared by all three parts.
    pub fn employee_id(&self) -> u32 {
        self.employee.employee_id
    }
}
