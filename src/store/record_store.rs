//! The record store and its read interface.

use std::collections::BTreeMap;

use tracing::info;

use crate::config::{SeedData, StoreSettings};
use crate::error::{StoreError, StoreResult};
use crate::models::{AttendanceLog, Employee, EmployeeAggregate, PayrollRecord};

/// The single owner of every employee, attendance log and payroll record.
///
/// Aggregates are keyed by employee id, so iteration is always in ascending
/// id order and an employee's companion records are inserted and removed
/// in the same map operation.
///
/// # Example
///
/// ```
/// use hr_records::config::StoreSettings;
/// use hr_records::store::RecordStore;
///
/// let store = RecordStore::new(StoreSettings::default());
/// assert!(store.is_empty());
/// assert!(store.employee(1).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    pub(super) records: BTreeMap<u32, EmployeeAggregate>,
    pub(super) settings: StoreSettings,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new(settings: StoreSettings) -> Self {
        Self {
            records: BTreeMap::new(),
            settings,
        }
    }

    /// Builds a store from seed collections, taking ownership of them.
    ///
    /// Every employee and payroll record is validated, and the three
    /// collections must describe exactly the same set of employee ids.
    pub fn from_seed(seed: SeedData) -> StoreResult<Self> {
        let SeedData {
            settings,
            employees,
            attendance,
            payroll,
        } = seed;

        let mut logs: BTreeMap<u32, AttendanceLog> = BTreeMap::new();
        for log in attendance {
            let employee_id = log.employee_id;
            if logs.insert(employee_id, log.into()).is_some() {
                return Err(inconsistent(employee_id, "more than one attendance log"));
            }
        }

        let mut pay: BTreeMap<u32, PayrollRecord> = BTreeMap::new();
        for record in payroll {
            let employee_id = record.employee_id;
            let record: PayrollRecord = record.into();
            record.validate()?;
            if pay.insert(employee_id, record).is_some() {
                return Err(inconsistent(employee_id, "more than one payroll record"));
            }
        }

        let mut records = BTreeMap::new();
        for employee in employees {
            employee.validate()?;
            let employee_id = employee.employee_id;
            if records.contains_key(&employee_id) {
                return Err(inconsistent(employee_id, "duplicate employee id"));
            }
            let attendance = logs
                .remove(&employee_id)
                .ok_or_else(|| inconsistent(employee_id, "missing attendance log"))?;
            let payroll = pay
                .remove(&employee_id)
                .ok_or_else(|| inconsistent(employee_id, "missing payroll record"))?;
            records.insert(
                employee_id,
                EmployeeAggregate {
                    employee,
                    attendance,
                    payroll,
                },
            );
        }

        if let Some(&employee_id) = logs.keys().next() {
            return Err(inconsistent(employee_id, "attendance log without an employee"));
        }
        if let Some(&employee_id) = pay.keys().next() {
            return Err(inconsistent(employee_id, "payroll record without an employee"));
        }

        info!(employees = records.len(), "Record store seeded");

        Ok(Self { records, settings })
    }

    /// Returns the store settings.
    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    /// Number of employees in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when the store holds no employees.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up an employee by id.
    pub fn employee(&self, employee_id: u32) -> Option<&Employee> {
        self.records.get(&employee_id).map(|a| &a.employee)
    }

    /// Looks up an employee's attendance log by id.
    pub fn attendance(&self, employee_id: u32) -> Option<&AttendanceLog> {
        self.records.get(&employee_id).map(|a| &a.attendance)
    }

    /// Looks up an employee's payroll record by id.
    pub fn payroll(&self, employee_id: u32) -> Option<&PayrollRecord> {
        self.records.get(&employee_id).map(|a| &a.payroll)
    }

    /// Looks up an employee together with their companion records.
    pub fn aggregate(&self, employee_id: u32) -> Option<&EmployeeAggregate> {
        self.records.get(&employee_id)
    }

    /// Iterates over every aggregate in ascending id order.
    pub fn aggregates(&self) -> impl Iterator<Item = &EmployeeAggregate> {
        self.records.values()
    }

    /// Iterates over every employee in ascending id order.
    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.records.values().map(|a| &a.employee)
    }

    /// The highest id currently assigned, if any.
    pub fn max_employee_id(&self) -> Option<u32> {
        self.records.keys().next_back().copied()
    }
}

fn inconsistent(employee_id: u32, message: &str) -> StoreError {
    StoreError::SeedInconsistent {
        employee_id,
        message: message.to_string(),
    }
}
