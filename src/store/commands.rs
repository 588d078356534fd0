//! Mutation commands.
//!
//! Every command validates its arguments and locates its target before it
//! touches the map, so a failed command leaves the store unchanged.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::error::{StoreError, StoreResult};
use crate::models::{
    AttendanceLog, Employee, EmployeeAggregate, EmployeePatch, LeaveDecision, LeaveStatus,
    NewEmployee, PayrollRecord,
};

use super::RecordStore;

impl RecordStore {
    /// Adds an employee with a freshly assigned id.
    ///
    /// The id is one more than the highest id in the store, or 1 when the
    /// store is empty. An empty attendance log and an opening payroll record
    /// (no hours, no deductions, final salary equal to the salary) are
    /// inserted with it.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_records::config::StoreSettings;
    /// use hr_records::models::{Department, NewEmployee};
    /// use hr_records::store::RecordStore;
    /// use rust_decimal::Decimal;
    ///
    /// let mut store = RecordStore::new(StoreSettings::default());
    /// let employee = store.add_employee(NewEmployee {
    ///     name: "Thabo Molefe".to_string(),
    ///     position: "Quality Analyst".to_string(),
    ///     department: Department::Qa,
    ///     salary: Decimal::from(55000),
    ///     contact: "thabo.molefe@moderntech.com".to_string(),
    ///     employment_history: String::new(),
    /// })?;
    /// assert_eq!(employee.employee_id, 1);
    /// assert_eq!(store.payroll(1).unwrap().final_salary, Decimal::from(55000));
    /// # Ok::<(), hr_records::error::StoreError>(())
    /// ```
    pub fn add_employee(&mut self, data: NewEmployee) -> StoreResult<Employee> {
        if let Err(err) = data.validate() {
            warn!(error = %err, "Rejected new employee");
            return Err(err);
        }

        let employee_id = match self.max_employee_id() {
            Some(max) => max.checked_add(1).ok_or_else(|| {
                StoreError::invalid("employee_id", "no ids left to assign")
            })?,
            None => 1,
        };

        let payroll = PayrollRecord::opening(data.salary);
        let employee = data.into_employee(employee_id);
        self.records.insert(
            employee_id,
            EmployeeAggregate {
                employee: employee.clone(),
                attendance: AttendanceLog::default(),
                payroll,
            },
        );

        info!(
            employee_id,
            department = %employee.department,
            "Employee added"
        );
        Ok(employee)
    }

    /// Merges `patch` into an existing employee and returns the result.
    ///
    /// The id, attendance log and payroll record are never touched, even
    /// when the salary changes.
    pub fn update_employee(
        &mut self,
        employee_id: u32,
        patch: EmployeePatch,
    ) -> StoreResult<Employee> {
        if let Err(err) = patch.validate() {
            warn!(employee_id, error = %err, "Rejected employee update");
            return Err(err);
        }

        let aggregate = self
            .records
            .get_mut(&employee_id)
            .ok_or(StoreError::EmployeeNotFound { employee_id })?;
        patch.apply(&mut aggregate.employee);

        info!(employee_id, "Employee updated");
        Ok(aggregate.employee.clone())
    }

    /// Removes an employee along with their attendance log and payroll record.
    ///
    /// Returns what was removed.
    pub fn delete_employee(&mut self, employee_id: u32) -> StoreResult<EmployeeAggregate> {
        let removed = self
            .records
            .remove(&employee_id)
            .ok_or(StoreError::EmployeeNotFound { employee_id })?;

        info!(employee_id, "Employee deleted");
        Ok(removed)
    }

    /// Applies a decision to every leave request the employee filed for `date`.
    ///
    /// Returns how many requests were rewritten. A request that was already
    /// decided is overwritten, unless the store is configured with
    /// `enforce_pending_only_decisions`, in which case it is rejected with
    /// [`StoreError::InvalidState`] and nothing changes.
    pub fn decide_leave_request(
        &mut self,
        employee_id: u32,
        date: NaiveDate,
        decision: LeaveDecision,
    ) -> StoreResult<usize> {
        let enforce_pending = self.settings.enforce_pending_only_decisions;
        let aggregate = self
            .records
            .get_mut(&employee_id)
            .ok_or(StoreError::EmployeeNotFound { employee_id })?;
        let log = &mut aggregate.attendance;

        if log.leave_requests_on(date).next().is_none() {
            return Err(StoreError::LeaveRequestNotFound { employee_id, date });
        }

        if enforce_pending {
            if let Some(decided) = log.leave_requests_on(date).find(|r| !r.status.is_pending()) {
                let status = decided.status;
                warn!(
                    employee_id,
                    %date,
                    %status,
                    "Rejected decision on a leave request that is not pending"
                );
                return Err(StoreError::InvalidState {
                    employee_id,
                    date,
                    status,
                });
            }
        }

        let status = LeaveStatus::from(decision);
        let mut updated = 0;
        for request in log.leave_requests.iter_mut().filter(|r| r.date == date) {
            request.status = status;
            updated += 1;
        }

        info!(employee_id, %date, %status, updated, "Leave request decided");
        Ok(updated)
    }
}
