//! Payroll totals and the payroll table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Department;
use crate::store::RecordStore;

use super::efficiency::{EfficiencyBand, efficiency_ratio};
use super::matches_query;

/// Sums over every payroll record in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Sum of final salaries.
    pub total_payroll: Decimal,
    /// Sum of hours worked.
    pub total_hours: Decimal,
    /// Sum of leave deduction hours.
    pub total_leave_deductions: Decimal,
    /// Number of payroll records.
    pub record_count: u32,
    /// `total_payroll / record_count`, or `None` when there are no records.
    pub average_salary: Option<Decimal>,
}

/// Totals the payroll collection.
///
/// # Examples
///
/// ```
/// use hr_records::config::StoreSettings;
/// use hr_records::derivation::payroll_totals;
/// use hr_records::store::RecordStore;
///
/// let totals = payroll_totals(&RecordStore::new(StoreSettings::default()));
/// assert_eq!(totals.record_count, 0);
/// assert!(totals.average_salary.is_none());
/// ```
pub fn payroll_totals(store: &RecordStore) -> PayrollTotals {
    let mut total_payroll = Decimal::ZERO;
    let mut total_hours = Decimal::ZERO;
    let mut total_leave_deductions = Decimal::ZERO;
    let mut record_count: u32 = 0;

    for aggregate in store.aggregates() {
        let payroll = &aggregate.payroll;
        total_payroll += payroll.final_salary;
        total_hours += payroll.hours_worked;
        total_leave_deductions += payroll.leave_deductions;
        record_count += 1;
    }

    let average_salary =
        (record_count > 0).then(|| total_payroll / Decimal::from(record_count));

    PayrollTotals {
        total_payroll,
        total_hours,
        total_leave_deductions,
        record_count,
        average_salary,
    }
}

/// One row of the payroll table: a payroll record joined with its employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRow {
    /// The employee's id.
    pub employee_id: u32,
    /// The employee's name.
    pub name: String,
    /// The employee's job title.
    pub position: String,
    /// The employee's department.
    pub department: Department,
    /// The employee's salary.
    pub base_salary: Decimal,
    /// Hours worked this period.
    pub hours_worked: Decimal,
    /// Leave taken this period, in hours.
    pub leave_deductions: Decimal,
    /// Salary payable after deductions.
    pub final_salary: Decimal,
    /// Hours worked as a percentage of a standard month.
    pub efficiency: Decimal,
    /// Display band for `efficiency`.
    pub efficiency_band: EfficiencyBand,
}

/// Lists payroll rows whose employee name contains `query` (case-insensitive).
pub fn payroll_rows(store: &RecordStore, query: Option<&str>) -> Vec<PayrollRow> {
    store
        .aggregates()
        .filter(|a| matches_query(query, [a.employee.name.as_str()]))
        .map(|a| {
            let efficiency = efficiency_ratio(a.payroll.hours_worked);
            PayrollRow {
                employee_id: a.employee.employee_id,
                name: a.employee.name.clone(),
                position: a.employee.position.clone(),
                department: a.employee.department,
                base_salary: a.employee.salary,
                hours_worked: a.payroll.hours_worked,
                leave_deductions: a.payroll.leave_deductions,
                final_salary: a.payroll.final_salary,
                efficiency,
                efficiency_band: EfficiencyBand::from_ratio(efficiency),
            }
        })
        .collect()
}
