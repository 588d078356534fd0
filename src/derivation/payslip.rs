//! Payslip breakdown.
//!
//! A payslip splits the gap between an employee's gross salary and their
//! final salary into an estimated income tax, an unemployment insurance
//! (UIF) contribution, and whatever is left over, which is attributed to
//! leave. The tax and UIF figures are flat-rate estimates for display only.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Employee, PayrollRecord};
use crate::store::RecordStore;

use super::rounding::round_whole;

/// The flat income tax estimate rate (18%).
pub fn tax_estimate_rate() -> Decimal {
    Decimal::new(18, 2)
}

/// The UIF contribution rate (1%).
pub fn uif_rate() -> Decimal {
    Decimal::new(1, 2)
}

/// A read-only breakdown of one employee's pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// The employee this payslip is for.
    pub employee_id: u32,
    /// Gross salary, equal to the employee's salary.
    pub gross_salary: Decimal,
    /// `round(gross * 0.18)`.
    pub tax_estimate: Decimal,
    /// `round(gross * 0.01)`.
    pub uif: Decimal,
    /// `gross - final_salary`.
    pub total_deductions: Decimal,
    /// `total_deductions - tax_estimate - uif`. May be negative; see
    /// [`Payslip::displayed_other_deductions`].
    pub other_deductions: Decimal,
    /// Hours worked this period.
    pub hours_worked: Decimal,
    /// Leave taken this period, in hours.
    pub leave_deduction_hours: Decimal,
    /// Net pay, equal to the payroll record's final salary.
    pub net_salary: Decimal,
}

impl Payslip {
    /// The leave deduction amount as shown to users, never below zero.
    ///
    /// The stored `other_deductions` goes negative whenever the final salary
    /// is higher than `gross - tax - uif`; that figure is kept as is and
    /// only clamped here.
    pub fn displayed_other_deductions(&self) -> Decimal {
        self.other_deductions.max(Decimal::ZERO)
    }
}

/// Builds the payslip for an employee and their payroll record.
///
/// # Examples
///
/// ```
/// use hr_records::derivation::payslip;
/// use hr_records::models::{Department, Employee, PayrollRecord};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     employee_id: 1,
///     name: "Sibongile Nkosi".to_string(),
///     position: "Software Engineer".to_string(),
///     department: Department::Development,
///     salary: Decimal::from(10000),
///     contact: "sibongile.nkosi@moderntech.com".to_string(),
///     employment_history: String::new(),
/// };
/// let payroll = PayrollRecord {
///     hours_worked: Decimal::from(160),
///     leave_deductions: Decimal::from(8),
///     final_salary: Decimal::from(9500),
/// };
///
/// let slip = payslip(&employee, &payroll);
/// assert_eq!(slip.tax_estimate, Decimal::from(1800));
/// assert_eq!(slip.other_deductions, Decimal::from(-1400));
/// assert_eq!(slip.displayed_other_deductions(), Decimal::ZERO);
/// ```
pub fn payslip(employee: &Employee, payroll: &PayrollRecord) -> Payslip {
    let gross_salary = employee.salary;
    let tax_estimate = round_whole(gross_salary * tax_estimate_rate());
    let uif = round_whole(gross_salary * uif_rate());
    let total_deductions = gross_salary - payroll.final_salary;
    let other_deductions = total_deductions - tax_estimate - uif;

    Payslip {
        employee_id: employee.employee_id,
        gross_salary,
        tax_estimate,
        uif,
        total_deductions,
        other_deductions,
        hours_worked: payroll.hours_worked,
        leave_deduction_hours: payroll.leave_deductions,
        net_salary: payroll.final_salary,
    }
}

/// Builds the payslip for the employee with the given id, if present.
pub fn payslip_for(store: &RecordStore, employee_id: u32) -> Option<Payslip> {
    store
        .aggregate(employee_id)
        .map(|a| payslip(&a.employee, &a.payroll))
}
