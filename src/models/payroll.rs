//! Payroll record model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// Compensation figures for one employee in the current period.
///
/// # Example
///
/// ```
/// use hr_records::models::PayrollRecord;
/// use rust_decimal::Decimal;
///
/// let record = PayrollRecord::opening(Decimal::from(65000));
/// assert_eq!(record.hours_worked, Decimal::ZERO);
/// assert_eq!(record.final_salary, Decimal::from(65000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Hours worked this period.
    pub hours_worked: Decimal,
    /// Leave taken this period, in hours.
    pub leave_deductions: Decimal,
    /// Salary payable after deductions.
    pub final_salary: Decimal,
}

impl PayrollRecord {
    /// The record a newly hired employee starts with.
    pub fn opening(salary: Decimal) -> Self {
        Self {
            hours_worked: Decimal::ZERO,
            leave_deductions: Decimal::ZERO,
            final_salary: salary,
        }
    }

    /// Checks that every figure is within `0..=max_amount()`.
    pub fn validate(&self) -> StoreResult<()> {
        check_amount("hours_worked", self.hours_worked)?;
        check_amount("leave_deductions", self.leave_deductions)?;
        check_amount("final_salary", self.final_salary)
    }
}

/// The largest salary, hour count or payroll figure the store accepts.
///
/// Totals over every employee stay far inside `Decimal`'s range at this
/// bound, so aggregation never overflows.
pub(crate) fn max_amount() -> Decimal {
    Decimal::new(1_000_000_000_000, 0)
}

/// Rejects negative amounts and amounts above [`max_amount`].
pub(crate) fn check_amount(field: &str, value: Decimal) -> StoreResult<()> {
    if value < Decimal::ZERO {
        return Err(StoreError::invalid(field, "must not be negative"));
    }
    if value > max_amount() {
        return Err(StoreError::invalid(
            field,
            format!("must not exceed {}", max_amount()),
        ));
    }
    Ok(())
}
