//! Dashboard headline figures.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::store::RecordStore;

use super::attendance_summary::{latest_attendance_date, present_on};
use super::leave_feed::pending_leave_count;
use super::payroll_totals::payroll_totals;
use super::rounding::round_whole;

/// The stat cards at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// The day attendance is reported for, if any could be chosen.
    pub date: Option<NaiveDate>,
    /// Number of employees.
    pub total_employees: u32,
    /// Employees recorded present on `date`.
    pub present_on_date: u32,
    /// `round(present_on_date / total_employees * 100)`, or `None` when
    /// there are no employees or no date.
    pub attendance_rate: Option<Decimal>,
    /// Leave requests awaiting a decision.
    pub pending_leaves: u32,
    /// Sum of final salaries.
    pub total_payroll: Decimal,
}

/// Computes the dashboard summary.
///
/// The reporting date is `date` when given, otherwise the store's
/// configured `dashboard_date`, otherwise the latest date with attendance.
pub fn dashboard_summary(store: &RecordStore, date: Option<NaiveDate>) -> DashboardSummary {
    let date = date
        .or(store.settings().dashboard_date)
        .or_else(|| latest_attendance_date(store));
    let total_employees = store.len() as u32;
    let present_on_date = date.map_or(0, |d| present_on(store, d));

    let attendance_rate = match date {
        Some(_) if total_employees > 0 => Some(round_whole(
            Decimal::from(present_on_date) * Decimal::ONE_HUNDRED / Decimal::from(total_employees),
        )),
        _ => None,
    };

    DashboardSummary {
        date,
        total_employees,
        present_on_date,
        attendance_rate,
        pending_leaves: pending_leave_count(store),
        total_payroll: payroll_totals(store).total_payroll,
    }
}
