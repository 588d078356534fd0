//! Read-only derivations over the record store.
//!
//! This module contains every computation the dashboard surfaces render:
//! attendance by date, department headcounts, the recent leave feed,
//! efficiency banding, payslip breakdowns, payroll totals, directory search
//! and the dashboard headline figures. None of them mutate the store.

mod attendance_summary;
mod dashboard;
mod department_headcount;
mod efficiency;
mod employee_filter;
mod leave_feed;
mod payroll_totals;
mod payslip;
mod rounding;

pub use attendance_summary::{
    AttendanceEntry, AttendanceFilter, AttendanceTotals, DailyAttendance, attendance_by_date,
    attendance_totals, filter_attendance_records, latest_attendance_date, present_on,
};
pub use dashboard::{DashboardSummary, dashboard_summary};
pub use department_headcount::{DepartmentHeadcount, department_headcount};
pub use efficiency::{EfficiencyBand, STANDARD_MONTHLY_HOURS, efficiency_ratio};
pub use employee_filter::{EmployeeFilter, filter_employees, format_employee_id};
pub use leave_feed::{
    LeaveFeedEntry, LeaveFilter, filter_leave_requests, pending_leave_count, recent_leave_requests,
};
pub use payroll_totals::{PayrollRow, PayrollTotals, payroll_rows, payroll_totals};
pub use payslip::{Payslip, payslip, payslip_for, tax_estimate_rate, uif_rate};

/// Case-insensitive substring search over `fields`. A missing or blank
/// query matches everything.
fn matches_query<'a>(query: Option<&str>, fields: impl IntoIterator<Item = &'a str>) -> bool {
    let needle = match query.map(str::trim) {
        Some(q) if !q.is_empty() => q.to_lowercase(),
        _ => return true,
    };
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}
