//! Request types for the HR record store API.
//!
//! Employee bodies reuse [`NewEmployee`](crate::models::NewEmployee) and
//! [`EmployeePatch`](crate::models::EmployeePatch) directly; this module
//! holds the remaining bodies and query strings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::LeaveDecision;

/// Request body for `POST /employees/:id/leave-requests/:date/decision`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRequest {
    /// The decision to apply.
    pub decision: LeaveDecision,
}

/// Query string for `GET /dashboard/summary`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryQuery {
    /// The day to report attendance for.
    pub date: Option<NaiveDate>,
}

/// Query string for `GET /dashboard/recent-leave`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecentLeaveQuery {
    /// How many entries to return; defaults to the store setting.
    pub limit: Option<usize>,
}

/// Query string for `GET /payroll`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollQuery {
    /// Case-insensitive substring of the employee name.
    pub q: Option<String>,
}
