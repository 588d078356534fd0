//! Attendance and leave models.
//!
//! Each employee owns one [`AttendanceLog`] holding their daily
//! [`AttendanceRecord`]s and their [`LeaveRequest`]s.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether an employee was at work on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    /// The employee was present.
    Present,
    /// The employee was absent.
    Absent,
}

/// A single day's attendance entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The calendar date of the entry.
    pub date: NaiveDate,
    /// Present or absent.
    pub status: AttendanceStatus,
}

/// The lifecycle state of a leave request.
///
/// New requests start as `Pending`. `Approved` and `Denied` are terminal
/// for users, though the store only enforces that when configured to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveStatus {
    /// Awaiting a decision.
    Pending,
    /// Granted.
    Approved,
    /// Refused.
    Denied,
}

impl LeaveStatus {
    /// Returns true while the request still awaits a decision.
    pub fn is_pending(self) -> bool {
        self == LeaveStatus::Pending
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Denied => "Denied",
        };
        f.write_str(label)
    }
}

/// The outcome a reviewer can apply to a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveDecision {
    /// Grant the request.
    Approved,
    /// Refuse the request.
    Denied,
}

impl From<LeaveDecision> for LeaveStatus {
    fn from(decision: LeaveDecision) -> Self {
        match decision {
            LeaveDecision::Approved => LeaveStatus::Approved,
            LeaveDecision::Denied => LeaveStatus::Denied,
        }
    }
}

/// A request for time off on a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// The requested leave date.
    pub date: NaiveDate,
    /// Why the employee asked for leave.
    pub reason: String,
    /// Current lifecycle state.
    #[serde(default = "default_leave_status")]
    pub status: LeaveStatus,
}

fn default_leave_status() -> LeaveStatus {
    LeaveStatus::Pending
}

/// Everything recorded about one employee's presence and leave.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceLog {
    /// Daily attendance in the order it was recorded.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    /// Leave requests in the order they were submitted.
    #[serde(default)]
    pub leave_requests: Vec<LeaveRequest>,
}

impl AttendanceLog {
    /// Returns the attendance entry for `date`, if one was recorded.
    pub fn record_on(&self, date: NaiveDate) -> Option<&AttendanceRecord> {
        self.attendance.iter().find(|r| r.date == date)
    }

    /// Iterates over the leave requests filed for `date`.
    pub fn leave_requests_on(&self, date: NaiveDate) -> impl Iterator<Item = &LeaveRequest> {
        self.leave_requests.iter().filter(move |r| r.date == date)
    }
}
