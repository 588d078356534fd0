//! Leave request views.
//!
//! This module flattens every employee's leave requests into a single list
//! for the dashboard's recent activity feed and the attendance page's leave
//! table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{EmployeeAggregate, LeaveStatus};
use crate::store::RecordStore;

use super::matches_query;

/// A leave request together with the employee who filed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveFeedEntry {
    /// The employee's id.
    pub employee_id: u32,
    /// The employee's name.
    pub name: String,
    /// The requested leave date.
    pub date: NaiveDate,
    /// Why leave was requested.
    pub reason: String,
    /// Current lifecycle state.
    pub status: LeaveStatus,
}

fn entries(aggregate: &EmployeeAggregate) -> impl Iterator<Item = LeaveFeedEntry> + '_ {
    aggregate
        .attendance
        .leave_requests
        .iter()
        .map(|request| LeaveFeedEntry {
            employee_id: aggregate.employee.employee_id,
            name: aggregate.employee.name.clone(),
            date: request.date,
            reason: request.reason.clone(),
            status: request.status,
        })
}

/// Returns the `limit` most recent leave requests, newest first.
///
/// Requests on the same date keep their store order (ascending employee
/// id, then filing order).
pub fn recent_leave_requests(store: &RecordStore, limit: usize) -> Vec<LeaveFeedEntry> {
    let mut feed: Vec<LeaveFeedEntry> = store.aggregates().flat_map(entries).collect();
    feed.sort_by(|a, b| b.date.cmp(&a.date));
    feed.truncate(limit);
    feed
}

/// Counts leave requests still awaiting a decision.
pub fn pending_leave_count(store: &RecordStore) -> u32 {
    store
        .aggregates()
        .flat_map(|a| &a.attendance.leave_requests)
        .filter(|r| r.status.is_pending())
        .count() as u32
}

/// Narrows the leave request list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaveFilter {
    /// Case-insensitive substring of the employee name.
    pub q: Option<String>,
    /// Only requests with this status.
    pub status: Option<LeaveStatus>,
}

/// Lists every leave request matching `filter`, grouped by employee.
pub fn filter_leave_requests(store: &RecordStore, filter: &LeaveFilter) -> Vec<LeaveFeedEntry> {
    store
        .aggregates()
        .filter(|a| matches_query(filter.q.as_deref(), [a.employee.name.as_str()]))
        .flat_map(entries)
        .filter(|entry| filter.status.is_none_or(|s| s == entry.status))
        .collect()
}
