//! Attendance aggregation.
//!
//! This module groups attendance records across all employees: per-date
//! present/absent counts for the dashboard chart, overall totals, and the
//! flattened, filterable record list shown on the attendance page.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::AttendanceStatus;
use crate::store::RecordStore;

use super::matches_query;

/// Present and absent counts for one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAttendance {
    /// The calendar date.
    pub date: NaiveDate,
    /// Employees recorded present.
    pub present: u32,
    /// Employees recorded absent.
    pub absent: u32,
}

/// Present and absent counts over every record in the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceTotals {
    /// Total present records.
    pub present: u32,
    /// Total absent records.
    pub absent: u32,
}

/// Groups every attendance record by date.
///
/// The result is in ascending date order and only contains dates that have
/// at least one record.
///
/// # Examples
///
/// ```
/// use hr_records::config::StoreSettings;
/// use hr_records::derivation::attendance_by_date;
/// use hr_records::store::RecordStore;
///
/// let store = RecordStore::new(StoreSettings::default());
/// assert!(attendance_by_date(&store).is_empty());
/// ```
pub fn attendance_by_date(store: &RecordStore) -> Vec<DailyAttendance> {
    let mut buckets: BTreeMap<NaiveDate, DailyAttendance> = BTreeMap::new();

    for record in store.aggregates().flat_map(|a| &a.attendance.attendance) {
        let bucket = buckets.entry(record.date).or_insert(DailyAttendance {
            date: record.date,
            present: 0,
            absent: 0,
        });
        match record.status {
            AttendanceStatus::Present => bucket.present += 1,
            AttendanceStatus::Absent => bucket.absent += 1,
        }
    }

    buckets.into_values().collect()
}

/// Counts present and absent records across the whole store.
pub fn attendance_totals(store: &RecordStore) -> AttendanceTotals {
    store
        .aggregates()
        .flat_map(|a| &a.attendance.attendance)
        .fold(AttendanceTotals::default(), |mut totals, record| {
            match record.status {
                AttendanceStatus::Present => totals.present += 1,
                AttendanceStatus::Absent => totals.absent += 1,
            }
            totals
        })
}

/// Counts employees recorded present on `date`.
pub fn present_on(store: &RecordStore, date: NaiveDate) -> u32 {
    store
        .aggregates()
        .filter(|a| {
            a.attendance
                .record_on(date)
                .is_some_and(|r| r.status == AttendanceStatus::Present)
        })
        .count() as u32
}

/// The most recent date any attendance was recorded for.
pub fn latest_attendance_date(store: &RecordStore) -> Option<NaiveDate> {
    store
        .aggregates()
        .flat_map(|a| &a.attendance.attendance)
        .map(|r| r.date)
        .max()
}

/// One attendance record, flattened with the employee it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// The employee's id.
    pub employee_id: u32,
    /// The employee's name.
    pub name: String,
    /// The calendar date.
    pub date: NaiveDate,
    /// Present or absent.
    pub status: AttendanceStatus,
}

/// Narrows the attendance record list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendanceFilter {
    /// Case-insensitive substring of the employee name.
    pub q: Option<String>,
    /// Only records with this status.
    pub status: Option<AttendanceStatus>,
}

/// Lists every attendance record matching `filter`, grouped by employee.
pub fn filter_attendance_records(
    store: &RecordStore,
    filter: &AttendanceFilter,
) -> Vec<AttendanceEntry> {
    store
        .aggregates()
        .filter(|a| matches_query(filter.q.as_deref(), [a.employee.name.as_str()]))
        .flat_map(|a| {
            a.attendance.attendance.iter().map(move |r| AttendanceEntry {
                employee_id: a.employee.employee_id,
                name: a.employee.name.clone(),
                date: r.date,
                status: r.status,
            })
        })
        .filter(|entry| filter.status.is_none_or(|s| s == entry.status))
        .collect()
}
