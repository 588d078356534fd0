//! Employee directory search.

use serde::{Deserialize, Serialize};

use crate::models::{Department, Employee};
use crate::store::RecordStore;

use super::matches_query;

/// Narrows the employee directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeFilter {
    /// Case-insensitive substring of name, position or contact.
    pub q: Option<String>,
    /// Only employees in this department.
    pub department: Option<Department>,
}

/// Lists employees matching `filter` in ascending id order.
pub fn filter_employees<'a>(store: &'a RecordStore, filter: &EmployeeFilter) -> Vec<&'a Employee> {
    store
        .employees()
        .filter(|e| filter.department.is_none_or(|d| d == e.department))
        .filter(|e| {
            matches_query(
                filter.q.as_deref(),
                [e.name.as_str(), e.position.as_str(), e.contact.as_str()],
            )
        })
        .collect()
}

/// Formats an id the way it appears on payslips and cards, e.g. `#0007`.
///
/// ```
/// use hr_records::derivation::format_employee_id;
///
/// assert_eq!(format_employee_id(7), "#0007");
/// assert_eq!(format_employee_id(12345), "#12345");
/// ```
pub fn format_employee_id(employee_id: u32) -> String {
    format!("#{employee_id:04}")
}
