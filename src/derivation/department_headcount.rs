//! Department headcount aggregation.

use serde::{Deserialize, Serialize};

use crate::models::Department;
use crate::store::RecordStore;

/// How many current employees belong to a department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentHeadcount {
    /// The department.
    pub department: Department,
    /// Number of employees in it.
    pub count: u32,
}

/// Counts employees per department.
///
/// Departments appear in the order their first employee appears (ascending
/// employee id). Departments without employees are left out.
pub fn department_headcount(store: &RecordStore) -> Vec<DepartmentHeadcount> {
    let mut counts: Vec<DepartmentHeadcount> = Vec::new();

    for employee in store.employees() {
        match counts.iter_mut().find(|c| c.department == employee.department) {
            Some(existing) => existing.count += 1,
            None => counts.push(DepartmentHeadcount {
                department: employee.department,
                count: 1,
            }),
        }
    }

    counts
}
