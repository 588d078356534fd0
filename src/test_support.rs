//! Builders shared by unit tests.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::{SeedAttendanceLog, SeedData, SeedPayrollRecord, StoreSettings};
use crate::models::{
    AttendanceLog, AttendanceRecord, AttendanceStatus, Department, Employee, EmployeeAggregate,
    LeaveRequest, LeaveStatus, PayrollRecord,
};
use crate::store::RecordStore;

pub(crate) fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, day).unwrap()
}

pub(crate) fn employee(employee_id: u32, name: &str, department: Department, salary: i64) -> Employee {
    Employee {
        employee_id,
        name: name.to_string(),
        position: "Analyst".to_string(),
        department,
        salary: Decimal::from(salary),
        contact: format!("employee{employee_id}@moderntech.com"),
        employment_history: String::new(),
    }
}

pub(crate) fn aggregate(employee: Employee) -> EmployeeAggregate {
    let payroll = PayrollRecord::opening(employee.salary);
    EmployeeAggregate {
        employee,
        attendance: AttendanceLog::default(),
        payroll,
    }
}

pub(crate) fn with_attendance(
    mut aggregate: EmployeeAggregate,
    records: &[(u32, AttendanceStatus)],
) -> EmployeeAggregate {
    aggregate
        .attendance
        .attendance
        .extend(records.iter().map(|&(day, status)| AttendanceRecord { date: date(day), status }));
    aggregate
}

pub(crate) fn with_leave(
    mut aggregate: EmployeeAggregate,
    requests: &[(u32, &str, LeaveStatus)],
) -> EmployeeAggregate {
    aggregate
        .attendance
        .leave_requests
        .extend(requests.iter().map(|&(day, reason, status)| LeaveRequest {
            date: date(day),
            reason: reason.to_string(),
            status,
        }));
    aggregate
}

pub(crate) fn store_from(aggregates: Vec<EmployeeAggregate>) -> RecordStore {
    let mut seed = SeedData {
        settings: StoreSettings::default(),
        ..Default::default()
    };
    for a in aggregates {
        let employee_id = a.employee.employee_id;
        seed.attendance.push(SeedAttendanceLog {
            employee_id,
            attendance: a.attendance.attendance,
            leave_requests: a.attendance.leave_requests,
        });
        seed.payroll.push(SeedPayrollRecord {
            employee_id,
            hours_worked: a.payroll.hours_worked,
            leave_deductions: a.payroll.leave_deductions,
            final_salary: a.payroll.final_salary,
        });
        seed.employees.push(a.employee);
    }
    RecordStore::from_seed(seed).unwrap()
}
