//! Core data models for the HR record store.
//!
//! This module contains all the domain models used throughout the store.

mod aggregate;
mod attendance;
mod employee;
mod payroll;

pub use aggregate::EmployeeAggregate;
pub use attendance::{
    AttendanceLog, AttendanceRecord, AttendanceStatus, LeaveDecision, LeaveRequest, LeaveStatus,
};
pub use employee::{Department, Employee, EmployeePatch, NewEmployee};
pub use payroll::PayrollRecord;
