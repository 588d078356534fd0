//! In-memory HR record store.
//!
//! This crate owns the employees, attendance logs, leave requests and
//! payroll records behind an employee/attendance/payroll dashboard, and
//! computes the aggregates those dashboards display: attendance by date,
//! department headcounts, the recent leave feed, payslips and payroll totals.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod derivation;
pub mod error;
pub mod models;
pub mod store;

#[cfg(test)]
mod test_support;
