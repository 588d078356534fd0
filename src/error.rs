//! Error types for the HR record store.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure a command, lookup or seed load can report.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::LeaveStatus;

/// The main error type for the record store.
///
/// # Example
///
/// ```
/// use hr_records::error::StoreError;
///
/// let error = StoreError::EmployeeNotFound { employee_id: 42 };
/// assert_eq!(error.to_string(), "Employee not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum StoreError {
    /// No employee with the given id exists in the store.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The id that was not found.
        employee_id: u32,
    },

    /// The employee exists but has no leave request on the given date.
    #[error("Leave request not found for employee {employee_id} on {date}")]
    LeaveRequestNotFound {
        /// The employee whose leave requests were searched.
        employee_id: u32,
        /// The requested leave date.
        date: NaiveDate,
    },

    /// A command argument was outside the accepted domain.
    #[error("Invalid field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A leave decision was applied to a request that is no longer pending.
    #[error("Leave request for employee {employee_id} on {date} is already {status}")]
    InvalidState {
        /// The employee owning the request.
        employee_id: u32,
        /// The leave date.
        date: NaiveDate,
        /// The status the request already had.
        status: LeaveStatus,
    },

    /// A seed data file was not found at the specified path.
    #[error("Seed file not found: {path}")]
    SeedNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A seed data file could not be parsed.
    #[error("Failed to parse seed file '{path}': {message}")]
    SeedParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Seed collections disagree about which employees exist.
    #[error("Inconsistent seed data for employee {employee_id}: {message}")]
    SeedInconsistent {
        /// The employee id the inconsistency was found on.
        employee_id: u32,
        /// A description of the inconsistency.
        message: String,
    },
}

impl StoreError {
    /// Shorthand for building an [`StoreError::InvalidInput`].
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns true for the NotFound class of errors.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::EmployeeNotFound { .. } | Self::LeaveRequestNotFound { .. }
        )
    }
}

/// A type alias for Results that return StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
