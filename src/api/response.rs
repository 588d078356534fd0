//! Response types for the HR record store API.
//!
//! This module defines the error response structures, the mapping from
//! [`StoreError`] to HTTP statuses, and the view types that decorate
//! derivation results for display.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::derivation::{EfficiencyBand, Payslip, efficiency_ratio, format_employee_id};
use crate::error::StoreError;
use crate::models::{Department, Employee, LeaveStatus};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<StoreError> for ApiErrorResponse {
    fn from(error: StoreError) -> Self {
        let message = error.to_string();
        match error {
            StoreError::EmployeeNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("EMPLOYEE_NOT_FOUND", message),
            },
            StoreError::LeaveRequestNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("LEAVE_REQUEST_NOT_FOUND", message),
            },
            StoreError::InvalidInput { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    message,
                    format!("The field '{}' was rejected", field),
                ),
            },
            StoreError::InvalidState { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "INVALID_STATE",
                    message,
                    "Only pending leave requests can be decided",
                ),
            },
            StoreError::SeedNotFound { .. }
            | StoreError::SeedParseError { .. }
            | StoreError::SeedInconsistent { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("SEED_ERROR", "Seed data error", message),
            },
        }
    }
}

/// Response body after a leave decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionResponse {
    /// The employee owning the requests.
    pub employee_id: u32,
    /// The leave date.
    pub date: NaiveDate,
    /// The status now recorded.
    pub status: LeaveStatus,
    /// How many requests were rewritten.
    pub updated: usize,
}

/// A payslip decorated with the employee details printed on it.
#[derive(Debug, Clone, Serialize)]
pub struct PayslipView {
    /// The employee id as printed, e.g. `#0001`.
    pub employee_number: String,
    /// The employee's name.
    pub name: String,
    /// The employee's job title.
    pub position: String,
    /// The employee's department.
    pub department: Department,
    /// The underlying breakdown.
    #[serde(flatten)]
    pub payslip: Payslip,
    /// Leave deductions as shown, never below zero.
    pub displayed_other_deductions: Decimal,
    /// Hours worked as a percentage of a standard month.
    pub efficiency: Decimal,
    /// Display band for `efficiency`.
    pub efficiency_band: EfficiencyBand,
}

impl PayslipView {
    /// Decorates `payslip` with `employee`'s details.
    pub fn new(employee: &Employee, payslip: Payslip) -> Self {
        let efficiency = efficiency_ratio(payslip.hours_worked);
        Self {
            employee_number: format_employee_id(employee.employee_id),
            name: employee.name.clone(),
            position: employee.position.clone(),
            department: employee.department,
            displayed_other_deductions: payslip.displayed_other_deductions(),
            efficiency,
            efficiency_band: EfficiencyBand::from_ratio(efficiency),
            payslip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response: ApiErrorResponse = StoreError::EmployeeNotFound { employee_id: 9 }.into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.code, "EMPLOYEE_NOT_FOUND");
        assert_eq!(response.error.message, "Employee not found: 9");
    }

    #[test]
    fn test_invalid_input_maps_to_400() {
        let response: ApiErrorResponse = StoreError::invalid("salary", "must not be negative").into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "VALIDATION_ERROR");
        assert!(response.error.details.unwrap().contains("salary"));
    }

    #[test]
    fn test_invalid_state_maps_to_409() {
        let response: ApiErrorResponse = StoreError::InvalidState {
            employee_id: 1,
            date: NaiveDate::from_ymd_opt(2025, 7, 22).unwrap(),
            status: LeaveStatus::Denied,
        }
        .into();
        assert_eq!(response.status, StatusCode::CONFLICT);
        assert_eq!(response.error.code, "INVALID_STATE");
    }

    #[test]
    fn test_seed_errors_map_to_500() {
        let response: ApiErrorResponse = StoreError::SeedNotFound {
            path: "seed/employees.yaml".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "SEED_ERROR");
    }
}
