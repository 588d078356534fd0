//! HTTP request handlers for the HR record store API.
//!
//! Every handler takes the store lock once, runs one command or a set of
//! derivations against it, and releases it before the response is sent.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::derivation::{
    AttendanceFilter, EmployeeFilter, LeaveFilter, attendance_by_date, dashboard_summary,
    department_headcount, filter_attendance_records, filter_employees, filter_leave_requests,
    payroll_rows, payroll_totals, payslip, recent_leave_requests,
};
use crate::error::StoreError;
use crate::models::{EmployeePatch, LeaveStatus, NewEmployee};

use super::request::{DecisionRequest, PayrollQuery, RecentLeaveQuery, SummaryQuery};
use super::response::{ApiError, ApiErrorResponse, DecisionResponse, PayslipView};
use super::state::AppState;

type ApiResult = Result<Response, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/:id",
            get(get_employee).patch(update_employee).delete(delete_employee),
        )
        .route("/employees/:id/attendance", get(get_attendance))
        .route("/employees/:id/payroll", get(get_payroll))
        .route("/employees/:id/payslip", get(get_payslip))
        .route(
            "/employees/:id/leave-requests/:date/decision",
            post(decide_leave_request),
        )
        .route("/attendance", get(list_attendance))
        .route("/leave-requests", get(list_leave_requests))
        .route("/dashboard/summary", get(get_dashboard_summary))
        .route("/dashboard/attendance", get(get_attendance_chart))
        .route("/dashboard/departments", get(get_department_chart))
        .route("/dashboard/recent-leave", get(get_recent_leave))
        .route("/payroll", get(list_payroll))
        .route("/payroll/totals", get(get_payroll_totals))
        .with_state(state)
}

/// Converts a JSON body rejection into a 400 response.
fn reject_json(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the problem
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("unknown variant") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}

/// Converts a query string rejection into a 400 response.
fn reject_query(rejection: QueryRejection) -> ApiErrorResponse {
    warn!(error = %rejection.body_text(), "Query string rejected");
    ApiErrorResponse::bad_request(ApiError::validation_error(rejection.body_text()))
}

fn parse_date(raw: &str) -> Result<NaiveDate, StoreError> {
    raw.parse::<NaiveDate>()
        .map_err(|e| StoreError::invalid("date", format!("'{}' is not a calendar date: {}", raw, e)))
}

async fn list_employees(
    State(state): State<AppState>,
    filter: Result<Query<EmployeeFilter>, QueryRejection>,
) -> ApiResult {
    let Query(filter) = filter.map_err(reject_query)?;
    let store = state.store().lock();
    let employees = filter_employees(&store, &filter);
    Ok(Json(employees).into_response())
}

async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<NewEmployee>, JsonRejection>,
) -> ApiResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create employee request");

    let Json(data) = payload.map_err(|r| reject_json(correlation_id, r))?;

    let start_time = Instant::now();
    let employee = state.store().lock().add_employee(data).map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Create employee failed");
        ApiErrorResponse::from(err)
    })?;

    info!(
        correlation_id = %correlation_id,
        employee_id = employee.employee_id,
        duration_us = start_time.elapsed().as_micros(),
        "Employee created"
    );
    Ok((StatusCode::CREATED, Json(employee)).into_response())
}

async fn get_employee(State(state): State<AppState>, Path(id): Path<u32>) -> ApiResult {
    let store = state.store().lock();
    let employee = store
        .employee(id)
        .ok_or(StoreError::EmployeeNotFound { employee_id: id })?;
    Ok(Json(employee).into_response())
}

async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    payload: Result<Json<EmployeePatch>, JsonRejection>,
) -> ApiResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = id, "Processing update employee request");

    let Json(patch) = payload.map_err(|r| reject_json(correlation_id, r))?;
    if patch.is_empty() {
        warn!(correlation_id = %correlation_id, "Update employee body sets no fields");
        return Err(ApiErrorResponse::bad_request(ApiError::validation_error(
            "Update must set at least one field",
        )));
    }

    let employee = state.store().lock().update_employee(id, patch).map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Update employee failed");
        ApiErrorResponse::from(err)
    })?;

    Ok(Json(employee).into_response())
}

async fn delete_employee(State(state): State<AppState>, Path(id): Path<u32>) -> ApiResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = id, "Processing delete employee request");

    state.store().lock().delete_employee(id).map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Delete employee failed");
        ApiErrorResponse::from(err)
    })?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

async fn get_attendance(State(state): State<AppState>, Path(id): Path<u32>) -> ApiResult {
    let store = state.store().lock();
    let log = store
        .attendance(id)
        .ok_or(StoreError::EmployeeNotFound { employee_id: id })?;
    Ok(Json(log).into_response())
}

async fn get_payroll(State(state): State<AppState>, Path(id): Path<u32>) -> ApiResult {
    let store = state.store().lock();
    let payroll = store
        .payroll(id)
        .ok_or(StoreError::EmployeeNotFound { employee_id: id })?;
    Ok(Json(payroll).into_response())
}

async fn get_payslip(State(state): State<AppState>, Path(id): Path<u32>) -> ApiResult {
    let store = state.store().lock();
    let aggregate = store
        .aggregate(id)
        .ok_or(StoreError::EmployeeNotFound { employee_id: id })?;
    let view = PayslipView::new(
        &aggregate.employee,
        payslip(&aggregate.employee, &aggregate.payroll),
    );
    Ok(Json(view).into_response())
}

async fn decide_leave_request(
    State(state): State<AppState>,
    Path((id, raw_date)): Path<(u32, String)>,
    payload: Result<Json<DecisionRequest>, JsonRejection>,
) -> ApiResult {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = id,
        date = %raw_date,
        "Processing leave decision request"
    );

    let Json(request) = payload.map_err(|r| reject_json(correlation_id, r))?;
    let date = parse_date(&raw_date)?;

    let updated = state
        .store()
        .lock()
        .decide_leave_request(id, date, request.decision)
        .map_err(|err| {
            warn!(correlation_id = %correlation_id, error = %err, "Leave decision failed");
            ApiErrorResponse::from(err)
        })?;

    Ok(Json(DecisionResponse {
        employee_id: id,
        date,
        status: LeaveStatus::from(request.decision),
        updated,
    })
    .into_response())
}

async fn list_attendance(
    State(state): State<AppState>,
    filter: Result<Query<AttendanceFilter>, QueryRejection>,
) -> ApiResult {
    let Query(filter) = filter.map_err(reject_query)?;
    let store = state.store().lock();
    Ok(Json(filter_attendance_records(&store, &filter)).into_response())
}

async fn list_leave_requests(
    State(state): State<AppState>,
    filter: Result<Query<LeaveFilter>, QueryRejection>,
) -> ApiResult {
    let Query(filter) = filter.map_err(reject_query)?;
    let store = state.store().lock();
    Ok(Json(filter_leave_requests(&store, &filter)).into_response())
}

async fn get_dashboard_summary(
    State(state): State<AppState>,
    query: Result<Query<SummaryQuery>, QueryRejection>,
) -> ApiResult {
    let Query(query) = query.map_err(reject_query)?;
    let store = state.store().lock();
    Ok(Json(dashboard_summary(&store, query.date)).into_response())
}

async fn get_attendance_chart(State(state): State<AppState>) -> ApiResult {
    let store = state.store().lock();
    Ok(Json(attendance_by_date(&store)).into_response())
}

async fn get_department_chart(State(state): State<AppState>) -> ApiResult {
    let store = state.store().lock();
    Ok(Json(department_headcount(&store)).into_response())
}

async fn get_recent_leave(
    State(state): State<AppState>,
    query: Result<Query<RecentLeaveQuery>, QueryRejection>,
) -> ApiResult {
    let Query(query) = query.map_err(reject_query)?;
    let store = state.store().lock();
    let limit = query.limit.unwrap_or(store.settings().recent_leave_limit);
    Ok(Json(recent_leave_requests(&store, limit)).into_response())
}

async fn list_payroll(
    State(state): State<AppState>,
    query: Result<Query<PayrollQuery>, QueryRejection>,
) -> ApiResult {
    let Query(query) = query.map_err(reject_query)?;
    let store = state.store().lock();
    Ok(Json(payroll_rows(&store, query.q.as_deref())).into_response())
}

async fn get_payroll_totals(State(state): State<AppState>) -> ApiResult {
    let store = state.store().lock();
    Ok(Json(payroll_totals(&store)).into_response())
}
