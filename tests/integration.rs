//! Integration tests for the HR record store API.
//!
//! This test suite drives the HTTP router against the ModernTech seed data:
//! - Employee directory search, create, update and delete
//! - Companion attendance and payroll records
//! - Leave decisions, including the pending-only guard
//! - Dashboard aggregates
//! - Payroll table, totals and payslips
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use hr_records::api::{AppState, create_router};
use hr_records::config::SeedLoader;
use hr_records::store::RecordStore;

// =============================================================================
// Test Helpers
// =============================================================================

const SEED_DIR: &str = "./seed/moderntech";

fn seeded_store() -> RecordStore {
    SeedLoader::load(SEED_DIR)
        .expect("Failed to load seed")
        .into_store()
        .expect("Seed is inconsistent")
}

fn create_router_for_test() -> Router {
    create_router(AppState::new(seeded_store()))
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    Decimal::from_str(s).unwrap().normalize().to_string()
}

fn assert_decimal(value: &Value, expected: &str) {
    let actual = value.as_str().unwrap_or_else(|| panic!("not a decimal string: {value}"));
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "Expected {}, got {}",
        expected,
        actual
    );
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, "GET", uri, None).await
}

fn new_employee_body() -> Value {
    json!({
        "name": "Ayanda Mthembu",
        "position": "Backend Engineer",
        "department": "Development",
        "salary": "68000",
        "contact": "ayanda.mthembu@moderntech.com",
        "employment_history": "Joined in 2025"
    })
}

// =============================================================================
// Employee directory
// =============================================================================

#[tokio::test]
async fn test_list_all_employees() {
    let router = create_router_for_test();
    let (status, body) = get(&router, "/employees").await;

    assert_eq!(status, StatusCode::OK);
    let employees = body.as_array().unwrap();
    assert_eq!(employees.len(), 10);
    assert_eq!(employees[0]["employee_id"], 1);
    assert_eq!(employees[9]["employee_id"], 10);
}

#[tokio::test]
async fn test_list_employees_by_department() {
    let router = create_router_for_test();
    let (status, body) = get(&router, "/employees?department=Marketing").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["employee_id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![5, 8]);
}

#[tokio::test]
async fn test_search_employees_by_name() {
    let router = create_router_for_test();
    let (_, body) = get(&router, "/employees?q=naidoo").await;

    let employees = body.as_array().unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0]["name"], "Keshav Naidoo");
}

#[tokio::test]
async fn test_unknown_department_filter_is_rejected() {
    let router = create_router_for_test();
    let (status, body) = get(&router, "/employees?department=Legal").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_single_employee() {
    let router = create_router_for_test();
    let (status, body) = get(&router, "/employees/7").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Naledi Moeketsi");
    assert_eq!(body["department"], "IT");
    assert_decimal(&body["salary"], "72000");
}

#[tokio::test]
async fn test_get_unknown_employee_is_404() {
    let router = create_router_for_test();
    let (status, body) = get(&router, "/employees/99").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");
}

// =============================================================================
// Create / update / delete
// =============================================================================

#[tokio::test]
async fn test_create_employee_assigns_next_id_and_companions() {
    let router = create_router_for_test();
    let (status, body) = send(&router, "POST", "/employees", Some(new_employee_body())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["employee_id"], 11);
    assert_eq!(body["name"], "Ayanda Mthembu");

    let (status, payroll) = get(&router, "/employees/11/payroll").await;
    assert_eq!(status, StatusCode::OK);
    assert_decimal(&payroll["hours_worked"], "0");
    assert_decimal(&payroll["leave_deductions"], "0");
    assert_decimal(&payroll["final_salary"], "68000");

    let (status, attendance) = get(&router, "/employees/11/attendance").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(attendance["attendance"], json!([]));
    assert_eq!(attendance["leave_requests"], json!([]));
}

#[tokio::test]
async fn test_create_employee_with_bad_contact_is_rejected() {
    let router = create_router_for_test();
    let mut body = new_employee_body();
    body["contact"] = json!("not an email");

    let (status, error) = send(&router, "POST", "/employees", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");

    let (_, employees) = get(&router, "/employees").await;
    assert_eq!(employees.as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_create_employee_with_negative_salary_is_rejected() {
    let router = create_router_for_test();
    let mut body = new_employee_body();
    body["salary"] = json!("-100");

    let (status, error) = send(&router, "POST", "/employees", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_employee_with_unknown_department_is_rejected() {
    let router = create_router_for_test();
    let mut body = new_employee_body();
    body["department"] = json!("Legal");

    let (status, error) = send(&router, "POST", "/employees", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_employee_with_missing_field_is_rejected() {
    let router = create_router_for_test();
    let mut body = new_employee_body();
    body.as_object_mut().unwrap().remove("name");

    let (status, error) = send(&router, "POST", "/employees", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let router = create_router_for_test();
    let request = Request::builder()
        .method("POST")
        .uri("/employees")
        .header("Content-Type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_update_salary_changes_only_salary() {
    let router = create_router_for_test();
    let (_, before) = get(&router, "/employees/3").await;
    let (_, payroll_before) = get(&router, "/employees/3/payroll").await;
    let (_, attendance_before) = get(&router, "/employees/3/attendance").await;

    let (status, after) = send(
        &router,
        "PATCH",
        "/employees/3",
        Some(json!({ "salary": "59000" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&after["salary"], "59000");
    for field in ["employee_id", "name", "position", "department", "contact", "employment_history"] {
        assert_eq!(after[field], before[field], "field {field} changed");
    }

    let (_, payroll_after) = get(&router, "/employees/3/payroll").await;
    let (_, attendance_after) = get(&router, "/employees/3/attendance").await;
    assert_eq!(payroll_after, payroll_before);
    assert_eq!(attendance_after, attendance_before);
}

#[tokio::test]
async fn test_create_employee_with_oversized_salary_is_rejected() {
    let router = create_router_for_test();
    let mut body = new_employee_body();
    body["salary"] = json!(Decimal::MAX.to_string());

    let (status, error) = send(&router, "POST", "/employees", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");

    let (status, totals) = get(&router, "/payroll/totals").await;
    assert_eq!(status, StatusCode::OK);
    assert_decimal(&totals["total_payroll"], "632650");
}

#[tokio::test]
async fn test_empty_update_is_rejected() {
    let router = create_router_for_test();
    let (_, before) = get(&router, "/employees/3").await;

    let (status, error) = send(&router, "PATCH", "/employees/3", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");

    let (_, after) = get(&router, "/employees/3").await;
    assert_eq!(after, before);
}

#[tokio::test]
async fn test_update_unknown_employee_is_404() {
    let router = create_router_for_test();
    let (status, body) = send(
        &router,
        "PATCH",
        "/employees/42",
        Some(json!({ "position": "Lead" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");
}

#[tokio::test]
async fn test_delete_removes_employee_and_companions() {
    let router = create_router_for_test();
    let (status, _) = send(&router, "DELETE", "/employees/4", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    for uri in ["/employees/4", "/employees/4/attendance", "/employees/4/payroll"] {
        let (status, _) = get(&router, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri} still present");
    }

    let (status, _) = send(&router, "DELETE", "/employees/4", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, employees) = get(&router, "/employees").await;
    assert_eq!(employees.as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn test_id_after_deleting_highest_is_reused() {
    let router = create_router_for_test();
    send(&router, "DELETE", "/employees/10", None).await;
    let (_, body) = send(&router, "POST", "/employees", Some(new_employee_body())).await;
    assert_eq!(body["employee_id"], 10);
}

// =============================================================================
// Leave decisions
// =============================================================================

#[tokio::test]
async fn test_leave_decision_is_last_write_wins() {
    let router = create_router_for_test();
    let uri = "/employees/2/leave-requests/2025-07-15/decision";

    let (status, body) = send(&router, "POST", uri, Some(json!({ "decision": "Approved" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Approved");
    assert_eq!(body["updated"], 1);

    let (status, body) = send(&router, "POST", uri, Some(json!({ "decision": "Denied" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Denied");

    let (_, attendance) = get(&router, "/employees/2/attendance").await;
    assert_eq!(attendance["leave_requests"][0]["status"], "Denied");
}

#[tokio::test]
async fn test_leave_decision_for_unknown_date_is_404() {
    let router = create_router_for_test();
    let (status, body) = send(
        &router,
        "POST",
        "/employees/2/leave-requests/2025-07-16/decision",
        Some(json!({ "decision": "Approved" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "LEAVE_REQUEST_NOT_FOUND");
}

#[tokio::test]
async fn test_leave_decision_with_malformed_date_is_400() {
    let router = create_router_for_test();
    let (status, body) = send(
        &router,
        "POST",
        "/employees/2/leave-requests/2025-15-99/decision",
        Some(json!({ "decision": "Approved" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_pending_is_not_an_accepted_decision() {
    let router = create_router_for_test();
    let (status, _) = send(
        &router,
        "POST",
        "/employees/2/leave-requests/2025-07-15/decision",
        Some(json!({ "decision": "Pending" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_pending_only_guard_rejects_redecision() {
    let mut seed = SeedLoader::load(SEED_DIR).unwrap().into_seed();
    seed.settings.enforce_pending_only_decisions = true;
    let router = create_router(AppState::new(RecordStore::from_seed(seed).unwrap()));

    // Employee 1's request on 2025-07-22 is seeded as Approved
    let (status, body) = send(
        &router,
        "POST",
        "/employees/1/leave-requests/2025-07-22/decision",
        Some(json!({ "decision": "Denied" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "INVALID_STATE");

    let (_, attendance) = get(&router, "/employees/1/attendance").await;
    assert_eq!(attendance["leave_requests"][0]["status"], "Approved");
}

// =============================================================================
// Attendance and leave lists
// =============================================================================

#[tokio::test]
async fn test_attendance_list_filters_by_status() {
    let router = create_router_for_test();
    let (_, absent) = get(&router, "/attendance?status=Absent").await;
    assert_eq!(absent.as_array().unwrap().len(), 9);

    let (_, all) = get(&router, "/attendance").await;
    assert_eq!(all.as_array().unwrap().len(), 50);
}

#[tokio::test]
async fn test_leave_list_filters_by_status_and_name() {
    let router = create_router_for_test();
    let (_, pending) = get(&router, "/leave-requests?status=Pending").await;
    assert_eq!(pending.as_array().unwrap().len(), 5);

    let (_, patel) = get(&router, "/leave-requests?q=patel").await;
    assert_eq!(patel.as_array().unwrap().len(), 2);
}

// =============================================================================
// Dashboard
// =============================================================================

#[tokio::test]
async fn test_dashboard_summary_uses_configured_date() {
    let router = create_router_for_test();
    let (status, body) = get(&router, "/dashboard/summary").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date"], "2025-07-29");
    assert_eq!(body["total_employees"], 10);
    assert_eq!(body["present_on_date"], 8);
    assert_decimal(&body["attendance_rate"], "80");
    assert_eq!(body["pending_leaves"], 5);
    assert_decimal(&body["total_payroll"], "632650");
}

#[tokio::test]
async fn test_dashboard_summary_for_requested_date() {
    let router = create_router_for_test();
    let (_, body) = get(&router, "/dashboard/summary?date=2025-07-27").await;

    assert_eq!(body["date"], "2025-07-27");
    assert_eq!(body["present_on_date"], 7);
    assert_decimal(&body["attendance_rate"], "70");
}

#[tokio::test]
async fn test_dashboard_attendance_chart() {
    let router = create_router_for_test();
    let (_, body) = get(&router, "/dashboard/attendance").await;

    let buckets = body.as_array().unwrap();
    let summary: Vec<(String, u64, u64)> = buckets
        .iter()
        .map(|b| {
            (
                b["date"].as_str().unwrap().to_string(),
                b["present"].as_u64().unwrap(),
                b["absent"].as_u64().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            ("2025-07-25".to_string(), 9, 1),
            ("2025-07-26".to_string(), 8, 2),
            ("2025-07-27".to_string(), 7, 3),
            ("2025-07-28".to_string(), 9, 1),
            ("2025-07-29".to_string(), 8, 2),
        ]
    );
}

#[tokio::test]
async fn test_dashboard_department_chart_sums_to_headcount() {
    let router = create_router_for_test();
    let (_, body) = get(&router, "/dashboard/departments").await;

    let departments = body.as_array().unwrap();
    assert_eq!(departments.len(), 9);
    assert_eq!(departments[0]["department"], "Development");
    let marketing = departments
        .iter()
        .find(|d| d["department"] == "Marketing")
        .unwrap();
    assert_eq!(marketing["count"], 2);
    let total: u64 = departments.iter().map(|d| d["count"].as_u64().unwrap()).sum();
    assert_eq!(total, 10);
}

#[tokio::test]
async fn test_dashboard_recent_leave_feed() {
    let router = create_router_for_test();
    let (_, body) = get(&router, "/dashboard/recent-leave").await;

    let feed: Vec<(u64, String)> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| {
            (
                e["employee_id"].as_u64().unwrap(),
                e["date"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(
        feed,
        vec![
            (10, "2025-07-24".to_string()),
            (1, "2025-07-22".to_string()),
            (6, "2025-07-22".to_string()),
            (4, "2025-07-20".to_string()),
            (8, "2025-07-19".to_string()),
        ]
    );

    let (_, limited) = get(&router, "/dashboard/recent-leave?limit=2").await;
    assert_eq!(limited.as_array().unwrap().len(), 2);
}

// =============================================================================
// Payroll
// =============================================================================

#[tokio::test]
async fn test_payroll_totals() {
    let router = create_router_for_test();
    let (status, body) = get(&router, "/payroll/totals").await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&body["total_payroll"], "632650");
    assert_decimal(&body["total_hours"], "1632");
    assert_decimal(&body["total_leave_deductions"], "60");
    assert_eq!(body["record_count"], 10);
    assert_decimal(&body["average_salary"], "63265");
}

#[tokio::test]
async fn test_payroll_totals_after_everyone_leaves() {
    let router = create_router_for_test();
    for id in 1..=10 {
        send(&router, "DELETE", &format!("/employees/{id}"), None).await;
    }
    let (status, body) = get(&router, "/payroll/totals").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["record_count"], 0);
    assert_eq!(body["average_salary"], Value::Null);
}

#[tokio::test]
async fn test_payroll_rows_search() {
    let router = create_router_for_test();
    let (_, body) = get(&router, "/payroll?q=moeketsi").await;

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["employee_id"], 7);
    assert_decimal(&rows[0]["efficiency"], "100");
    assert_eq!(rows[0]["efficiency_band"], "good");
}

#[tokio::test]
async fn test_payslip_breakdown() {
    let router = create_router_for_test();
    let (status, body) = get(&router, "/employees/1/payslip").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["employee_number"], "#0001");
    assert_eq!(body["name"], "Sibongile Nkosi");
    assert_decimal(&body["gross_salary"], "70000");
    assert_decimal(&body["tax_estimate"], "12600");
    assert_decimal(&body["uif"], "700");
    assert_decimal(&body["total_deductions"], "500");
    assert_decimal(&body["other_deductions"], "-12800");
    assert_decimal(&body["displayed_other_deductions"], "0");
    assert_decimal(&body["net_salary"], "69500");
    assert_decimal(&body["efficiency"], "91");
}

#[tokio::test]
async fn test_payslip_for_unknown_employee_is_404() {
    let router = create_router_for_test();
    let (status, _) = get(&router, "/employees/77/payslip").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
