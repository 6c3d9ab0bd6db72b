//! Integration tests for the Payroll Engine.
//!
//! This test suite drives the HTTP API and the library entry points through
//! the standard pay scenarios:
//! - Days at and over the daily limit
//! - Multi-day aggregation
//! - Combined daily and weekly overtime
//! - Daily overtime exceeding the weekly limit
//! - Validation and malformed input errors

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::{PayrollEngine, run_payroll};
use payroll_engine::config::{OvertimeRules, RulesLoader};
use payroll_engine::error::EngineError;
use payroll_engine::io::{PayrollReport, parse_timesheet};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    create_router(AppState::new(OvertimeRules::default()))
}

fn first_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn post_payroll(router: Router, body: String) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/payroll")
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn create_request(rate: Value, hours: &[Value]) -> Value {
    let entries: Vec<Value> = hours
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let work_date = first_day() + Days::new(i as u64);
            json!({
                "work_date": work_date.to_string(),
                "hours": h
            })
        })
        .collect();

    json!({
        "employee": {"employee_id": "E001", "hourly_rate": rate},
        "entries": entries
    })
}

fn assert_decimal_field(result: &Value, field: &str, expected: &str) {
    let actual = result["result"][field]
        .as_str()
        .unwrap_or_else(|| panic!("{field} missing from {result}"));
    assert_eq!(
        decimal(actual),
        decimal(expected),
        "Expected {field} {expected}, got {actual}"
    );
}

async fn assert_scenario(hours: &[Value], regular: &str, overtime: &str, gross: &str) {
    let request = create_request(json!(20.0), hours);
    let (status, body) = post_payroll(create_router_for_test(), request.to_string()).await;

    assert_eq!(status, StatusCode::OK, "unexpected body: {body}");
    assert_eq!(body["result"]["employee_id"], "E001");
    assert_decimal_field(&body, "hourly_rate", "20");
    assert_decimal_field(&body, "regular_hours", regular);
    assert_decimal_field(&body, "overtime_hours", overtime);
    assert_decimal_field(&body, "gross_pay", gross);
}

// =============================================================================
// Pay scenarios over HTTP
// =============================================================================

#[tokio::test]
async fn test_single_day_at_limit() {
    assert_scenario(&[json!(8.0)], "8", "0", "160.00").await;
}

#[tokio::test]
async fn test_single_day_over_limit() {
    assert_scenario(&[json!(10.0)], "8", "2", "220.00").await;
}

#[tokio::test]
async fn test_two_days_aggregate() {
    assert_scenario(&[json!(8.0), json!(10.0)], "16", "2", "380.00").await;
}

#[tokio::test]
async fn test_five_long_days_reconcile_daily_and_weekly_overtime() {
    let hours = vec![json!(10.0); 5];
    assert_scenario(&hours, "34", "16", "1160.00").await;
}

#[tokio::test]
async fn test_daily_overtime_beyond_weekly_limit_conserves_hours() {
    // 23 days slightly over the limit accumulate 46 hours of daily overtime.
    let hours = vec![json!("10"); 23];
    assert_scenario(&hours, "0", "230", "6900").await;
}

#[tokio::test]
async fn test_string_amounts_are_accepted() {
    let request = create_request(json!("28.54"), &[json!("7.25"), json!("9.5")]);
    let (status, body) = post_payroll(create_router_for_test(), request.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    // 7.25 + 8 regular, 1.5 overtime: 15.25 * 28.54 + 1.5 * 28.54 * 1.5
    assert_decimal_field(&body, "regular_hours", "15.25");
    assert_decimal_field(&body, "overtime_hours", "1.5");
    assert_decimal_field(&body, "gross_pay", "499.4500");
}

#[tokio::test]
async fn test_response_includes_calculation_id_and_audit_trace() {
    let request = create_request(json!(20), &[json!(8), json!(10)]);
    let (status, body) = post_payroll(create_router_for_test(), request.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let id = body["calculation_id"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());

    let steps = body["audit_trace"]["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 6);
    assert_eq!(steps[0]["rule_id"], "validation");
    assert_eq!(steps[5]["rule_id"], "gross_pay");
}

#[tokio::test]
async fn test_custom_rules_state() {
    let router = create_router(AppState::new(OvertimeRules {
        daily_regular_limit: decimal("10"),
        weekly_regular_limit: decimal("40"),
        overtime_multiplier: decimal("2"),
    }));
    let request = create_request(json!(20), &[json!(10.0)]);
    let (status, body) = post_payroll(router, request.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&body, "regular_hours", "10");
    assert_decimal_field(&body, "overtime_hours", "0");
    assert_decimal_field(&body, "gross_pay", "200");
}

// =============================================================================
// Error cases over HTTP
// =============================================================================

#[tokio::test]
async fn test_zero_rate_rejected() {
    let request = create_request(json!(0), &[json!(8)]);
    let (status, body) = post_payroll(create_router_for_test(), request.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INVALID_EMPLOYEE");
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("hourly_rate must be greater than 0")
    );
}

#[tokio::test]
async fn test_negative_rate_rejected() {
    let request = create_request(json!(-20), &[json!(8)]);
    let (status, body) = post_payroll(create_router_for_test(), request.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INVALID_EMPLOYEE");
}

#[tokio::test]
async fn test_blank_employee_id_rejected() {
    let request = json!({
        "employee": {"employee_id": "  ", "hourly_rate": 20},
        "entries": []
    });
    let (status, body) = post_payroll(create_router_for_test(), request.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INVALID_EMPLOYEE");
}

#[tokio::test]
async fn test_negative_hours_rejected() {
    let request = create_request(json!(20), &[json!(8), json!(-1.5)]);
    let (status, body) = post_payroll(create_router_for_test(), request.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INVALID_TIME_ENTRY");
    assert!(body["message"].as_str().unwrap().contains("2026-01-13"));
}

#[tokio::test]
async fn test_rate_overflowing_decimal_range_is_unprocessable() {
    let request = create_request(json!("10000000000000000000000000000"), &[json!("10")]);
    let (status, body) = post_payroll(create_router_for_test(), request.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "CALCULATION_OVERFLOW");
    assert!(body["message"].as_str().unwrap().contains("regular pay"));
}

#[tokio::test]
async fn test_hours_overflowing_decimal_range_are_unprocessable() {
    let huge = json!("50000000000000000000000000000");
    let request = create_request(json!(20), &[huge.clone(), huge]);
    let (status, body) = post_payroll(create_router_for_test(), request.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "CALCULATION_OVERFLOW");
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let (status, body) =
        post_payroll(create_router_for_test(), "{\"employee\": ".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_field_is_structural_error() {
    let request = json!({"employee": {"employee_id": "E001", "hourly_rate": 20}});
    let (status, body) = post_payroll(create_router_for_test(), request.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_TIMESHEET");
    assert!(body["message"].as_str().unwrap().contains("entries"));
}

#[tokio::test]
async fn test_missing_content_type_rejected() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/payroll")
                .body(Body::from(create_request(json!(20), &[json!(8)]).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_misconfigured_rules_are_server_errors() {
    let router = create_router(AppState::new(OvertimeRules {
        weekly_regular_limit: Decimal::ZERO,
        ..OvertimeRules::default()
    }));
    let request = create_request(json!(20), &[json!(8)]);
    let (status, body) = post_payroll(router, request.to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "INVALID_CONFIGURATION");
}

// =============================================================================
// Library entry points
// =============================================================================

#[test]
fn test_parse_then_run_matches_report() {
    let timesheet = parse_timesheet(&create_request(json!(20), &[json!(8), json!(10)]).to_string())
        .unwrap();
    let result = run_payroll(&timesheet).unwrap();

    let report = PayrollReport::new(&result).to_string();
    assert!(report.contains("Employee:     E001"));
    assert!(report.contains("Hourly rate:  $20.00"));
    assert!(report.contains("Regular hrs:  16.00"));
    assert!(report.contains("OT hrs:       2.00"));
    assert!(report.contains("Gross pay:    $380.00"));
}

#[test]
fn test_parse_failure_is_distinct_from_validation_failure() {
    let parse_error = parse_timesheet("{\"employee\": {}}").unwrap_err();
    assert!(matches!(parse_error, EngineError::TimesheetParseError { .. }));
    assert!(!parse_error.is_validation());

    let timesheet = parse_timesheet(&create_request(json!(20), &[json!(-3)]).to_string()).unwrap();
    let validation_error = run_payroll(&timesheet).unwrap_err();
    assert!(matches!(
        validation_error,
        EngineError::InvalidTimeEntry { .. }
    ));
    assert!(validation_error.is_validation());
}

#[test]
fn test_bundled_rules_match_defaults() {
    let loader = RulesLoader::load("config/rules.yaml").unwrap();
    let timesheet = parse_timesheet(&create_request(json!(20), &vec![json!(10); 5]).to_string())
        .unwrap();

    assert_eq!(
        PayrollEngine::new(*loader.rules()).run(&timesheet).unwrap(),
        run_payroll(&timesheet).unwrap()
    );
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let engine = PayrollEngine::default();
    let timesheet = parse_timesheet(&create_request(json!(20), &vec![json!(10); 5]).to_string())
        .unwrap();
    let expected = engine.run(&timesheet).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| engine.run(&timesheet).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
