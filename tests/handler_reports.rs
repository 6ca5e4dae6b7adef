mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_generate_report_records_artifact_path() {
    let (server, _rx) = common::test_server();

    let response = server
        .post("/api/v1/reports/generate")
        .json(&json!({
            "reportType": "payroll",
            "data": {"month": "2024-01"}
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "Report generated successfully");
    assert_eq!(json["data"]["reportType"], "payroll");
    assert!(json["data"]["reportPath"]
        .as_str()
        .unwrap()
        .contains("payroll"));
}

#[tokio::test]
async fn test_generate_without_data_defaults_to_empty_object() {
    let (server, _rx) = common::test_server();

    let response = server
        .post("/api/v1/reports/generate")
        .json(&json!({"reportType": "utilization"}))
        .await;

    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_generate_requires_report_type() {
    let (server, _rx) = common::test_server();

    let response = server
        .post("/api/v1/reports/generate")
        .json(&json!({"data": {}}))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_fetch_lists_generated_reports() {
    let (server, _rx) = common::test_server();

    server
        .post("/api/v1/reports/generate")
        .json(&json!({"reportType": "payroll"}))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.get("/api/v1/reports/fetch").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["data"]["total"], 1);
    assert_eq!(json["data"]["items"][0]["reportType"], "payroll");
}
