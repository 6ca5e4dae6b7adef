mod common;

use serde_json::json;

#[tokio::test]
async fn test_validate_returns_report_with_job_context() {
    let (server, _rx) = common::test_server();

    let response = server
        .post("/api/v1/compliance/validate")
        .json(&json!({"workerId": "worker_001", "jobId": "job_001"}))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["workerId"], "worker_001");
    assert_eq!(json["data"]["jobId"], "job_001");

    let status = json["data"]["complianceStatus"].as_str().unwrap();
    assert!(status == "compliant" || status == "non-compliant");

    assert!(json["data"]["results"]["certifications"]["status"].is_string());
}

#[tokio::test]
async fn test_validate_unknown_worker_is_404() {
    let (server, _rx) = common::test_server();

    let response = server
        .post("/api/v1/compliance/validate")
        .json(&json!({"workerId": "worker_404", "jobId": "job_001"}))
        .await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["message"],
        "Worker not found"
    );
}

#[tokio::test]
async fn test_validate_missing_fields_is_400() {
    let (server, _rx) = common::test_server();

    let response = server
        .post("/api/v1/compliance/validate")
        .json(&json!({"workerId": "worker_001"}))
        .await;

    response.assert_status_bad_request();
}
