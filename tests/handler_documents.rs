mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_upload_records_metadata() {
    let (server, _rx) = common::test_server();

    let response = server
        .post("/api/v1/documents/upload")
        .json(&json!({
            "fileName": "crane-cert.pdf",
            "contentType": "application/pdf",
            "metadata": {"workerId": "worker_001"}
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "Document uploaded successfully");
    assert_eq!(json["data"]["status"], "uploaded");
    assert_eq!(json["data"]["fileName"], "crane-cert.pdf");
    assert!(json["data"]["id"].as_str().unwrap().starts_with("doc_"));
}

#[tokio::test]
async fn test_upload_requires_file_name() {
    let (server, _rx) = common::test_server();

    let response = server
        .post("/api/v1/documents/upload")
        .json(&json!({"contentType": "application/pdf"}))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_validate_marks_document_validated() {
    let (server, _rx) = common::test_server();

    let created = server
        .post("/api/v1/documents/upload")
        .json(&json!({"fileName": "insurance.pdf"}))
        .await;
    let id = created.json::<serde_json::Value>()["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server.get(&format!("/api/v1/documents/validate/{id}")).await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["data"]["documentId"], id);
    assert_eq!(json["data"]["valid"], true);
    assert!(json["data"]["checkedAt"].is_string());
}

#[tokio::test]
async fn test_validate_unknown_document_is_404() {
    let (server, _rx) = common::test_server();

    let response = server.get("/api/v1/documents/validate/doc_999").await;
    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["message"],
        "Document not found"
    );
}
