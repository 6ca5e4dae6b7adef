mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_process_queues_task_for_background_worker() {
    let (server, mut rx) = common::test_server();

    let response = server
        .post("/api/v1/automation/process")
        .json(&json!({
            "type": "sync-certifications",
            "payload": {"workerId": "worker_001"}
        }))
        .await;

    response.assert_status(StatusCode::ACCEPTED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], true);
    let task_id = json["data"]["taskId"].as_str().unwrap().to_string();
    assert!(task_id.starts_with("task_"));

    // The response acknowledges intake only; the task reaches the channel.
    let task = rx.recv().await.unwrap();
    assert_eq!(task.id, task_id);
    assert_eq!(task.task_type, "sync-certifications");
    assert_eq!(task.payload.unwrap()["workerId"], "worker_001");
}

#[tokio::test]
async fn test_process_without_payload() {
    let (server, mut rx) = common::test_server();

    let response = server
        .post("/api/v1/automation/process")
        .json(&json!({"type": "nightly-cleanup"}))
        .await;

    response.assert_status(StatusCode::ACCEPTED);
    assert!(rx.recv().await.unwrap().payload.is_none());
}

#[tokio::test]
async fn test_process_requires_type() {
    let (server, _rx) = common::test_server();

    let response = server
        .post("/api/v1/automation/process")
        .json(&json!({"payload": {}}))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["message"],
        "Missing required fields"
    );
}

#[tokio::test]
async fn test_closed_queue_is_reported_as_dependency_failure() {
    let (server, rx) = common::test_server();
    drop(rx);

    let response = server
        .post("/api/v1/automation/process")
        .json(&json!({"type": "sync-certifications"}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<serde_json::Value>()["message"],
        "Task queue unavailable"
    );
}
