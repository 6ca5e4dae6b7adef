mod common;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use axum_test::TestServer;
use riggerconnect_api::api::handlers::health_handler;

#[tokio::test]
async fn test_health_reports_all_components() {
    let (state, _rx) = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(json["checks"]["task_queue"]["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_health_degrades_when_task_worker_stops() {
    let (state, rx) = common::create_test_state();
    drop(rx);

    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        response.json::<serde_json::Value>()["status"],
        "degraded"
    );
}
