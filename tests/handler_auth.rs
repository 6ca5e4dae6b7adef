mod common;

use serde_json::json;

#[tokio::test]
async fn test_login_returns_token_and_user() {
    let (server, _rx) = common::test_server();

    let response = server
        .post("/api/v1/auth/login")
        .json(&json!({"email": common::ADMIN_EMAIL, "password": common::ADMIN_PASSWORD}))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], true);
    assert!(json["token"].as_str().unwrap().contains('.'));
    assert_eq!(json["user"]["id"], "admin123");
    assert_eq!(json["user"]["email"], common::ADMIN_EMAIL);
    assert_eq!(json["user"]["role"], "admin");
}

#[tokio::test]
async fn test_login_wrong_password_is_400() {
    let (server, _rx) = common::test_server();

    let response = server
        .post("/api/v1/auth/login")
        .json(&json!({"email": common::ADMIN_EMAIL, "password": "wrong"}))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_missing_fields_is_400() {
    let (server, _rx) = common::test_server();

    let response = server
        .post("/api/v1/auth/login")
        .json(&json!({"email": common::ADMIN_EMAIL}))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["message"],
        "Missing required fields"
    );
}

#[tokio::test]
async fn test_register_issues_first_token() {
    let (server, _rx) = common::test_server();

    let response = server
        .post("/api/v1/auth/register")
        .json(&json!({
            "email": "new.rigger@email.com",
            "password": "longenough",
            "role": "worker"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "User registered successfully");
    assert!(json["token"].is_string());
    assert!(json["user"]["id"].as_str().unwrap().starts_with("user_"));
    assert_eq!(json["user"]["role"], "worker");
}

#[tokio::test]
async fn test_register_rejects_unknown_role() {
    let (server, _rx) = common::test_server();

    let response = server
        .post("/api/v1/auth/register")
        .json(&json!({
            "email": "new.rigger@email.com",
            "password": "longenough",
            "role": "superuser"
        }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<serde_json::Value>()["success"], false);
}

#[tokio::test]
async fn test_refresh_reissues_token() {
    let (server, _rx) = common::test_server();
    let token = common::login_token(&server).await;

    let response = server
        .post("/api/v1/auth/refresh")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], true);
    assert!(json["token"].is_string());
}

#[tokio::test]
async fn test_refresh_without_header_is_401() {
    let (server, _rx) = common::test_server();

    let response = server.post("/api/v1/auth/refresh").await;

    response.assert_status_unauthorized();
    assert_eq!(
        response.json::<serde_json::Value>()["message"],
        "Access token required"
    );
}

#[tokio::test]
async fn test_refresh_with_garbage_token_is_401() {
    let (server, _rx) = common::test_server();

    let response = server
        .post("/api/v1/auth/refresh")
        .authorization_bearer("not.a.token")
        .await;

    response.assert_status_unauthorized();
    assert_eq!(
        response.json::<serde_json::Value>()["message"],
        "Invalid or expired token"
    );
}
