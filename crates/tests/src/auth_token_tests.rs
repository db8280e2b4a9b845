use axum::http::StatusCode;
use crate::common;

#[tokio::test]
async fn test_issue_token_success() {
    let (app, _pool, _guard) = common::test_app().await;
    let body = serde_json::json!({"email": common::ALICE_EMAIL, "password": common::PASSWORD});
    let (status, resp) = common::post_json(&app, "/api/auth/token", &body, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["token_type"], "Bearer");
    assert_eq!(resp["user"]["id"], common::ALICE_ID);
    assert!(resp["expires_in"].as_i64().unwrap() > 0);

    let token = resp["access_token"].as_str().unwrap();
    let (me_status, me) = common::get(&app, "/api/auth/me", Some(token)).await;
    assert_eq!(me_status, StatusCode::OK);
    assert_eq!(me["email"], common::ALICE_EMAIL);
}

#[tokio::test]
async fn test_issue_token_email_is_case_insensitive() {
    let (app, _pool, _guard) = common::test_app().await;
    let body = serde_json::json!({"email": "ALICE@example.com", "password": common::PASSWORD});
    let (status, _) = common::post_json(&app, "/api/auth/token", &body, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_issue_token_wrong_password() {
    let (app, _pool, _guard) = common::test_app().await;
    let body = serde_json::json!({"email": common::ALICE_EMAIL, "password": "nope"});
    let (status, resp) = common::post_json(&app, "/api/auth/token", &body, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(resp["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_issue_token_unknown_email_same_message() {
    let (app, _pool, _guard) = common::test_app().await;
    let body = serde_json::json!({"email": "nobody@example.com", "password": common::PASSWORD});
    let (status, resp) = common::post_json(&app, "/api/auth/token", &body, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(resp["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_issue_token_malformed_email() {
    let (app, _pool, _guard) = common::test_app().await;
    let body = serde_json::json!({"email": "not-an-email", "password": "x"});
    let (status, resp) = common::post_json(&app, "/api/auth/token", &body, None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp["field_errors"]["email"].is_string());
}

#[tokio::test]
async fn test_me_requires_token() {
    let (app, _pool, _guard) = common::test_app().await;
    let (status, _) = common::get(&app, "/api/auth/me", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = common::get(&app, "/api/auth/me", Some("garbage.token.value")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
