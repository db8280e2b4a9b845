use axum::http::StatusCode;
use crate::common;

#[tokio::test]
async fn test_create_holiday_success() {
    let (app, _pool, _guard) = common::test_app().await;
    let token = common::alice_token();
    let mut body = common::holiday_body("  Summer in Lisbon ", "Lisbon", "2026-07-01", "2026-07-10");
    body["notes"] = serde_json::json!("Pack sunscreen");

    let (status, resp) = common::post_json(&app, "/api/holidays", &body, Some(&token)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(resp["name"], "Summer in Lisbon");
    assert_eq!(resp["destination"], "Lisbon");
    assert_eq!(resp["start_date"], "2026-07-01");
    assert_eq!(resp["end_date"], "2026-07-10");
    assert_eq!(resp["notes"], "Pack sunscreen");
    assert!(resp["id"].as_str().is_some());
}

#[tokio::test]
async fn test_create_holiday_single_day_trip() {
    let (app, _pool, _guard) = common::test_app().await;
    let token = common::alice_token();
    let body = common::holiday_body("Day trip", "Sintra", "2026-08-02", "2026-08-02");
    let (status, _) = common::post_json(&app, "/api/holidays", &body, Some(&token)).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_holiday_blank_notes_become_null() {
    let (app, _pool, _guard) = common::test_app().await;
    let token = common::alice_token();
    let mut body = common::holiday_body("Ski week", "Zermatt", "2027-01-10", "2027-01-17");
    body["notes"] = serde_json::json!("   ");
    let (status, resp) = common::post_json(&app, "/api/holidays", &body, Some(&token)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(resp.get("notes").is_none() || resp["notes"].is_null());
}

#[tokio::test]
async fn test_create_holiday_end_before_start() {
    let (app, _pool, _guard) = common::test_app().await;
    let token = common::alice_token();
    let body = common::holiday_body("Backwards", "Oslo", "2026-07-10", "2026-07-01");
    let (status, resp) = common::post_json(&app, "/api/holidays", &body, Some(&token)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(resp["kind"], "ValidationError");
    assert!(resp["field_errors"]["end_date"].is_string());
}

#[tokio::test]
async fn test_create_holiday_blank_name() {
    let (app, _pool, _guard) = common::test_app().await;
    let token = common::alice_token();
    let body = common::holiday_body("   ", "Oslo", "2026-07-01", "2026-07-02");
    let (status, resp) = common::post_json(&app, "/api/holidays", &body, Some(&token)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp["field_errors"]["name"].is_string());
}

#[tokio::test]
async fn test_create_holiday_requires_auth() {
    let (app, _pool, _guard) = common::test_app().await;
    let body = common::holiday_body("Anon", "Nowhere", "2026-07-01", "2026-07-02");
    let (status, resp) = common::post_json(&app, "/api/holidays", &body, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(resp["kind"], "Unauthorized");
}
