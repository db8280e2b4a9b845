use axum::http::StatusCode;
use crate::common;

#[tokio::test]
async fn test_update_holiday_replaces_fields() {
    let (app, _pool, _guard) = common::test_app().await;
    let token = common::alice_token();
    let id = common::create_test_holiday(&app, &token, "Draft", "Rome", "2026-09-01", "2026-09-05").await;

    let mut body = common::holiday_body("Roman holiday", "Rome", "2026-09-02", "2026-09-09");
    body["notes"] = serde_json::json!("Book the Colosseum tour");
    let (status, resp) =
        common::put_json(&app, &format!("/api/holidays/{id}"), &body, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["id"], id.as_str());
    assert_eq!(resp["name"], "Roman holiday");
    assert_eq!(resp["end_date"], "2026-09-09");
    assert_eq!(resp["notes"], "Book the Colosseum tour");

    let (_, fetched) = common::get(&app, &format!("/api/holidays/{id}"), Some(&token)).await;
    assert_eq!(fetched["name"], "Roman holiday");
}

#[tokio::test]
async fn test_update_holiday_invalid_dates() {
    let (app, _pool, _guard) = common::test_app().await;
    let token = common::alice_token();
    let id = common::create_test_holiday(&app, &token, "Trip", "Rome", "2026-09-01", "2026-09-05").await;

    let body = common::holiday_body("Trip", "Rome", "2026-09-05", "2026-09-01");
    let (status, resp) =
        common::put_json(&app, &format!("/api/holidays/{id}"), &body, Some(&token)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp["field_errors"]["end_date"].is_string());
}

#[tokio::test]
async fn test_update_holiday_not_found() {
    let (app, _pool, _guard) = common::test_app().await;
    let token = common::alice_token();
    let body = common::holiday_body("Ghost", "Nowhere", "2026-09-01", "2026-09-02");
    let (status, _) = common::put_json(
        &app,
        "/api/holidays/00000000-0000-0000-0000-000000000000",
        &body,
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_holiday_bad_uuid() {
    let (app, _pool, _guard) = common::test_app().await;
    let token = common::alice_token();
    let body = common::holiday_body("Ghost", "Nowhere", "2026-09-01", "2026-09-02");
    let (status, _) = common::put_json(&app, "/api/holidays/not-a-uuid", &body, Some(&token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
