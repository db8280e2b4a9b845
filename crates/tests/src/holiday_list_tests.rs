use axum::http::StatusCode;
use crate::common;
use pretty_assertions::assert_eq;

async fn seed(app: &axum::Router, token: &str) {
    common::create_test_holiday(app, token, "beach week", "Nice", "2026-08-10", "2026-08-17").await;
    common::create_test_holiday(app, token, "Alps", "Zermatt", "2026-02-01", "2026-02-08").await;
    common::create_test_holiday(app, token, "City break", "amsterdam", "2026-05-01", "2026-05-03").await;
}

#[tokio::test]
async fn test_list_empty() {
    let (app, _pool, _guard) = common::test_app().await;
    let token = common::alice_token();
    let (status, body) = common::get(&app, "/api/holidays", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_list_unsorted_is_newest_first() {
    let (app, _pool, _guard) = common::test_app().await;
    let token = common::alice_token();
    seed(&app, &token).await;

    let (status, body) = common::get(&app, "/api/holidays", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(common::names(&body), vec!["City break", "Alps", "beach week"]);

    let (_, explicit) = common::get(&app, "/api/holidays?sort=", Some(&token)).await;
    assert_eq!(common::names(&explicit), common::names(&body));
}

#[tokio::test]
async fn test_list_sorted_by_date() {
    let (app, _pool, _guard) = common::test_app().await;
    let token = common::alice_token();
    seed(&app, &token).await;

    let (_, body) = common::get(&app, "/api/holidays?sort=date", Some(&token)).await;
    assert_eq!(common::names(&body), vec!["Alps", "City break", "beach week"]);
}

#[tokio::test]
async fn test_list_sorted_by_name_ignores_case() {
    let (app, _pool, _guard) = common::test_app().await;
    let token = common::alice_token();
    seed(&app, &token).await;

    let (_, body) = common::get(&app, "/api/holidays?sort=name", Some(&token)).await;
    assert_eq!(common::names(&body), vec!["Alps", "beach week", "City break"]);
}

#[tokio::test]
async fn test_list_sorted_by_destination() {
    let (app, _pool, _guard) = common::test_app().await;
    let token = common::alice_token();
    seed(&app, &token).await;

    let (_, body) = common::get(&app, "/api/holidays?sort=destination", Some(&token)).await;
    assert_eq!(common::names(&body), vec!["City break", "beach week", "Alps"]);
}

#[tokio::test]
async fn test_list_unknown_sort_rejected() {
    let (app, _pool, _guard) = common::test_app().await;
    let token = common::alice_token();
    let (status, body) = common::get(&app, "/api/holidays?sort=price", Some(&token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Unknown sort order 'price'");
}

#[tokio::test]
async fn test_list_requires_auth() {
    let (app, _pool, _guard) = common::test_app().await;
    let (status, _) = common::get(&app, "/api/holidays", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
