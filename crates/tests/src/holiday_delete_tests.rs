use axum::http::StatusCode;
use crate::common;

#[tokio::test]
async fn test_delete_holiday_success() {
    let (app, _pool, _guard) = common::test_app().await;
    let token = common::alice_token();
    let id = common::create_test_holiday(&app, &token, "Gone", "Bergen", "2026-06-01", "2026-06-03").await;
    let (status, _) = common::delete(&app, &format!("/api/holidays/{id}"), Some(&token)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_then_get_returns_404() {
    let (app, _pool, _guard) = common::test_app().await;
    let token = common::alice_token();
    let id = common::create_test_holiday(&app, &token, "Gone", "Bergen", "2026-06-01", "2026-06-03").await;
    let (del_status, _) = common::delete(&app, &format!("/api/holidays/{id}"), Some(&token)).await;
    assert_eq!(del_status, StatusCode::NO_CONTENT);
    let (get_status, _) = common::get(&app, &format!("/api/holidays/{id}"), Some(&token)).await;
    assert_eq!(get_status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_holiday_twice_gives_404() {
    let (app, _pool, _guard) = common::test_app().await;
    let token = common::alice_token();
    let id = common::create_test_holiday(&app, &token, "Gone", "Bergen", "2026-06-01", "2026-06-03").await;
    let (s1, _) = common::delete(&app, &format!("/api/holidays/{id}"), Some(&token)).await;
    assert_eq!(s1, StatusCode::NO_CONTENT);
    let (s2, _) = common::delete(&app, &format!("/api/holidays/{id}"), Some(&token)).await;
    assert_eq!(s2, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_removes_from_list() {
    let (app, _pool, _guard) = common::test_app().await;
    let token = common::alice_token();
    let keep = common::create_test_holiday(&app, &token, "Keep", "Porto", "2026-06-01", "2026-06-03").await;
    let drop = common::create_test_holiday(&app, &token, "Drop", "Faro", "2026-07-01", "2026-07-03").await;
    common::delete(&app, &format!("/api/holidays/{drop}"), Some(&token)).await;

    let (_, list) = common::get(&app, "/api/holidays", Some(&token)).await;
    let ids: Vec<&str> = list.as_array().unwrap().iter().filter_map(|h| h["id"].as_str()).collect();
    assert_eq!(ids, vec![keep.as_str()]);
}
