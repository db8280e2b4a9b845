use axum::http::StatusCode;
use crate::common;

#[tokio::test]
async fn test_list_only_shows_own_holidays() {
    let (app, _pool, _guard) = common::test_app().await;
    let alice = common::alice_token();
    let bob = common::bob_token();
    common::create_test_holiday(&app, &alice, "Alice trip", "Paris", "2026-04-01", "2026-04-05").await;
    common::create_test_holiday(&app, &bob, "Bob trip", "Berlin", "2026-04-01", "2026-04-05").await;

    let (_, a) = common::get(&app, "/api/holidays", Some(&alice)).await;
    assert_eq!(common::names(&a), vec!["Alice trip"]);

    let (_, b) = common::get(&app, "/api/holidays", Some(&bob)).await;
    assert_eq!(common::names(&b), vec!["Bob trip"]);
}

#[tokio::test]
async fn test_get_other_users_holiday_returns_404() {
    let (app, _pool, _guard) = common::test_app().await;
    let id = common::create_test_holiday(&app, &common::alice_token(), "Private", "Vienna", "2026-03-01", "2026-03-02").await;
    let (status, _) = common::get(&app, &format!("/api/holidays/{id}"), Some(&common::bob_token())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_other_users_holiday_returns_404() {
    let (app, _pool, _guard) = common::test_app().await;
    let alice = common::alice_token();
    let id = common::create_test_holiday(&app, &alice, "Private", "Vienna", "2026-03-01", "2026-03-02").await;

    let body = common::holiday_body("Hijacked", "Vienna", "2026-03-01", "2026-03-02");
    let (status, _) =
        common::put_json(&app, &format!("/api/holidays/{id}"), &body, Some(&common::bob_token())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, fetched) = common::get(&app, &format!("/api/holidays/{id}"), Some(&alice)).await;
    assert_eq!(fetched["name"], "Private");
}

#[tokio::test]
async fn test_delete_other_users_holiday_returns_404() {
    let (app, _pool, _guard) = common::test_app().await;
    let alice = common::alice_token();
    let id = common::create_test_holiday(&app, &alice, "Private", "Vienna", "2026-03-01", "2026-03-02").await;

    let (status, _) = common::delete(&app, &format!("/api/holidays/{id}"), Some(&common::bob_token())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (still, _) = common::get(&app, &format!("/api/holidays/{id}"), Some(&alice)).await;
    assert_eq!(still, StatusCode::OK);
}
