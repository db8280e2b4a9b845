pub mod auth;
pub mod holiday;

use axum::{routing::{get, post}, Router};
use crate::db::AppState;

/// Build the REST API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        // Auth
        .route("/api/auth/token", post(auth::issue_token))
        .route("/api/auth/me", get(auth::me))
        // Holidays
        .route(
            "/api/holidays",
            get(holiday::list_holidays).post(holiday::create_holiday),
        )
        .route(
            "/api/holidays/{id}",
            get(holiday::get_holiday)
                .put(holiday::update_holiday)
                .delete(holiday::delete_holiday),
        )
}
