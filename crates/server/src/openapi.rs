use axum::Router;
use shared_types::{
    AppError, AppErrorKind, AuthUser, CreateHolidayRequest, HolidayResponse, LoginRequest,
    TokenResponse,
};
use sqlx::{Pool, Postgres};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_scalar::{Scalar, Servable};

use crate::db::AppState;
use crate::health;
use crate::rest;

/// OpenAPI documentation for the API.
#[derive(OpenApi)]
#[openapi(
    paths(
        rest::auth::issue_token,
        rest::auth::me,
        rest::holiday::list_holidays,
        rest::holiday::create_holiday,
        rest::holiday::get_holiday,
        rest::holiday::update_holiday,
        rest::holiday::delete_holiday,
        health::health_check,
    ),
    components(schemas(
        AppError,
        AppErrorKind,
        AuthUser,
        LoginRequest,
        TokenResponse,
        HolidayResponse,
        CreateHolidayRequest,
        health::HealthResponse,
        health::ServiceStatus,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Bearer token issuance"),
        (name = "holidays", description = "Holiday planning endpoints"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "Holiday Planner API",
        description = "Plan and organize upcoming trips",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Build an Axum router that serves the REST API at `/api/*`, the health
/// check, and (when enabled) the API docs at `/docs`.
pub fn api_router(pool: Pool<Postgres>) -> Router {
    let state = AppState { pool };
    let flags = crate::config::feature_flags();

    let router = Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state);

    if flags.api_docs {
        router.merge(Scalar::with_url("/docs", ApiDoc::openapi()))
    } else {
        router
    }
}
