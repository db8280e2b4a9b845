use axum::{extract::State, Json};
use sqlx::{Pool, Postgres};

use shared_types::{AppError, AuthUser, LoginRequest, TokenResponse};

use crate::auth::extractors::AuthRequired;
use crate::auth::{jwt, password};
use crate::error_convert::ValidateRequest;

// ---------------------------------------------------------------------------
// POST /api/auth/token
// ---------------------------------------------------------------------------

/// Exchange email and password for a bearer token.
#[utoipa::path(
    post,
    path = "/api/auth/token",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 401, description = "Invalid credentials", body = AppError),
        (status = 422, description = "Malformed request", body = AppError)
    ),
    tag = "auth"
)]
pub async fn issue_token(
    State(pool): State<Pool<Postgres>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    body.validate_request()?;

    let record = crate::repo::user::find_by_email(&pool, &body.email)
        .await?
        .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

    if !password::verify_password(&body.password, &record.password_hash)? {
        return Err(AppError::unauthorized("Invalid email or password"));
    }

    let access_token = jwt::create_access_token(record.id, &record.email)?;
    tracing::info!(user_id = record.id, "bearer token issued");

    Ok(Json(TokenResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: jwt::access_token_expiry_minutes() * 60,
        user: AuthUser::from(record),
    }))
}

// ---------------------------------------------------------------------------
// GET /api/auth/me
// ---------------------------------------------------------------------------

/// The user the presented token belongs to.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user", body = AuthUser),
        (status = 401, description = "Not authenticated", body = AppError)
    ),
    security(("bearer" = [])),
    tag = "auth"
)]
pub async fn me(
    State(pool): State<Pool<Postgres>>,
    AuthRequired(claims): AuthRequired,
) -> Result<Json<AuthUser>, AppError> {
    crate::repo::user::find_by_id(&pool, claims.sub)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::unauthorized("Account no longer exists"))
}
