use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use shared_types::{
    AppError, CreateHolidayRequest, HolidayResponse, HolidaySort, UpdateHolidayRequest,
};

use crate::auth::extractors::AuthRequired;
use crate::error_convert::ValidateRequest;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
pub struct HolidayListParams {
    /// One of `date`, `name` or `destination`. Omitted or empty lists newest first.
    #[serde(default)]
    pub sort: Option<String>,
}

fn parse_id(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::bad_request("Invalid UUID format"))
}

// ---------------------------------------------------------------------------
// GET /api/holidays
// ---------------------------------------------------------------------------

/// List the caller's holidays.
#[utoipa::path(
    get,
    path = "/api/holidays",
    params(HolidayListParams),
    responses(
        (status = 200, description = "Holiday list", body = Vec<HolidayResponse>),
        (status = 400, description = "Unknown sort order", body = AppError),
        (status = 401, description = "Not authenticated", body = AppError)
    ),
    security(("bearer" = [])),
    tag = "holidays"
)]
pub async fn list_holidays(
    State(pool): State<Pool<Postgres>>,
    AuthRequired(claims): AuthRequired,
    Query(params): Query<HolidayListParams>,
) -> Result<Json<Vec<HolidayResponse>>, AppError> {
    let raw = params.sort.unwrap_or_default();
    let sort = HolidaySort::parse(&raw)
        .ok_or_else(|| AppError::bad_request(format!("Unknown sort order '{raw}'")))?;

    let rows = crate::repo::holiday::list_by_user(&pool, claims.sub, sort).await?;
    Ok(Json(rows.into_iter().map(HolidayResponse::from).collect()))
}

// ---------------------------------------------------------------------------
// POST /api/holidays
// ---------------------------------------------------------------------------

/// Create a new holiday.
#[utoipa::path(
    post,
    path = "/api/holidays",
    request_body = CreateHolidayRequest,
    responses(
        (status = 201, description = "Holiday created", body = HolidayResponse),
        (status = 401, description = "Not authenticated", body = AppError),
        (status = 422, description = "Validation failed", body = AppError)
    ),
    security(("bearer" = [])),
    tag = "holidays"
)]
pub async fn create_holiday(
    State(pool): State<Pool<Postgres>>,
    AuthRequired(claims): AuthRequired,
    Json(body): Json<CreateHolidayRequest>,
) -> Result<(StatusCode, Json<HolidayResponse>), AppError> {
    let body = body.normalized();
    body.validate_request()?;

    let row = crate::repo::holiday::create(&pool, claims.sub, body).await?;
    tracing::info!(user_id = claims.sub, holiday_id = %row.id, "holiday created");

    Ok((StatusCode::CREATED, Json(HolidayResponse::from(row))))
}

// ---------------------------------------------------------------------------
// GET /api/holidays/{id}
// ---------------------------------------------------------------------------

/// Get a single holiday by ID.
#[utoipa::path(
    get,
    path = "/api/holidays/{id}",
    params(("id" = String, Path, description = "Holiday UUID")),
    responses(
        (status = 200, description = "Holiday found", body = HolidayResponse),
        (status = 404, description = "Not found", body = AppError)
    ),
    security(("bearer" = [])),
    tag = "holidays"
)]
pub async fn get_holiday(
    State(pool): State<Pool<Postgres>>,
    AuthRequired(claims): AuthRequired,
    Path(id): Path<String>,
) -> Result<Json<HolidayResponse>, AppError> {
    let uuid = parse_id(&id)?;

    let row = crate::repo::holiday::find_by_id(&pool, claims.sub, uuid)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Holiday {id} not found")))?;

    Ok(Json(HolidayResponse::from(row)))
}

// ---------------------------------------------------------------------------
// PUT /api/holidays/{id}
// ---------------------------------------------------------------------------

/// Replace a holiday's fields.
#[utoipa::path(
    put,
    path = "/api/holidays/{id}",
    params(("id" = String, Path, description = "Holiday UUID")),
    request_body = CreateHolidayRequest,
    responses(
        (status = 200, description = "Holiday updated", body = HolidayResponse),
        (status = 404, description = "Not found", body = AppError),
        (status = 422, description = "Validation failed", body = AppError)
    ),
    security(("bearer" = [])),
    tag = "holidays"
)]
pub async fn update_holiday(
    State(pool): State<Pool<Postgres>>,
    AuthRequired(claims): AuthRequired,
    Path(id): Path<String>,
    Json(body): Json<UpdateHolidayRequest>,
) -> Result<Json<HolidayResponse>, AppError> {
    let uuid = parse_id(&id)?;
    let body = body.normalized();
    body.validate_request()?;

    let row = crate::repo::holiday::update(&pool, claims.sub, uuid, body)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Holiday {id} not found")))?;
    tracing::info!(user_id = claims.sub, holiday_id = %row.id, "holiday updated");

    Ok(Json(HolidayResponse::from(row)))
}

// ---------------------------------------------------------------------------
// DELETE /api/holidays/{id}
// ---------------------------------------------------------------------------

/// Delete a holiday.
#[utoipa::path(
    delete,
    path = "/api/holidays/{id}",
    params(("id" = String, Path, description = "Holiday UUID")),
    responses(
        (status = 204, description = "Holiday deleted"),
        (status = 404, description = "Not found", body = AppError)
    ),
    security(("bearer" = [])),
    tag = "holidays"
)]
pub async fn delete_holiday(
    State(pool): State<Pool<Postgres>>,
    AuthRequired(claims): AuthRequired,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let uuid = parse_id(&id)?;

    let deleted = crate::repo::holiday::delete(&pool, claims.sub, uuid).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Holiday {id} not found")));
    }
    tracing::info!(user_id = claims.sub, holiday_id = %uuid, "holiday deleted");

    Ok(StatusCode::NO_CONTENT)
}
