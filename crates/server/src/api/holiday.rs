use dioxus::prelude::*;
use shared_types::{CreateHolidayRequest, HolidayResponse, UpdateHolidayRequest};

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use super::auth::require_auth;

#[cfg(feature = "server")]
fn parse_holiday_id(id: &str) -> Result<uuid::Uuid, ServerFnError> {
    uuid::Uuid::parse_str(id).map_err(|_| {
        shared_types::AppError::bad_request("Invalid holiday ID").into_server_fn_error()
    })
}

// ── Holiday Server Functions ───────────────────────────

/// List the caller's holidays in the order named by `sort`
/// (`""`, `"date"`, `"name"` or `"destination"`).
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_holidays(sort: String) -> Result<Vec<HolidayResponse>, ServerFnError> {
    use crate::repo::holiday;
    use shared_types::{AppError, HolidaySort};

    let claims = require_auth()?;
    let sort = HolidaySort::parse(&sort).ok_or_else(|| {
        AppError::bad_request(format!("Unknown sort order '{sort}'")).into_server_fn_error()
    })?;

    let db = get_db().await.map_err(|e| e.into_server_fn_error())?;
    let rows = holiday::list_by_user(db, claims.sub, sort)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    tracing::debug!(user_id = claims.sub, count = rows.len(), "holidays listed");
    Ok(rows.into_iter().map(HolidayResponse::from).collect())
}

/// Create a holiday owned by the caller.
#[cfg_attr(feature = "server", tracing::instrument(skip(body)))]
#[server]
pub async fn create_holiday(body: CreateHolidayRequest) -> Result<HolidayResponse, ServerFnError> {
    use crate::repo::holiday;

    let claims = require_auth()?;
    let body = body.normalized();
    body.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await.map_err(|e| e.into_server_fn_error())?;
    let row = holiday::create(db, claims.sub, body)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    tracing::info!(user_id = claims.sub, holiday_id = %row.id, "holiday created");
    Ok(HolidayResponse::from(row))
}

/// Replace a holiday's fields. Holidays owned by other users are reported
/// as not found.
#[cfg_attr(feature = "server", tracing::instrument(skip(body)))]
#[server]
pub async fn update_holiday(
    id: String,
    body: UpdateHolidayRequest,
) -> Result<HolidayResponse, ServerFnError> {
    use crate::repo::holiday;
    use shared_types::AppError;

    let claims = require_auth()?;
    let uuid = parse_holiday_id(&id)?;
    let body = body.normalized();
    body.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await.map_err(|e| e.into_server_fn_error())?;
    let row = holiday::update(db, claims.sub, uuid, body)
        .await
        .map_err(|e| e.into_server_fn_error())?
        .ok_or_else(|| AppError::not_found("Holiday not found").into_server_fn_error())?;

    tracing::info!(user_id = claims.sub, holiday_id = %row.id, "holiday updated");
    Ok(HolidayResponse::from(row))
}

/// Delete one of the caller's holidays.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn delete_holiday(id: String) -> Result<(), ServerFnError> {
    use crate::repo::holiday;
    use shared_types::AppError;

    let claims = require_auth()?;
    let uuid = parse_holiday_id(&id)?;

    let db = get_db().await.map_err(|e| e.into_server_fn_error())?;
    let deleted = holiday::delete(db, claims.sub, uuid)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    if !deleted {
        return Err(AppError::not_found("Holiday not found").into_server_fn_error());
    }

    tracing::info!(user_id = claims.sub, holiday_id = %uuid, "holiday deleted");
    Ok(())
}
