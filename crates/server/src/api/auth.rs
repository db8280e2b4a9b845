// Server-only auth helpers for server functions.

use dioxus::prelude::*;
use shared_types::{AppError, AuthUser};

use crate::auth::{cookies, jwt};
use crate::db::get_db;
use crate::error_convert::AppErrorExt;

/// Extract and validate the caller's identity from the current request.
/// Checks middleware-injected Claims first, falls back to cookie parsing.
pub(crate) fn require_auth() -> Result<jwt::Claims, ServerFnError> {
    current_claims().ok_or_else(|| {
        AppError::unauthorized("Authentication required").into_server_fn_error()
    })
}

/// Claims for the current request, if any.
pub(crate) fn current_claims() -> Option<jwt::Claims> {
    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();

    // Primary: Claims already validated by auth middleware
    if let Some(claims) = parts.extensions.get::<jwt::Claims>() {
        return Some(claims.clone());
    }

    // Fallback: the middleware did not run for this request
    let token = cookies::extract_access_token(&parts.headers)?;
    jwt::validate_access_token(&token).ok()
}

/// Fetch the AuthUser for a token subject. `None` when the user no longer exists.
pub(crate) async fn fetch_auth_user(user_id: i64) -> Result<Option<AuthUser>, ServerFnError> {
    let db = get_db().await.map_err(|e| e.into_server_fn_error())?;
    crate::repo::user::find_by_id(db, user_id)
        .await
        .map_err(|e| e.into_server_fn_error())
}
