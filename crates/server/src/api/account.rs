use dioxus::prelude::*;
use shared_types::{AuthUser, FeatureFlags};

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use super::auth::*;

/// Login with email and password. Sets the HTTP-only auth cookie on success.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String) -> Result<AuthUser, ServerFnError> {
    use crate::auth::{cookies, jwt, password as pw};
    use crate::repo::user;
    use shared_types::{AppError, LoginRequest};

    let req = LoginRequest {
        email: email.trim().to_string(),
        password,
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await.map_err(|e| e.into_server_fn_error())?;
    let record = user::find_by_email(db, &req.email)
        .await
        .map_err(|e| e.into_server_fn_error())?
        .ok_or_else(|| AppError::unauthorized("Invalid email or password").into_server_fn_error())?;

    let valid = pw::verify_password(&req.password, &record.password_hash)
        .map_err(|e| e.into_server_fn_error())?;
    if !valid {
        tracing::info!(user_id = record.id, "login rejected");
        return Err(AppError::unauthorized("Invalid email or password").into_server_fn_error());
    }

    let access_token =
        jwt::create_access_token(record.id, &record.email).map_err(|e| e.into_server_fn_error())?;

    // Set by the middleware on the way out
    cookies::schedule_auth_cookie(&access_token);

    tracing::info!(user_id = record.id, "user logged in");
    Ok(AuthUser::from(record))
}

/// Get the current authenticated user. Returns None if not authenticated.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    let Some(claims) = current_claims() else {
        return Ok(None);
    };

    let user = fetch_auth_user(claims.sub).await?;
    if user.is_none() {
        // Token outlived its account
        crate::auth::cookies::schedule_clear_cookie();
    }
    Ok(user)
}

/// Logout by clearing the auth cookie.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    if let Some(claims) = current_claims() {
        tracing::info!(user_id = claims.sub, "user logged out");
    }
    crate::auth::cookies::schedule_clear_cookie();
    Ok(())
}

/// Feature flags from `config.toml`, so the UI can hide disabled surfaces.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}
