use shared_types::{AppError, AuthUser};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

/// A user row including the stored password hash.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub display_name: String,
    pub password_hash: String,
}

impl From<UserRecord> for AuthUser {
    fn from(u: UserRecord) -> Self {
        Self {
            id: u.id,
            email: u.email,
            display_name: u.display_name,
        }
    }
}

/// Look up a user by email, case-insensitively.
pub async fn find_by_email(
    pool: &Pool<Postgres>,
    email: &str,
) -> Result<Option<UserRecord>, AppError> {
    sqlx::query_as::<_, UserRecord>(
        "SELECT id, email, display_name, password_hash FROM users WHERE LOWER(email) = LOWER($1)",
    )
    .bind(email.trim())
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Look up a user by ID.
pub async fn find_by_id(pool: &Pool<Postgres>, id: i64) -> Result<Option<AuthUser>, AppError> {
    let row = sqlx::query_as::<_, UserRecord>(
        "SELECT id, email, display_name, password_hash FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row.map(AuthUser::from))
}
