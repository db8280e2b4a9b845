use shared_types::{AppError, CreateHolidayRequest, Holiday, HolidaySort, UpdateHolidayRequest};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

const COLUMNS: &str =
    "id, user_id, name, destination, start_date, end_date, notes, created_at, updated_at";

/// `ORDER BY` clause for a sort selector. Only these fixed strings ever
/// reach the query text. Text keys compare bytewise under `COLLATE "C"`,
/// the same order `HolidaySort::compare` gives in the browser.
pub fn order_clause(sort: HolidaySort) -> &'static str {
    match sort {
        HolidaySort::Unsorted => "created_at DESC, id DESC",
        HolidaySort::StartDate => r#"start_date ASC, LOWER(name) COLLATE "C" ASC, id ASC"#,
        HolidaySort::Name => r#"LOWER(name) COLLATE "C" ASC, created_at DESC, id ASC"#,
        HolidaySort::Destination => r#"LOWER(destination) COLLATE "C" ASC, start_date ASC, id ASC"#,
    }
}

/// List every holiday owned by `user_id` in the requested order.
pub async fn list_by_user(
    pool: &Pool<Postgres>,
    user_id: i64,
    sort: HolidaySort,
) -> Result<Vec<Holiday>, AppError> {
    let sql = format!(
        "SELECT {COLUMNS} FROM holidays WHERE user_id = $1 ORDER BY {}",
        order_clause(sort)
    );
    sqlx::query_as::<_, Holiday>(&sql)
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// Find a holiday by ID, scoped to its owner.
pub async fn find_by_id(
    pool: &Pool<Postgres>,
    user_id: i64,
    id: Uuid,
) -> Result<Option<Holiday>, AppError> {
    let sql = format!("SELECT {COLUMNS} FROM holidays WHERE id = $1 AND user_id = $2");
    sqlx::query_as::<_, Holiday>(&sql)
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// Insert a new holiday for `user_id`.
pub async fn create(
    pool: &Pool<Postgres>,
    user_id: i64,
    req: CreateHolidayRequest,
) -> Result<Holiday, AppError> {
    let sql = format!(
        r#"
        INSERT INTO holidays (user_id, name, destination, start_date, end_date, notes)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING {COLUMNS}
        "#
    );
    sqlx::query_as::<_, Holiday>(&sql)
        .bind(user_id)
        .bind(&req.name)
        .bind(&req.destination)
        .bind(req.start_date)
        .bind(req.end_date)
        .bind(req.notes.as_deref())
        .fetch_one(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// Replace every editable field of a holiday. Returns `None` when the
/// holiday does not exist or belongs to someone else.
pub async fn update(
    pool: &Pool<Postgres>,
    user_id: i64,
    id: Uuid,
    req: UpdateHolidayRequest,
) -> Result<Option<Holiday>, AppError> {
    let sql = format!(
        r#"
        UPDATE holidays
        SET name = $3, destination = $4, start_date = $5, end_date = $6, notes = $7,
            updated_at = NOW()
        WHERE id = $1 AND user_id = $2
        RETURNING {COLUMNS}
        "#
    );
    sqlx::query_as::<_, Holiday>(&sql)
        .bind(id)
        .bind(user_id)
        .bind(&req.name)
        .bind(&req.destination)
        .bind(req.start_date)
        .bind(req.end_date)
        .bind(req.notes.as_deref())
        .fetch_optional(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// Delete a holiday. Returns true if a row was actually deleted.
pub async fn delete(pool: &Pool<Postgres>, user_id: i64, id: Uuid) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM holidays WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    Ok(result.rows_affected() > 0)
}
