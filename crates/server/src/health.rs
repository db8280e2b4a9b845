use axum::extract::State;
use axum::Json;
use serde::Serialize;
use sqlx::{Pool, Postgres};
use std::sync::OnceLock;
use std::time::Instant;

static STARTED_AT: OnceLock<Instant> = OnceLock::new();

/// Remember when the server came up. Later calls keep the first instant.
pub fn record_start_time() {
    STARTED_AT.get_or_init(Instant::now);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Ok,
    Degraded,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    /// `"connected"` or the database error text.
    pub db: String,
    pub uptime_seconds: u64,
    pub version: String,
}

impl HealthResponse {
    fn from_db_check(db_check: Result<(), sqlx::Error>, uptime_seconds: u64) -> Self {
        let (status, db) = match db_check {
            Ok(()) => (ServiceStatus::Ok, "connected".to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "database unreachable from health check");
                (ServiceStatus::Degraded, format!("error: {e}"))
            }
        };
        Self {
            status,
            db,
            uptime_seconds,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Liveness probe. Always answers 200; a lost database shows up as
/// `degraded` rather than as an error status.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service status", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(pool): State<Pool<Postgres>>) -> Json<HealthResponse> {
    let db_check = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&pool)
        .await
        .map(|_| ());
    let uptime = STARTED_AT.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);

    Json(HealthResponse::from_db_check(db_check, uptime))
}
