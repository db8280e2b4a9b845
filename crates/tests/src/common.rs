use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware,
    Router,
};
use serde_json::Value;
use sqlx::{Pool, Postgres};
use tokio::sync::Mutex;
use tower::ServiceExt;

/// Global mutex ensuring tests run sequentially against the shared database.
/// Each test acquires this lock before truncating and seeding.
static TEST_MUTEX: std::sync::LazyLock<Mutex<()>> = std::sync::LazyLock::new(|| Mutex::new(()));

pub const ALICE_ID: i64 = 1;
pub const ALICE_EMAIL: &str = "alice@example.com";
pub const BOB_ID: i64 = 2;
pub const BOB_EMAIL: &str = "bob@example.com";
pub const PASSWORD: &str = "beach-house-42";

/// Build a test router backed by a real Postgres pool.
/// Acquires a global lock, truncates all tables, and seeds two users.
/// The returned `MutexGuard` must be held for the duration of the test.
pub async fn test_app() -> (Router, Pool<Postgres>, tokio::sync::MutexGuard<'static, ()>) {
    let guard = TEST_MUTEX.lock().await;

    let _ = dotenvy::dotenv();
    if std::env::var("JWT_SECRET").map(|s| s.is_empty()).unwrap_or(true) {
        std::env::set_var("JWT_SECRET", "integration-test-secret");
    }

    let database_url = std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .expect("TEST_DATABASE_URL or DATABASE_URL must be set for tests");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    sqlx::query("TRUNCATE holidays, users RESTART IDENTITY CASCADE")
        .execute(&pool)
        .await
        .expect("Failed to truncate");

    let hash = server::auth::password::hash_password(PASSWORD).expect("Failed to hash password");
    sqlx::query(
        "INSERT INTO users (id, email, display_name, password_hash) VALUES ($1, $2, 'Alice', $3), ($4, $5, 'Bob', $3)",
    )
    .bind(ALICE_ID)
    .bind(ALICE_EMAIL)
    .bind(&hash)
    .bind(BOB_ID)
    .bind(BOB_EMAIL)
    .execute(&pool)
    .await
    .expect("Failed to seed users");

    let state = server::db::AppState { pool: pool.clone() };
    // Permissive auth middleware so AuthRequired sees Bearer tokens;
    // unauthenticated requests still pass through.
    let router = server::rest::api_router()
        .layer(middleware::from_fn(server::auth::middleware::auth_middleware))
        .with_state(state);

    (router, pool, guard)
}

/// Create a JWT access token for a seeded user.
pub fn token_for(user_id: i64, email: &str) -> String {
    server::auth::jwt::create_access_token(user_id, email).expect("Failed to create test JWT")
}

pub fn alice_token() -> String {
    token_for(ALICE_ID, ALICE_EMAIL)
}

pub fn bob_token() -> String {
    token_for(BOB_ID, BOB_EMAIL)
}

fn builder(method: &str, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder
}

/// POST JSON with an optional Bearer token.
pub async fn post_json(app: &Router, uri: &str, body: &Value, token: Option<&str>) -> (StatusCode, Value) {
    let req = builder("POST", uri, token)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

/// PUT JSON with an optional Bearer token.
pub async fn put_json(app: &Router, uri: &str, body: &Value, token: Option<&str>) -> (StatusCode, Value) {
    let req = builder("PUT", uri, token)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

/// GET with an optional Bearer token.
pub async fn get(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    let req = builder("GET", uri, token).body(Body::empty()).unwrap();
    send(app, req).await
}

/// DELETE with an optional Bearer token.
pub async fn delete(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    let req = builder("DELETE", uri, token).body(Body::empty()).unwrap();
    send(app, req).await
}

/// Send a request through the router and parse the response.
async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&body_bytes).to_string(),
        ))
    };

    (status, body)
}

/// Request body for a holiday.
pub fn holiday_body(name: &str, destination: &str, start: &str, end: &str) -> Value {
    serde_json::json!({
        "name": name,
        "destination": destination,
        "start_date": start,
        "end_date": end,
    })
}

/// Create a holiday as the given user and return its ID.
pub async fn create_test_holiday(
    app: &Router,
    token: &str,
    name: &str,
    destination: &str,
    start: &str,
    end: &str,
) -> String {
    let (status, body) = post_json(
        app,
        "/api/holidays",
        &holiday_body(name, destination, start, end),
        Some(token),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
    body["id"].as_str().expect("holiday id").to_string()
}

/// Names of the holidays in a list response, in order.
pub fn names(list: &Value) -> Vec<String> {
    list.as_array()
        .expect("holiday list")
        .iter()
        .filter_map(|h| h["name"].as_str().map(str::to_string))
        .collect()
}
