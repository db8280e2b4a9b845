use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use shared_types::AppError;

/// JWT claims stored in the access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
    /// Unique token identifier, so two tokens issued in the same second differ.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

fn jwt_secret() -> Result<String, AppError> {
    std::env::var("JWT_SECRET")
        .ok()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::internal("JWT_SECRET must be set"))
}

const DEFAULT_EXPIRY_MINUTES: i64 = 60;
/// One year.
const MAX_EXPIRY_MINUTES: i64 = 525_600;

pub fn access_token_expiry_minutes() -> i64 {
    parse_expiry_minutes(std::env::var("JWT_ACCESS_TOKEN_EXPIRY_MINUTES").ok().as_deref())
}

/// Out-of-range or unparseable values fall back to the default.
fn parse_expiry_minutes(raw: Option<&str>) -> i64 {
    match raw.map(|v| v.trim().parse::<i64>()) {
        Some(Ok(m)) if (1..=MAX_EXPIRY_MINUTES).contains(&m) => m,
        Some(_) => {
            tracing::warn!(value = ?raw, "ignoring invalid JWT_ACCESS_TOKEN_EXPIRY_MINUTES");
            DEFAULT_EXPIRY_MINUTES
        }
        None => DEFAULT_EXPIRY_MINUTES,
    }
}

pub fn create_access_token(user_id: i64, email: &str) -> Result<String, AppError> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id,
        email: email.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::minutes(access_token_expiry_minutes())).timestamp(),
        jti: Some(uuid::Uuid::new_v4().to_string()),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret()?.as_bytes()),
    )
    .map_err(|e| AppError::internal(e.to_string()))
}

pub fn validate_access_token(token: &str) -> Result<Claims, AppError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret()?.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::unauthorized("Invalid or expired token"))?;
    Ok(token_data.claims)
}
