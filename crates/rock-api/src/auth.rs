use std::sync::Arc;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::{SaltString, rand_core::OsRng}};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use jsonwebtoken::{EncodingKey, Header, encode};
use tracing::{error, info};

use rock_db::Database;
use rock_db::models::UserRow;
use rock_types::api::{Claims, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub jwt_secret: String,
}

const TOKEN_LIFETIME_DAYS: i64 = 30;
const USERNAME_LEN: std::ops::RangeInclusive<usize> = 3..=32;
const MIN_PASSWORD_LEN: usize = 8;

/// POST /register: create an account and return a token for it.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, StatusCode> {
    if !USERNAME_LEN.contains(&req.username.len()) || req.password.len() < MIN_PASSWORD_LEN {
        return Err(StatusCode::BAD_REQUEST);
    }

    let db = state.clone();
    let username = req.username.clone();
    // Argon2 and SQLite both block; the UNIQUE constraint settles duplicate names
    let user_id = tokio::task::spawn_blocking(move || -> Result<i64, StatusCode> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(req.password.as_bytes(), &salt)
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
            .to_string();

        db.db
            .create_user(&req.username, &password_hash, &req.first_name, &req.last_name)
            .map_err(|e| {
                error!("Failed to create user '{}': {:#}", req.username, e);
                StatusCode::INTERNAL_SERVER_ERROR
            })?
            .ok_or(StatusCode::CONFLICT)
    })
    .await
    .map_err(|e| { error!("spawn_blocking join error: {}", e); StatusCode::INTERNAL_SERVER_ERROR })??;

    let token = create_token(&state.jwt_secret, user_id, &username)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    info!("Registered user {} ({})", username, user_id);
    Ok((StatusCode::CREATED, Json(RegisterResponse { user_id, token })))
}

/// POST /login: exchange a username and password for a token.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, StatusCode> {
    let db = state.clone();
    let user = tokio::task::spawn_blocking(move || -> Result<UserRow, StatusCode> {
        let user = db
            .db
            .get_user_by_username(&req.username)
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        let parsed_hash =
            PasswordHash::new(&user.password).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
        Argon2::default()
            .verify_password(req.password.as_bytes(), &parsed_hash)
            .map_err(|_| StatusCode::UNAUTHORIZED)?;

        Ok(user)
    })
    .await
    .map_err(|e| { error!("spawn_blocking join error: {}", e); StatusCode::INTERNAL_SERVER_ERROR })??;

    let token = create_token(&state.jwt_secret, user.id, &user.username)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(LoginResponse {
        user_id: user.id,
        username: user.username,
        token,
    }))
}

/// Sign an HS256 token for `user_id`, valid for thirty days.
pub fn create_token(secret: &str, user_id: i64, username: &str) -> anyhow::Result<String> {
    let claims = Claims {
        sub: user_id,
        username: username.to_string(),
        exp: (chrono::Utc::now() + chrono::Duration::days(TOKEN_LIFETIME_DAYS)).timestamp() as usize,
    };

    Ok(encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))?)
}
