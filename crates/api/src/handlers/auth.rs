//! Handlers for the `/auth` resource (register, login).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use pelagic_core::error::CoreError;
use pelagic_core::types::DbId;
use pelagic_db::models::user::CreateUser;
use pelagic_db::repositories::UserRepo;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`. Fields are optional so that
/// missing ones produce a 400 validation error rather than a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful authentication response returned by register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public user info embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub email: String,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create an account and return an access token. Duplicate emails and
/// missing fields are 400s.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    // 1. Validate eagerly, before touching the store.
    let email = require_trimmed(input.email.as_deref(), "email")?;
    let password = input
        .password
        .as_deref()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::Core(CoreError::Validation("password is required".into())))?;
    let name = require_trimmed(input.name.as_deref(), "name")?;

    validate_password_strength(password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    // 2. Reject duplicate emails with a friendly message. The unique
    //    constraint still backstops a concurrent registration.
    if UserRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(AppError::Core(CoreError::Validation(
            "Email already registered".into(),
        )));
    }

    // 3. Hash and create.
    let password_hash = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email,
            password_hash,
            display_name: name,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User registered");

    let response = build_auth_response(&state, user.id, &user.email, &user.display_name)?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Invalid credentials are a 400,
/// deliberately indistinguishable between unknown email and wrong
/// password.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let email = require_trimmed(input.email.as_deref(), "email")?;
    let password = input
        .password
        .as_deref()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::Core(CoreError::Validation("password is required".into())))?;

    let user = UserRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid email or password".into()))?;

    let password_valid = verify_password(password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::BadRequest("Invalid email or password".into()));
    }

    let response = build_auth_response(&state, user.id, &user.email, &user.display_name)?;
    Ok(Json(response))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Require a non-empty trimmed string field.
fn require_trimmed(value: Option<&str>, field: &str) -> AppResult<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(AppError::Core(CoreError::Validation(format!(
            "{field} is required"
        )))),
    }
}

/// Generate an access token and build the response payload.
fn build_auth_response(
    state: &AppState,
    user_id: DbId,
    email: &str,
    name: &str,
) -> AppResult<AuthResponse> {
    let token = generate_access_token(user_id, email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(AuthResponse {
        token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: UserInfo {
            id: user_id,
            email: email.to_string(),
            name: name.to_string(),
        },
    })
}
