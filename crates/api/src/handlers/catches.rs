//! Handlers for the `/catches` resource.
//!
//! Catch logs are immutable: there is no update or delete path. Private
//! listings are owner-only; the public listing is anonymized (coordinates
//! reduced to 0.01 degrees, angler names masked).

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use pelagic_core::error::CoreError;
use pelagic_core::types::Timestamp;
use pelagic_db::models::catch_log::{CreateCatchLog, PublicCatch};
use pelagic_db::repositories::catch_repo::{clamp_limit, clamp_offset};
use pelagic_db::repositories::CatchRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Default trailing window in days for the public listing.
const DEFAULT_PUBLIC_WINDOW_DAYS: i64 = 30;

/// Default and maximum row counts for the public listing.
const DEFAULT_PUBLIC_LIMIT: i64 = 50;
const MAX_PUBLIC_LIMIT: i64 = 200;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /catches`. Required fields are optional here so
/// that missing ones produce a 400 validation error, not a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateCatchRequest {
    pub species: Option<String>,
    pub weight_kg: Option<f64>,
    pub length_cm: Option<f64>,
    pub gear_type: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub depth_m: Option<f64>,
    pub water_temp_c: Option<f64>,
    pub time_caught: Option<Timestamp>,
    pub notes: Option<String>,
    pub photo_url: Option<String>,
}

/// Query parameters for `GET /catches/public`.
#[derive(Debug, Deserialize)]
pub struct PublicCatchParams {
    pub species: Option<String>,
    pub days: Option<i64>,
    pub limit: Option<i64>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/catches
///
/// Log a catch for the authenticated user. Species, weight, gear type,
/// and position are required; weight must be positive.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateCatchRequest>,
) -> AppResult<impl IntoResponse> {
    let species = require_field(input.species.as_deref(), "species")?;
    let gear_type = require_field(input.gear_type.as_deref(), "gear_type")?;

    let weight_kg = input
        .weight_kg
        .ok_or_else(|| validation("weight_kg is required"))?;
    if !(weight_kg > 0.0) {
        return Err(validation("weight_kg must be positive"));
    }

    let latitude = input
        .latitude
        .ok_or_else(|| validation("latitude is required"))?;
    let longitude = input
        .longitude
        .ok_or_else(|| validation("longitude is required"))?;

    let catch = CatchRepo::create(
        &state.pool,
        &CreateCatchLog {
            user_id: auth.user_id,
            species,
            weight_kg,
            length_cm: input.length_cm,
            gear_type,
            latitude,
            longitude,
            depth_m: input.depth_m,
            water_temp_c: input.water_temp_c,
            time_caught: input.time_caught.unwrap_or_else(Utc::now),
            notes: input.notes,
            photo_url: input.photo_url,
        },
    )
    .await?;

    tracing::info!(
        catch_id = catch.id,
        user_id = auth.user_id,
        species = %catch.species,
        "Catch logged"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: catch })))
}

/// GET /api/v1/catches
///
/// The authenticated user's catch history, newest first, paginated.
pub async fn list_own(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let catches = CatchRepo::list_for_user(
        &state.pool,
        auth.user_id,
        clamp_limit(params.limit),
        clamp_offset(params.offset),
    )
    .await?;

    Ok(Json(DataResponse { data: catches }))
}

/// GET /api/v1/catches/public
///
/// Recent catches across all users, anonymized.
pub async fn list_public(
    State(state): State<AppState>,
    Query(params): Query<PublicCatchParams>,
) -> AppResult<impl IntoResponse> {
    let days = params.days.unwrap_or(DEFAULT_PUBLIC_WINDOW_DAYS).max(1);
    let since = Utc::now() - chrono::Duration::days(days);
    let limit = params
        .limit
        .unwrap_or(DEFAULT_PUBLIC_LIMIT)
        .clamp(1, MAX_PUBLIC_LIMIT);

    let species = params.species.as_deref().filter(|s| !s.is_empty());

    let rows = CatchRepo::list_public_since(&state.pool, species, since, limit).await?;
    let catches: Vec<PublicCatch> = rows.into_iter().map(PublicCatch::from).collect();

    Ok(Json(DataResponse { data: catches }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn validation(msg: &str) -> AppError {
    AppError::Core(CoreError::Validation(msg.into()))
}

/// Require a non-empty trimmed string field.
fn require_field(value: Option<&str>, field: &str) -> AppResult<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(validation(&format!("{field} is required"))),
    }
}
