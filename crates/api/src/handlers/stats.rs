//! Handlers for the `/stats` resource.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use pelagic_db::models::catch_log::{GearStats, SpeciesStats};
use pelagic_db::repositories::CatchRepo;

use crate::error::AppResult;
use crate::query::TrailingWindowParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Default trailing window in days.
const DEFAULT_WINDOW_DAYS: i64 = 30;

/// Aggregate catch statistics over a trailing window.
#[derive(Debug, Serialize)]
pub struct CatchStats {
    pub window_days: i64,
    pub total_catches: i64,
    pub by_species: Vec<SpeciesStats>,
    pub by_gear: Vec<GearStats>,
}

/// GET /api/v1/stats
///
/// Per-species and per-gear catch aggregates over the trailing window.
pub async fn summary(
    State(state): State<AppState>,
    Query(params): Query<TrailingWindowParams>,
) -> AppResult<impl IntoResponse> {
    let window_days = params.days.unwrap_or(DEFAULT_WINDOW_DAYS).max(1);
    let since = Utc::now() - chrono::Duration::days(window_days);

    let total_catches = CatchRepo::count_since(&state.pool, since).await?;
    let by_species = CatchRepo::species_stats(&state.pool, since).await?;
    let by_gear = CatchRepo::gear_stats(&state.pool, since).await?;

    Ok(Json(DataResponse {
        data: CatchStats {
            window_days,
            total_catches,
            by_species,
            by_gear,
        },
    }))
}
