//! Handlers for the `/predictions` resource.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{SubsecRound, Timelike, Utc};
use serde::Deserialize;

use pelagic_core::prediction::{self, Prediction, GROUNDS, TARGET_SPECIES};
use pelagic_db::repositories::PredictionRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::sampling;
use crate::state::AppState;

/// Default freshness window in hours when `hours` is omitted.
const DEFAULT_WINDOW_HOURS: i64 = 6;

/// Query parameters for `GET /predictions`.
#[derive(Debug, Deserialize)]
pub struct PredictionParams {
    /// `all` (default) or a species name.
    pub species: Option<String>,
    /// Freshness window in hours.
    pub hours: Option<i64>,
}

/// GET /api/v1/predictions
///
/// Predictions generated within the freshness window, ordered by
/// descending probability. When none match, a fresh batch is generated
/// across all grounds and species, persisted, and filtered for the
/// response. A concurrent generation may insert a duplicate batch; the
/// next windowed read simply sees more rows.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PredictionParams>,
) -> AppResult<impl IntoResponse> {
    let window_hours = params.hours.unwrap_or(DEFAULT_WINDOW_HOURS).max(1);
    let since = Utc::now() - chrono::Duration::hours(window_hours);

    let species_filter = params
        .species
        .as_deref()
        .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("all"));

    let stored = PredictionRepo::list_since(&state.pool, since, species_filter).await?;
    if !stored.is_empty() {
        let predictions: Vec<Prediction> =
            stored.into_iter().map(|row| row.into_prediction()).collect();
        return Ok(Json(DataResponse { data: predictions }));
    }

    let batch = generate_batch(&state).await?;
    PredictionRepo::insert_batch(&state.pool, &batch).await?;
    tracing::info!(count = batch.len(), "Generated prediction batch");

    let predictions: Vec<Prediction> = match species_filter {
        Some(species) => batch
            .into_iter()
            .filter(|p| p.species == species)
            .collect(),
        None => batch,
    };

    Ok(Json(DataResponse { data: predictions }))
}

/// Generate one ranked batch across every ground/species pair.
async fn generate_batch(state: &AppState) -> AppResult<Vec<Prediction>> {
    // Truncate to microseconds so the stamp survives the round-trip
    // through the timestamptz column unchanged.
    let generated_at = Utc::now().trunc_subsecs(6);
    let hour = generated_at.hour();

    let mut batch = Vec::with_capacity(GROUNDS.len() * TARGET_SPECIES.len());
    for ground in &GROUNDS {
        let reading = sampling::sample_at(&state.pool, ground.latitude, ground.longitude).await?;
        for species in TARGET_SPECIES {
            batch.push(prediction::build_prediction(
                ground,
                species,
                reading.clone(),
                hour,
                generated_at,
            ));
        }
    }

    prediction::rank(&mut batch);
    Ok(batch)
}
