//! Handlers for the `/conditions` resource.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use pelagic_core::conditions::EnvironmentalReading;
use pelagic_core::favorability::{self, FavorabilityResult};
use pelagic_core::geo::BoundingBox;
use pelagic_core::prediction::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::sampling;
use crate::state::AppState;

/// Query parameters for `GET /conditions/current`.
#[derive(Debug, Deserialize)]
pub struct CurrentConditionsParams {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Query parameters for `GET /conditions/grid`.
#[derive(Debug, Deserialize)]
pub struct GridParams {
    pub bounds: Option<String>,
}

/// Current conditions at a point plus their favorability.
#[derive(Debug, Serialize)]
pub struct CurrentConditions {
    pub conditions: EnvironmentalReading,
    pub favorability: FavorabilityResult,
}

/// GET /api/v1/conditions/current
///
/// Conditions at a point (stored if fresh, simulated otherwise) scored
/// for favorability. Defaults to the Cape Brett grounds when
/// coordinates are omitted.
pub async fn current(
    State(state): State<AppState>,
    Query(params): Query<CurrentConditionsParams>,
) -> AppResult<impl IntoResponse> {
    let latitude = params.lat.unwrap_or(DEFAULT_LATITUDE);
    let longitude = params.lng.unwrap_or(DEFAULT_LONGITUDE);

    let conditions = sampling::sample_at(&state.pool, latitude, longitude).await?;
    let favorability = favorability::score_now(&conditions);

    Ok(Json(DataResponse {
        data: CurrentConditions {
            conditions,
            favorability,
        },
    }))
}

/// GET /api/v1/conditions/grid
///
/// Readings covering a normalized bounding box: stored readings from the
/// last six hours when present, otherwise one simulated reading per grid
/// cell.
pub async fn grid(
    State(state): State<AppState>,
    Query(params): Query<GridParams>,
) -> AppResult<impl IntoResponse> {
    let bounds = params.bounds.as_deref().unwrap_or_default();
    let bbox = BoundingBox::parse(bounds).map_err(crate::error::AppError::Core)?;

    let readings = sampling::sample_grid(&state.pool, &bbox).await?;

    Ok(Json(DataResponse { data: readings }))
}
