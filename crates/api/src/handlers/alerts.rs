//! Handlers for the `/alerts` resource.

use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use pelagic_core::alert;

use crate::error::AppResult;
use crate::response::DataResponse;

/// GET /api/v1/alerts
///
/// Current advisory alerts. These are simulated advisory content rolled
/// per request; an empty list is a normal outcome.
pub async fn list() -> AppResult<impl IntoResponse> {
    let advisories = alert::generate(Utc::now(), &mut rand::rng());

    Ok(Json(DataResponse { data: advisories }))
}
