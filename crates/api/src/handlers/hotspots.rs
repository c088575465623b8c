//! Handlers for the `/hotspots` resource.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use pelagic_db::repositories::HotspotRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Window in days for the recent-catch annotation.
const ANNOTATION_WINDOW_DAYS: i64 = 30;

/// GET /api/v1/hotspots
///
/// The seeded reference hotspots, each annotated with the count and
/// average weight of catches logged nearby over the last 30 days.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let since = Utc::now() - chrono::Duration::days(ANNOTATION_WINDOW_DAYS);
    let hotspots = HotspotRepo::list_annotated(&state.pool, since).await?;

    Ok(Json(DataResponse { data: hotspots }))
}
