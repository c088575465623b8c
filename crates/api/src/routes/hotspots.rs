//! Route definitions for the `/hotspots` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::hotspots;
use crate::state::AppState;

/// Routes mounted at `/hotspots`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(hotspots::list))
}
