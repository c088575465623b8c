//! Route definitions for the `/predictions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::predictions;
use crate::state::AppState;

/// Routes mounted at `/predictions`.
///
/// ```text
/// GET / -> ordered predictions (generates a batch when stale)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(predictions::list))
}
