//! Route definitions for the `/catches` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::catches;
use crate::state::AppState;

/// Routes mounted at `/catches`.
///
/// ```text
/// POST /        -> create (requires auth)
/// GET  /        -> own history (requires auth)
/// GET  /public  -> anonymized recent catches
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(catches::list_own).post(catches::create))
        .route("/public", get(catches::list_public))
}
