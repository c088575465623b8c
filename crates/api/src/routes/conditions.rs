//! Route definitions for the `/conditions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::conditions;
use crate::state::AppState;

/// Routes mounted at `/conditions`.
///
/// ```text
/// GET /current -> current conditions + favorability at a point
/// GET /grid    -> readings covering a bounding box
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/current", get(conditions::current))
        .route("/grid", get(conditions::grid))
}
