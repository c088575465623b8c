//! Route definitions, one module per resource.

use axum::Router;

use crate::state::AppState;

pub mod alerts;
pub mod auth;
pub mod catches;
pub mod conditions;
pub mod health;
pub mod hotspots;
pub mod predictions;
pub mod stats;

/// All API v1 routes, intended to be nested under `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Registration and login.
        .nest("/auth", auth::router())
        // Point and grid environmental conditions.
        .nest("/conditions", conditions::router())
        // Ranked catch predictions with a freshness window.
        .nest("/predictions", predictions::router())
        // Catch logging: private history and the anonymized public feed.
        .nest("/catches", catches::router())
        // Reference hotspots with recent-catch annotations.
        .nest("/hotspots", hotspots::router())
        // Advisory alerts.
        .nest("/alerts", alerts::router())
        // Aggregate catch statistics.
        .nest("/stats", stats::router())
}
