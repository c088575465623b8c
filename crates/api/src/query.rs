//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Used by any handler that supports paginated listing. Values are
/// clamped in the repository layer via `clamp_limit` / `clamp_offset`.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Trailing-window parameter (`?days=`) for aggregate endpoints.
#[derive(Debug, Deserialize)]
pub struct TrailingWindowParams {
    pub days: Option<i64>,
}
