//! Health endpoint integration test.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

/// The health endpoint reports service status and database reachability.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_health(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert!(json["version"].is_string());
}
