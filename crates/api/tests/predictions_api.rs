//! HTTP-level integration tests for the predictions endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

/// Five grounds crossed with six species.
const BATCH_SIZE: usize = 30;

/// A cold request generates a full batch, ordered by descending
/// probability with every probability in range.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_generates_ranked_batch(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = get(app, "/api/v1/predictions").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let predictions = json["data"].as_array().unwrap();
    assert_eq!(predictions.len(), BATCH_SIZE);

    let probabilities: Vec<i64> = predictions
        .iter()
        .map(|p| p["probability"].as_i64().unwrap())
        .collect();
    assert!(
        probabilities.windows(2).all(|w| w[0] >= w[1]),
        "probabilities must be non-increasing"
    );
    assert!(probabilities.iter().all(|p| (0..=100).contains(p)));

    for prediction in predictions {
        assert!(prediction["location"].is_string());
        assert!(prediction["species"].is_string());
        assert!(prediction["conditions"]["sea_temperature_c"].is_number());
        assert!(prediction["factors"]["sea_temperature"].is_string());
    }
}

/// A second request inside the freshness window returns the stored batch
/// unchanged instead of regenerating.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_window_reuse_is_idempotent(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let first = body_json(get(app.clone(), "/api/v1/predictions").await).await;
    let second = body_json(get(app, "/api/v1/predictions").await).await;

    assert_eq!(second["data"].as_array().unwrap().len(), BATCH_SIZE);
    assert_eq!(first["data"], second["data"]);
}

/// Species filtering narrows both the stored and the generated path.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_species_filter(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    // Cold request with a filter: generation still covers everything but
    // only the requested species is returned.
    let json = body_json(get(app.clone(), "/api/v1/predictions?species=Blue%20Marlin").await).await;
    let predictions = json["data"].as_array().unwrap();
    assert_eq!(predictions.len(), 5, "one per ground");
    assert!(predictions.iter().all(|p| p["species"] == "Blue Marlin"));

    // The full batch was persisted, so an unfiltered read inside the
    // window sees all of it.
    let json = body_json(get(app, "/api/v1/predictions?species=all").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), BATCH_SIZE);
}

/// An unknown species yields an empty, valid response.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_species_is_empty(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let json = body_json(get(app, "/api/v1/predictions?species=Kraken").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}
