//! HTTP-level integration tests for the hotspots endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_test_user, get, post_json_auth, token_for};
use sqlx::PgPool;

/// The five seeded hotspots come back with zeroed annotations on a
/// fresh database.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_seeded_hotspots(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = get(app, "/api/v1/hotspots").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let hotspots = json["data"].as_array().unwrap();
    assert_eq!(hotspots.len(), 5);

    let names: Vec<&str> = hotspots
        .iter()
        .map(|h| h["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Cape Brett"));
    assert!(names.contains(&"Middlesex Bank"));

    for hotspot in hotspots {
        assert!(hotspot["description"].is_string());
        assert!(!hotspot["common_species"].as_array().unwrap().is_empty());
        let months = hotspot["best_months"].as_array().unwrap();
        assert!(months
            .iter()
            .all(|m| (1..=12).contains(&m.as_i64().unwrap())));
        let rate = hotspot["success_rate"].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&rate));
        assert_eq!(hotspot["recent_catch_count"], 0);
        assert!(hotspot["avg_catch_weight_kg"].is_null());
    }
}

/// Seeding twice (two app builds against one database) stays at five rows.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_seeding_is_idempotent(pool: PgPool) {
    let _first = common::build_test_app(pool.clone()).await;
    let app = common::build_test_app(pool).await;

    let json = body_json(get(app, "/api/v1/hotspots").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 5);
}

/// Catches logged inside a hotspot's box show up in its annotation.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_recent_catch_annotation(pool: PgPool) {
    let (user, _) = create_test_user(&pool, "annotator@example.com", "Annie").await;
    let token = token_for(&user);
    let app = common::build_test_app(pool).await;

    // Two catches just off Cape Brett (-35.17, 174.33), inside +-0.05.
    for weight in [10.0, 20.0] {
        let body = serde_json::json!({
            "species": "Kingfish",
            "weight_kg": weight,
            "gear_type": "Jig",
            "latitude": -35.16,
            "longitude": 174.35,
        });
        let response = post_json_auth(app.clone(), "/api/v1/catches", body, &token).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let json = body_json(get(app, "/api/v1/hotspots").await).await;
    let hotspots = json["data"].as_array().unwrap();

    let cape_brett = hotspots
        .iter()
        .find(|h| h["name"] == "Cape Brett")
        .expect("Cape Brett must be seeded");
    assert_eq!(cape_brett["recent_catch_count"], 2);
    assert_eq!(cape_brett["avg_catch_weight_kg"], 15.0);

    // A distant hotspot stays unannotated.
    let middlesex = hotspots
        .iter()
        .find(|h| h["name"] == "Middlesex Bank")
        .expect("Middlesex Bank must be seeded");
    assert_eq!(middlesex["recent_catch_count"], 0);
}
