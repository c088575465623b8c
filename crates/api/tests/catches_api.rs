//! HTTP-level integration tests for catch logging and listings.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_test_user, get, get_auth, post_json, post_json_auth, token_for};
use sqlx::PgPool;

fn catch_body(species: &str, weight_kg: f64) -> serde_json::Value {
    serde_json::json!({
        "species": species,
        "weight_kg": weight_kg,
        "gear_type": "Rod and reel",
        "latitude": -35.1712,
        "longitude": 174.3345,
        "length_cm": 240.0,
        "notes": "Released at the boat",
    })
}

// ---------------------------------------------------------------------------
// Auth enforcement
// ---------------------------------------------------------------------------

/// Writes require a bearer token: missing header is 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_requires_token(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = post_json(app, "/api/v1/catches", catch_body("Striped Marlin", 95.0)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// An invalid or expired token is 403, distinct from a missing one.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_rejects_bad_token(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/catches",
        catch_body("Striped Marlin", 95.0),
        "not-a-real-token",
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = get_auth(app, "/api/v1/catches", "not-a-real-token").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// The private listing also requires a token.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_own_requires_token(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = get(app, "/api/v1/catches").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

/// A valid catch is created with 201 and returned with its id and owner.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_success(pool: PgPool) {
    let (user, _) = create_test_user(&pool, "catcher@example.com", "Catcher").await;
    let token = token_for(&user);
    let app = common::build_test_app(pool).await;

    let response = post_json_auth(
        app,
        "/api/v1/catches",
        catch_body("Striped Marlin", 95.0),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let data = &json["data"];
    assert!(data["id"].as_i64().unwrap() > 0);
    assert_eq!(data["user_id"], user.id);
    assert_eq!(data["species"], "Striped Marlin");
    assert_eq!(data["weight_kg"], 95.0);
}

/// Missing required fields are 400s.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_missing_fields(pool: PgPool) {
    let (user, _) = create_test_user(&pool, "strict@example.com", "Strict").await;
    let token = token_for(&user);
    let app = common::build_test_app(pool).await;

    let mut no_species = catch_body("x", 10.0);
    no_species.as_object_mut().unwrap().remove("species");
    let response = post_json_auth(app.clone(), "/api/v1/catches", no_species, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut no_weight = catch_body("Kingfish", 10.0);
    no_weight.as_object_mut().unwrap().remove("weight_kg");
    let response = post_json_auth(app.clone(), "/api/v1/catches", no_weight, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut no_position = catch_body("Kingfish", 10.0);
    no_position.as_object_mut().unwrap().remove("latitude");
    let response = post_json_auth(app, "/api/v1/catches", no_position, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Weight must be strictly positive.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_rejects_non_positive_weight(pool: PgPool) {
    let (user, _) = create_test_user(&pool, "zero@example.com", "Zero").await;
    let token = token_for(&user);
    let app = common::build_test_app(pool).await;

    let response =
        post_json_auth(app.clone(), "/api/v1/catches", catch_body("Kingfish", 0.0), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response =
        post_json_auth(app, "/api/v1/catches", catch_body("Kingfish", -3.0), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Private listing
// ---------------------------------------------------------------------------

/// Owners see only their own catches, joined with their display name.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_own_is_owner_scoped(pool: PgPool) {
    let (alice, _) = create_test_user(&pool, "alice@example.com", "Alice").await;
    let (bob, _) = create_test_user(&pool, "bob@example.com", "Bob").await;
    let app = common::build_test_app(pool).await;

    for (token, species) in [
        (token_for(&alice), "Striped Marlin"),
        (token_for(&alice), "Kingfish"),
        (token_for(&bob), "Skipjack Tuna"),
    ] {
        let response =
            post_json_auth(app.clone(), "/api/v1/catches", catch_body(species, 20.0), &token).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let json = body_json(get_auth(app.clone(), "/api/v1/catches", &token_for(&alice)).await).await;
    let catches = json["data"].as_array().unwrap();
    assert_eq!(catches.len(), 2);
    assert!(catches.iter().all(|c| c["angler_name"] == "Alice"));

    let json = body_json(get_auth(app, "/api/v1/catches", &token_for(&bob)).await).await;
    let catches = json["data"].as_array().unwrap();
    assert_eq!(catches.len(), 1);
    assert_eq!(catches[0]["species"], "Skipjack Tuna");
}

/// Pagination caps the page size.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_own_pagination(pool: PgPool) {
    let (user, _) = create_test_user(&pool, "pager@example.com", "Pager").await;
    let token = token_for(&user);
    let app = common::build_test_app(pool).await;

    for i in 0..3 {
        let response = post_json_auth(
            app.clone(),
            "/api/v1/catches",
            catch_body("Kingfish", 10.0 + f64::from(i)),
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let json = body_json(get_auth(app.clone(), "/api/v1/catches?limit=2", &token).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let json = body_json(get_auth(app, "/api/v1/catches?limit=2&offset=2", &token).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Public listing
// ---------------------------------------------------------------------------

/// Public listings mask the angler name and reduce coordinate precision
/// to two decimal places.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_public_listing_is_anonymized(pool: PgPool) {
    let (user, _) = create_test_user(&pool, "private@example.com", "Alice").await;
    let token = token_for(&user);
    let app = common::build_test_app(pool).await;

    let response =
        post_json_auth(app.clone(), "/api/v1/catches", catch_body("Kingfish", 14.5), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(get(app, "/api/v1/catches/public").await).await;
    let catches = json["data"].as_array().unwrap();
    assert_eq!(catches.len(), 1);

    let public = &catches[0];
    assert_eq!(public["angler_name"], "A****");
    assert_eq!(public["latitude"], -35.17);
    assert_eq!(public["longitude"], 174.33);

    // Ownership and private fields never leak.
    assert!(public.get("user_id").is_none());
    assert!(public.get("notes").is_none());
    assert!(public.get("id").is_none());
}

/// The public listing honors its species filter and limit.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_public_listing_filters(pool: PgPool) {
    let (user, _) = create_test_user(&pool, "filter@example.com", "Filter").await;
    let token = token_for(&user);
    let app = common::build_test_app(pool).await;

    for species in ["Kingfish", "Kingfish", "Striped Marlin"] {
        let response =
            post_json_auth(app.clone(), "/api/v1/catches", catch_body(species, 12.0), &token).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let json = body_json(get(app.clone(), "/api/v1/catches/public?species=Kingfish").await).await;
    let catches = json["data"].as_array().unwrap();
    assert_eq!(catches.len(), 2);
    assert!(catches.iter().all(|c| c["species"] == "Kingfish"));

    let json = body_json(get(app, "/api/v1/catches/public?limit=1").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}
