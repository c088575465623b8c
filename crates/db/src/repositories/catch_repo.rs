//! Repository for the `catch_logs` table.

use sqlx::PgPool;

use pelagic_core::types::{DbId, Timestamp};

use crate::models::catch_log::{
    CatchLog, CatchWithAngler, CreateCatchLog, GearStats, SpeciesStats,
};

/// Column list for `catch_logs` SELECT queries.
const COLUMNS: &str = "\
    id, user_id, species, weight_kg, length_cm, gear_type, \
    latitude, longitude, depth_m, water_temp_c, time_caught, \
    notes, photo_url, created_at";

/// Columns for queries joining the angler's display name.
const JOINED_COLUMNS: &str = "\
    c.id, c.species, c.weight_kg, c.length_cm, c.gear_type, \
    c.latitude, c.longitude, c.depth_m, c.water_temp_c, c.time_caught, \
    c.notes, c.photo_url, u.display_name AS angler_name, c.created_at";

/// Upper bound on page size for catch listings.
const MAX_LIMIT: i64 = 100;
const DEFAULT_LIMIT: i64 = 20;

/// Clamp a requested limit into [1, MAX_LIMIT].
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

/// Clamp a requested offset to be non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// Provides CRUD and aggregate operations for catch logs.
pub struct CatchRepo;

impl CatchRepo {
    /// Insert a new catch log, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCatchLog) -> Result<CatchLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO catch_logs \
                (user_id, species, weight_kg, length_cm, gear_type, \
                 latitude, longitude, depth_m, water_temp_c, time_caught, \
                 notes, photo_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CatchLog>(&query)
            .bind(input.user_id)
            .bind(&input.species)
            .bind(input.weight_kg)
            .bind(input.length_cm)
            .bind(&input.gear_type)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(input.depth_m)
            .bind(input.water_temp_c)
            .bind(input.time_caught)
            .bind(&input.notes)
            .bind(&input.photo_url)
            .fetch_one(pool)
            .await
    }

    /// One user's catch history, most recent first, with their display name.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CatchWithAngler>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} \
             FROM catch_logs c \
             JOIN users u ON u.id = c.user_id \
             WHERE c.user_id = $1 \
             ORDER BY c.time_caught DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, CatchWithAngler>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Recent catches across all users for the public listing, optionally
    /// filtered by species, most recent first. Anonymization is applied by
    /// the caller via [`crate::models::catch_log::PublicCatch`].
    pub async fn list_public_since(
        pool: &PgPool,
        species: Option<&str>,
        since: Timestamp,
        limit: i64,
    ) -> Result<Vec<CatchWithAngler>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} \
             FROM catch_logs c \
             JOIN users u ON u.id = c.user_id \
             WHERE c.time_caught >= $1 \
               AND ($2::text IS NULL OR c.species = $2) \
             ORDER BY c.time_caught DESC \
             LIMIT $3"
        );
        sqlx::query_as::<_, CatchWithAngler>(&query)
            .bind(since)
            .bind(species)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Per-species aggregates over catches since the cutoff.
    pub async fn species_stats(
        pool: &PgPool,
        since: Timestamp,
    ) -> Result<Vec<SpeciesStats>, sqlx::Error> {
        let query = "\
            SELECT species, \
                   COUNT(*) AS catch_count, \
                   AVG(weight_kg) AS avg_weight_kg, \
                   MAX(weight_kg) AS max_weight_kg \
            FROM catch_logs \
            WHERE time_caught >= $1 \
            GROUP BY species \
            ORDER BY catch_count DESC, species";
        sqlx::query_as::<_, SpeciesStats>(query)
            .bind(since)
            .fetch_all(pool)
            .await
    }

    /// Per-gear-type catch counts since the cutoff.
    pub async fn gear_stats(pool: &PgPool, since: Timestamp) -> Result<Vec<GearStats>, sqlx::Error> {
        let query = "\
            SELECT gear_type, COUNT(*) AS catch_count \
            FROM catch_logs \
            WHERE time_caught >= $1 \
            GROUP BY gear_type \
            ORDER BY catch_count DESC, gear_type";
        sqlx::query_as::<_, GearStats>(query)
            .bind(since)
            .fetch_all(pool)
            .await
    }

    /// Total catches since the cutoff.
    pub async fn count_since(pool: &PgPool, since: Timestamp) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM catch_logs WHERE time_caught >= $1")
            .bind(since)
            .fetch_one(pool)
            .await
    }
}
