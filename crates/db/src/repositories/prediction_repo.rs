//! Repository for the `predictions` table.

use sqlx::types::Json;
use sqlx::PgPool;

use pelagic_core::prediction::Prediction;
use pelagic_core::types::Timestamp;

use crate::models::prediction::PredictionRow;

/// Column list for `predictions` SELECT queries.
const COLUMNS: &str = "\
    id, location_name, latitude, longitude, species, probability, \
    conditions, factors, generated_at, created_at";

/// Provides query operations for stored predictions.
pub struct PredictionRepo;

impl PredictionRepo {
    /// Insert one generated batch. Callers invoke this at most once per
    /// generation; a concurrent duplicate batch is tolerated downstream.
    pub async fn insert_batch(
        pool: &PgPool,
        predictions: &[Prediction],
    ) -> Result<(), sqlx::Error> {
        for prediction in predictions {
            sqlx::query(
                "INSERT INTO predictions \
                    (location_name, latitude, longitude, species, probability, \
                     conditions, factors, generated_at) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
            )
            .bind(&prediction.location)
            .bind(prediction.latitude)
            .bind(prediction.longitude)
            .bind(&prediction.species)
            .bind(prediction.probability)
            .bind(Json(&prediction.conditions))
            .bind(Json(&prediction.factors))
            .bind(prediction.generated_at)
            .execute(pool)
            .await?;
        }
        Ok(())
    }

    /// Predictions generated at or after `since`, optionally filtered by
    /// species, ordered by descending probability (insertion order on ties).
    pub async fn list_since(
        pool: &PgPool,
        since: Timestamp,
        species: Option<&str>,
    ) -> Result<Vec<PredictionRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM predictions \
             WHERE generated_at >= $1 \
               AND ($2::text IS NULL OR species = $2) \
             ORDER BY probability DESC, id ASC"
        );
        sqlx::query_as::<_, PredictionRow>(&query)
            .bind(since)
            .bind(species)
            .fetch_all(pool)
            .await
    }
}
