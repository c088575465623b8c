//! Repository for the `environmental_data` table (append-only time-series).

use sqlx::PgPool;

use pelagic_core::conditions::EnvironmentalReading;
use pelagic_core::geo::BoundingBox;
use pelagic_core::types::Timestamp;

use crate::models::environmental::EnvironmentalData;

/// Column list for `environmental_data` SELECT queries.
const COLUMNS: &str = "\
    id, latitude, longitude, \
    sea_temperature_c, current_speed_ms, current_direction_deg, \
    chlorophyll_mg_m3, wind_speed_kt, wind_direction_deg, wave_height_m, \
    recorded_at, created_at";

/// Provides query operations for environmental readings.
pub struct EnvironmentalRepo;

impl EnvironmentalRepo {
    /// Append a reading.
    pub async fn insert(
        pool: &PgPool,
        reading: &EnvironmentalReading,
    ) -> Result<EnvironmentalData, sqlx::Error> {
        let query = format!(
            "INSERT INTO environmental_data \
                (latitude, longitude, sea_temperature_c, current_speed_ms, \
                 current_direction_deg, chlorophyll_mg_m3, wind_speed_kt, \
                 wind_direction_deg, wave_height_m, recorded_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EnvironmentalData>(&query)
            .bind(reading.latitude)
            .bind(reading.longitude)
            .bind(reading.sea_temperature_c)
            .bind(reading.current_speed_ms)
            .bind(reading.current_direction_deg)
            .bind(reading.chlorophyll_mg_m3)
            .bind(reading.wind_speed_kt)
            .bind(reading.wind_direction_deg)
            .bind(reading.wave_height_m)
            .bind(reading.recorded_at)
            .fetch_one(pool)
            .await
    }

    /// The freshest reading within `radius_deg` degrees of a point, if any.
    pub async fn latest_near(
        pool: &PgPool,
        latitude: f64,
        longitude: f64,
        radius_deg: f64,
    ) -> Result<Option<EnvironmentalData>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM environmental_data \
             WHERE latitude BETWEEN $1 AND $2 \
               AND longitude BETWEEN $3 AND $4 \
             ORDER BY recorded_at DESC \
             LIMIT 1"
        );
        sqlx::query_as::<_, EnvironmentalData>(&query)
            .bind(latitude - radius_deg)
            .bind(latitude + radius_deg)
            .bind(longitude - radius_deg)
            .bind(longitude + radius_deg)
            .fetch_optional(pool)
            .await
    }

    /// All readings inside a bounding box recorded at or after `since`,
    /// freshest first.
    pub async fn in_box_since(
        pool: &PgPool,
        bbox: &BoundingBox,
        since: Timestamp,
    ) -> Result<Vec<EnvironmentalData>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM environmental_data \
             WHERE latitude BETWEEN $1 AND $2 \
               AND longitude BETWEEN $3 AND $4 \
               AND recorded_at >= $5 \
             ORDER BY recorded_at DESC"
        );
        sqlx::query_as::<_, EnvironmentalData>(&query)
            .bind(bbox.lat_min)
            .bind(bbox.lat_max)
            .bind(bbox.lng_min)
            .bind(bbox.lng_max)
            .bind(since)
            .fetch_all(pool)
            .await
    }
}
