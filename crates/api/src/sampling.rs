//! Store-aware environmental sampling.
//!
//! Composes the environmental repository with the core simulation:
//! stored readings win when fresh enough, simulation fills the gaps.
//! Nothing sampled here is persisted; only the background refresher
//! appends rows.

use chrono::Utc;
use sqlx::PgPool;

use pelagic_core::conditions::{simulate_reading, EnvironmentalReading};
use pelagic_core::geo::{grid_points, BoundingBox, GRID_RESOLUTION_DEG};
use pelagic_db::repositories::EnvironmentalRepo;

/// Half-width in degrees of the box searched for a stored reading near a point.
const NEARBY_RADIUS_DEG: f64 = 0.1;

/// Stored readings older than this are ignored for grid sampling.
const GRID_FRESHNESS_HOURS: i64 = 6;

/// Sample conditions at a point: the freshest stored reading within
/// [`NEARBY_RADIUS_DEG`], or a simulated reading when none exists.
pub async fn sample_at(
    pool: &PgPool,
    latitude: f64,
    longitude: f64,
) -> Result<EnvironmentalReading, sqlx::Error> {
    match EnvironmentalRepo::latest_near(pool, latitude, longitude, NEARBY_RADIUS_DEG).await? {
        Some(row) => Ok(row.into_reading()),
        None => Ok(simulate_reading(
            latitude,
            longitude,
            Utc::now(),
            &mut rand::rng(),
        )),
    }
}

/// Sample conditions over a bounding box.
///
/// Returns stored readings from the last [`GRID_FRESHNESS_HOURS`] when
/// any exist in the box; otherwise one simulated reading per grid cell
/// at [`GRID_RESOLUTION_DEG`] resolution, row-major.
pub async fn sample_grid(
    pool: &PgPool,
    bbox: &BoundingBox,
) -> Result<Vec<EnvironmentalReading>, sqlx::Error> {
    let since = Utc::now() - chrono::Duration::hours(GRID_FRESHNESS_HOURS);
    let stored = EnvironmentalRepo::in_box_since(pool, bbox, since).await?;

    if !stored.is_empty() {
        return Ok(stored.into_iter().map(|row| row.into_reading()).collect());
    }

    let now = Utc::now();
    let mut rng = rand::rng();
    Ok(grid_points(bbox, GRID_RESOLUTION_DEG)
        .into_iter()
        .map(|(lat, lng)| simulate_reading(lat, lng, now, &mut rng))
        .collect())
}
