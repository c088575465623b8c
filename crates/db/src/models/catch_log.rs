//! Catch log entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use pelagic_core::anonymize::mask_angler_name;
use pelagic_core::geo::round_coord;
use pelagic_core::types::{DbId, Timestamp};

/// Full row from the `catch_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CatchLog {
    pub id: DbId,
    pub user_id: DbId,
    pub species: String,
    pub weight_kg: f64,
    pub length_cm: Option<f64>,
    pub gear_type: String,
    pub latitude: f64,
    pub longitude: f64,
    pub depth_m: Option<f64>,
    pub water_temp_c: Option<f64>,
    pub time_caught: Timestamp,
    pub notes: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for inserting a new catch log.
#[derive(Debug)]
pub struct CreateCatchLog {
    pub user_id: DbId,
    pub species: String,
    pub weight_kg: f64,
    pub length_cm: Option<f64>,
    pub gear_type: String,
    pub latitude: f64,
    pub longitude: f64,
    pub depth_m: Option<f64>,
    pub water_temp_c: Option<f64>,
    pub time_caught: Timestamp,
    pub notes: Option<String>,
    pub photo_url: Option<String>,
}

/// A catch row joined with the angler's display name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CatchWithAngler {
    pub id: DbId,
    pub species: String,
    pub weight_kg: f64,
    pub length_cm: Option<f64>,
    pub gear_type: String,
    pub latitude: f64,
    pub longitude: f64,
    pub depth_m: Option<f64>,
    pub water_temp_c: Option<f64>,
    pub time_caught: Timestamp,
    pub notes: Option<String>,
    pub photo_url: Option<String>,
    pub angler_name: String,
    pub created_at: Timestamp,
}

/// Anonymized catch for public listings: coordinates reduced to 0.01
/// degrees, angler name masked, and private fields dropped.
#[derive(Debug, Clone, Serialize)]
pub struct PublicCatch {
    pub species: String,
    pub weight_kg: f64,
    pub length_cm: Option<f64>,
    pub gear_type: String,
    pub latitude: f64,
    pub longitude: f64,
    pub angler_name: String,
    pub time_caught: Timestamp,
}

impl From<CatchWithAngler> for PublicCatch {
    fn from(row: CatchWithAngler) -> Self {
        Self {
            species: row.species,
            weight_kg: row.weight_kg,
            length_cm: row.length_cm,
            gear_type: row.gear_type,
            latitude: round_coord(row.latitude),
            longitude: round_coord(row.longitude),
            angler_name: mask_angler_name(&row.angler_name),
            time_caught: row.time_caught,
        }
    }
}

/// Aggregate row for per-species statistics over a trailing window.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SpeciesStats {
    pub species: String,
    pub catch_count: i64,
    pub avg_weight_kg: Option<f64>,
    pub max_weight_kg: Option<f64>,
}

/// Aggregate row for per-gear statistics over a trailing window.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GearStats {
    pub gear_type: String,
    pub catch_count: i64,
}
