//! Stored prediction rows.

use sqlx::types::Json;
use sqlx::FromRow;

use pelagic_core::conditions::EnvironmentalReading;
use pelagic_core::favorability::FavorabilityFactors;
use pelagic_core::prediction::Prediction;
use pelagic_core::types::{DbId, Timestamp};

/// Full row from the `predictions` table. Conditions and factor labels
/// are stored as JSONB mirrors of the core types.
#[derive(Debug, Clone, FromRow)]
pub struct PredictionRow {
    pub id: DbId,
    pub location_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub species: String,
    pub probability: i32,
    pub conditions: Json<EnvironmentalReading>,
    pub factors: Json<FavorabilityFactors>,
    pub generated_at: Timestamp,
    pub created_at: Timestamp,
}

impl PredictionRow {
    /// Project the row onto the domain prediction type, dropping row identity.
    pub fn into_prediction(self) -> Prediction {
        Prediction {
            location: self.location_name,
            latitude: self.latitude,
            longitude: self.longitude,
            species: self.species,
            probability: self.probability,
            conditions: self.conditions.0,
            factors: self.factors.0,
            generated_at: self.generated_at,
        }
    }
}
