//! Per-location, per-species catch predictions.
//!
//! A prediction is a favorability score adjusted for the target species
//! and expressed as a probability. The generator crosses a fixed set of
//! named grounds with a fixed set of target species; ranking is by
//! descending probability with stable ties.

use serde::{Deserialize, Serialize};

use crate::conditions::EnvironmentalReading;
use crate::favorability::{self, FavorabilityFactors};
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Fixed grounds and species
// ---------------------------------------------------------------------------

/// A named fishing ground predictions are generated for.
#[derive(Debug, Clone, Copy)]
pub struct FishingGround {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

/// The grounds every generation batch covers.
pub const GROUNDS: [FishingGround; 5] = [
    FishingGround {
        name: "North Cape Bank",
        latitude: -34.30,
        longitude: 173.60,
    },
    FishingGround {
        name: "Cape Brett",
        latitude: -35.17,
        longitude: 174.33,
    },
    FishingGround {
        name: "Poor Knights Islands",
        latitude: -35.47,
        longitude: 174.74,
    },
    FishingGround {
        name: "Middlesex Bank",
        latitude: -34.04,
        longitude: 171.73,
    },
    FishingGround {
        name: "Garden Patch",
        latitude: -34.85,
        longitude: 173.95,
    },
];

/// Target species crossed with every ground.
pub const TARGET_SPECIES: [&str; 6] = [
    "Blue Marlin",
    "Striped Marlin",
    "Black Marlin",
    "Yellowfin Tuna",
    "Bigeye Tuna",
    "Skipjack Tuna",
];

/// Default coordinates when a conditions request omits them (Cape Brett).
pub const DEFAULT_LATITUDE: f64 = -35.17;
pub const DEFAULT_LONGITUDE: f64 = 174.33;

// ---------------------------------------------------------------------------
// Species adjustments
// ---------------------------------------------------------------------------

/// Marlin feed up in warm water: bonus above this sea temperature.
const MARLIN_TEMP_THRESHOLD_C: f64 = 22.0;
const MARLIN_BONUS: i32 = 10;

/// Tuna work the stronger current lines: bonus above this speed.
const TUNA_CURRENT_THRESHOLD_MS: f64 = 0.8;
const TUNA_BONUS: i32 = 8;

/// Additive probability adjustment for a species under the given conditions.
pub fn species_adjustment(species: &str, reading: &EnvironmentalReading) -> i32 {
    let mut bonus = 0;
    if species.contains("Marlin") && reading.sea_temperature_c > MARLIN_TEMP_THRESHOLD_C {
        bonus += MARLIN_BONUS;
    }
    if species.contains("Tuna") && reading.current_speed_ms > TUNA_CURRENT_THRESHOLD_MS {
        bonus += TUNA_BONUS;
    }
    bonus
}

// ---------------------------------------------------------------------------
// Prediction
// ---------------------------------------------------------------------------

/// A catch-probability prediction for one ground and species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub species: String,
    /// Catch probability in [0, 100].
    pub probability: i32,
    pub conditions: EnvironmentalReading,
    pub factors: FavorabilityFactors,
    pub generated_at: Timestamp,
}

/// Build a prediction for one ground/species pair from sampled conditions.
pub fn build_prediction(
    ground: &FishingGround,
    species: &str,
    reading: EnvironmentalReading,
    hour: u32,
    generated_at: Timestamp,
) -> Prediction {
    let scored = favorability::score_at_hour(&reading, hour);
    let probability = (scored.score + species_adjustment(species, &reading)).clamp(0, 100);

    Prediction {
        location: ground.name.to_string(),
        latitude: ground.latitude,
        longitude: ground.longitude,
        species: species.to_string(),
        probability,
        conditions: reading,
        factors: scored.factors,
        generated_at,
    }
}

/// Sort predictions by descending probability. The sort is stable, so
/// ties keep the ground/species enumeration order.
pub fn rank(predictions: &mut [Prediction]) {
    predictions.sort_by(|a, b| b.probability.cmp(&a.probability));
}
