//! Environmental condition readings and their simulation.
//!
//! When no stored reading is available for a point, conditions are
//! synthesized by drawing each field uniformly within a fixed realistic
//! range for the region. Simulated readings are ephemeral; persisting
//! them is the caller's decision (only the background refresher does).

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Simulation ranges
// ---------------------------------------------------------------------------

/// Sea surface temperature range in degrees Celsius.
pub const SEA_TEMP_MIN_C: f64 = 18.0;
pub const SEA_TEMP_MAX_C: f64 = 26.0;

/// Current speed range in metres per second.
pub const CURRENT_SPEED_MIN_MS: f64 = 0.0;
pub const CURRENT_SPEED_MAX_MS: f64 = 1.5;

/// Chlorophyll-a concentration range in mg/m3.
pub const CHLOROPHYLL_MIN_MG_M3: f64 = 0.0;
pub const CHLOROPHYLL_MAX_MG_M3: f64 = 0.6;

/// Wind speed range in knots.
pub const WIND_SPEED_MIN_KT: f64 = 5.0;
pub const WIND_SPEED_MAX_KT: f64 = 25.0;

/// Significant wave height range in metres.
pub const WAVE_HEIGHT_MIN_M: f64 = 0.5;
pub const WAVE_HEIGHT_MAX_M: f64 = 3.0;

/// Compass bearings are half-open: [0, 360).
pub const DIRECTION_MIN_DEG: f64 = 0.0;
pub const DIRECTION_MAX_DEG: f64 = 360.0;

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// A single environmental reading at a point in space and time.
///
/// Immutable once created. May originate from the store or from
/// simulation; the two are indistinguishable to consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalReading {
    pub latitude: f64,
    pub longitude: f64,
    pub recorded_at: Timestamp,
    pub sea_temperature_c: f64,
    pub current_speed_ms: f64,
    pub current_direction_deg: f64,
    pub chlorophyll_mg_m3: f64,
    pub wind_speed_kt: f64,
    pub wind_direction_deg: f64,
    pub wave_height_m: f64,
}

/// Synthesize a reading for a point by drawing each field uniformly
/// within its fixed range.
pub fn simulate_reading(
    latitude: f64,
    longitude: f64,
    at: Timestamp,
    rng: &mut impl Rng,
) -> EnvironmentalReading {
    EnvironmentalReading {
        latitude,
        longitude,
        recorded_at: at,
        sea_temperature_c: rng.random_range(SEA_TEMP_MIN_C..=SEA_TEMP_MAX_C),
        current_speed_ms: rng.random_range(CURRENT_SPEED_MIN_MS..=CURRENT_SPEED_MAX_MS),
        current_direction_deg: rng.random_range(DIRECTION_MIN_DEG..DIRECTION_MAX_DEG),
        chlorophyll_mg_m3: rng.random_range(CHLOROPHYLL_MIN_MG_M3..=CHLOROPHYLL_MAX_MG_M3),
        wind_speed_kt: rng.random_range(WIND_SPEED_MIN_KT..=WIND_SPEED_MAX_KT),
        wind_direction_deg: rng.random_range(DIRECTION_MIN_DEG..DIRECTION_MAX_DEG),
        wave_height_m: rng.random_range(WAVE_HEIGHT_MIN_M..=WAVE_HEIGHT_MAX_M),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_simulated_fields_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let now = chrono::Utc::now();

        for _ in 0..200 {
            let r = simulate_reading(-35.2, 174.3, now, &mut rng);
            assert!((SEA_TEMP_MIN_C..=SEA_TEMP_MAX_C).contains(&r.sea_temperature_c));
            assert!((CURRENT_SPEED_MIN_MS..=CURRENT_SPEED_MAX_MS).contains(&r.current_speed_ms));
            assert!((CHLOROPHYLL_MIN_MG_M3..=CHLOROPHYLL_MAX_MG_M3).contains(&r.chlorophyll_mg_m3));
            assert!((WIND_SPEED_MIN_KT..=WIND_SPEED_MAX_KT).contains(&r.wind_speed_kt));
            assert!((WAVE_HEIGHT_MIN_M..=WAVE_HEIGHT_MAX_M).contains(&r.wave_height_m));
            assert!(r.current_direction_deg >= 0.0 && r.current_direction_deg < 360.0);
            assert!(r.wind_direction_deg >= 0.0 && r.wind_direction_deg < 360.0);
        }
    }

    #[test]
    fn test_simulation_is_seed_deterministic() {
        let now = chrono::Utc::now();
        let a = simulate_reading(-35.2, 174.3, now, &mut StdRng::seed_from_u64(42));
        let b = simulate_reading(-35.2, 174.3, now, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_simulation_stamps_location_and_time() {
        let now = chrono::Utc::now();
        let r = simulate_reading(-34.5, 173.1, now, &mut StdRng::seed_from_u64(1));
        assert_eq!(r.latitude, -34.5);
        assert_eq!(r.longitude, 173.1);
        assert_eq!(r.recorded_at, now);
    }
}
