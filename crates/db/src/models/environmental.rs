//! Stored environmental reading rows.

use sqlx::FromRow;

use pelagic_core::conditions::EnvironmentalReading;
use pelagic_core::types::{DbId, Timestamp};

/// Full row from the `environmental_data` table.
#[derive(Debug, Clone, FromRow)]
pub struct EnvironmentalData {
    pub id: DbId,
    pub latitude: f64,
    pub longitude: f64,
    pub sea_temperature_c: f64,
    pub current_speed_ms: f64,
    pub current_direction_deg: f64,
    pub chlorophyll_mg_m3: f64,
    pub wind_speed_kt: f64,
    pub wind_direction_deg: f64,
    pub wave_height_m: f64,
    pub recorded_at: Timestamp,
    pub created_at: Timestamp,
}

impl EnvironmentalData {
    /// Project the row onto the domain reading type, dropping row identity.
    pub fn into_reading(self) -> EnvironmentalReading {
        EnvironmentalReading {
            latitude: self.latitude,
            longitude: self.longitude,
            recorded_at: self.recorded_at,
            sea_temperature_c: self.sea_temperature_c,
            current_speed_ms: self.current_speed_ms,
            current_direction_deg: self.current_direction_deg,
            chlorophyll_mg_m3: self.chlorophyll_mg_m3,
            wind_speed_kt: self.wind_speed_kt,
            wind_direction_deg: self.wind_direction_deg,
            wave_height_m: self.wave_height_m,
        }
    }
}
