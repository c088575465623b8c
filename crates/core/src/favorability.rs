//! Fishing favorability scoring.
//!
//! A deterministic additive heuristic over an environmental reading plus
//! the hour of day. Each factor contributes a fixed number of points
//! when it falls in its optimal or acceptable band; the early-morning
//! and evening windows add a flat bonus. The final score is clamped to
//! [0, 100] and bucketed into a rating.

use serde::{Deserialize, Serialize};

use crate::conditions::EnvironmentalReading;

// ---------------------------------------------------------------------------
// Factor bands and weights
// ---------------------------------------------------------------------------

/// Sea temperature: optimal [20, 24] C scores 25, acceptable [18, 26] C scores 15.
const SEA_TEMP_OPTIMAL_C: (f64, f64) = (20.0, 24.0);
const SEA_TEMP_GOOD_C: (f64, f64) = (18.0, 26.0);
const SEA_TEMP_OPTIMAL_POINTS: i32 = 25;
const SEA_TEMP_GOOD_POINTS: i32 = 15;

/// Current speed: optimal [0.5, 1.2] m/s scores 20, acceptable [0.3, 1.5] m/s scores 10.
const CURRENT_OPTIMAL_MS: (f64, f64) = (0.5, 1.2);
const CURRENT_GOOD_MS: (f64, f64) = (0.3, 1.5);
const CURRENT_OPTIMAL_POINTS: i32 = 20;
const CURRENT_GOOD_POINTS: i32 = 10;

/// Chlorophyll: optimal [0.1, 0.4] mg/m3 scores 20, acceptable [0.05, 0.6] scores 10.
const CHLOROPHYLL_OPTIMAL_MG_M3: (f64, f64) = (0.1, 0.4);
const CHLOROPHYLL_GOOD_MG_M3: (f64, f64) = (0.05, 0.6);
const CHLOROPHYLL_OPTIMAL_POINTS: i32 = 20;
const CHLOROPHYLL_GOOD_POINTS: i32 = 10;

/// Wind: at most 15 kt scores 15, at most 20 kt scores 8.
const WIND_OPTIMAL_MAX_KT: f64 = 15.0;
const WIND_GOOD_MAX_KT: f64 = 20.0;
const WIND_OPTIMAL_POINTS: i32 = 15;
const WIND_GOOD_POINTS: i32 = 8;

/// Waves: at most 2 m scores 10, at most 3 m scores 5.
const WAVE_OPTIMAL_MAX_M: f64 = 2.0;
const WAVE_GOOD_MAX_M: f64 = 3.0;
const WAVE_OPTIMAL_POINTS: i32 = 10;
const WAVE_GOOD_POINTS: i32 = 5;

/// Dawn [5, 8] and dusk [17, 19] hours add a flat bonus.
const PRIME_MORNING_HOURS: (u32, u32) = (5, 8);
const PRIME_EVENING_HOURS: (u32, u32) = (17, 19);
const PRIME_TIME_POINTS: i32 = 10;

/// Rating thresholds on the clamped score.
const EXCELLENT_MIN_SCORE: i32 = 80;
const GOOD_MIN_SCORE: i32 = 60;
const FAIR_MIN_SCORE: i32 = 40;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Qualitative rating derived from the clamped score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Rating {
    /// Bucket a clamped score into a rating.
    pub fn from_score(score: i32) -> Self {
        if score >= EXCELLENT_MIN_SCORE {
            Self::Excellent
        } else if score >= GOOD_MIN_SCORE {
            Self::Good
        } else if score >= FAIR_MIN_SCORE {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

/// Qualitative label recorded for each scored factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorLabel {
    Optimal,
    Good,
    Poor,
}

/// Marker recorded for the time factor only when the bonus applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFactor {
    PrimeTime,
}

/// Per-factor labels for a scored reading. `time` is present only when
/// the prime-time bonus applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavorabilityFactors {
    pub sea_temperature: FactorLabel,
    pub current_speed: FactorLabel,
    pub chlorophyll: FactorLabel,
    pub wind_speed: FactorLabel,
    pub wave_height: FactorLabel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<TimeFactor>,
}

/// Scored favorability for a reading: clamped score, rating, and the
/// per-factor labels that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavorabilityResult {
    pub score: i32,
    pub rating: Rating,
    pub factors: FavorabilityFactors,
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Score a banded factor: optimal band, acceptable band, else nothing.
fn band_score(
    value: f64,
    optimal: (f64, f64),
    good: (f64, f64),
    optimal_points: i32,
    good_points: i32,
) -> (i32, FactorLabel) {
    if value >= optimal.0 && value <= optimal.1 {
        (optimal_points, FactorLabel::Optimal)
    } else if value >= good.0 && value <= good.1 {
        (good_points, FactorLabel::Good)
    } else {
        (0, FactorLabel::Poor)
    }
}

/// Score a capped factor: below the optimal cap, below the acceptable cap, else nothing.
fn cap_score(
    value: f64,
    optimal_max: f64,
    good_max: f64,
    optimal_points: i32,
    good_points: i32,
) -> (i32, FactorLabel) {
    if value <= optimal_max {
        (optimal_points, FactorLabel::Optimal)
    } else if value <= good_max {
        (good_points, FactorLabel::Good)
    } else {
        (0, FactorLabel::Poor)
    }
}

/// Whether the hour falls in a prime fishing window (dawn or dusk).
fn is_prime_hour(hour: u32) -> bool {
    (PRIME_MORNING_HOURS.0..=PRIME_MORNING_HOURS.1).contains(&hour)
        || (PRIME_EVENING_HOURS.0..=PRIME_EVENING_HOURS.1).contains(&hour)
}

/// Score a reading at a given hour of day (0-23).
///
/// Deterministic: the same reading and hour always produce the same
/// result. The hour is the only time-dependent input.
pub fn score_at_hour(reading: &EnvironmentalReading, hour: u32) -> FavorabilityResult {
    let (temp_points, temp_label) = band_score(
        reading.sea_temperature_c,
        SEA_TEMP_OPTIMAL_C,
        SEA_TEMP_GOOD_C,
        SEA_TEMP_OPTIMAL_POINTS,
        SEA_TEMP_GOOD_POINTS,
    );
    let (current_points, current_label) = band_score(
        reading.current_speed_ms,
        CURRENT_OPTIMAL_MS,
        CURRENT_GOOD_MS,
        CURRENT_OPTIMAL_POINTS,
        CURRENT_GOOD_POINTS,
    );
    let (chlorophyll_points, chlorophyll_label) = band_score(
        reading.chlorophyll_mg_m3,
        CHLOROPHYLL_OPTIMAL_MG_M3,
        CHLOROPHYLL_GOOD_MG_M3,
        CHLOROPHYLL_OPTIMAL_POINTS,
        CHLOROPHYLL_GOOD_POINTS,
    );
    let (wind_points, wind_label) = cap_score(
        reading.wind_speed_kt,
        WIND_OPTIMAL_MAX_KT,
        WIND_GOOD_MAX_KT,
        WIND_OPTIMAL_POINTS,
        WIND_GOOD_POINTS,
    );
    let (wave_points, wave_label) = cap_score(
        reading.wave_height_m,
        WAVE_OPTIMAL_MAX_M,
        WAVE_GOOD_MAX_M,
        WAVE_OPTIMAL_POINTS,
        WAVE_GOOD_POINTS,
    );

    let prime = is_prime_hour(hour);
    let time_points = if prime { PRIME_TIME_POINTS } else { 0 };

    let total = temp_points
        + current_points
        + chlorophyll_points
        + wind_points
        + wave_points
        + time_points;
    let score = total.clamp(0, 100);

    FavorabilityResult {
        score,
        rating: Rating::from_score(score),
        factors: FavorabilityFactors {
            sea_temperature: temp_label,
            current_speed: current_label,
            chlorophyll: chlorophyll_label,
            wind_speed: wind_label,
            wave_height: wave_label,
            time: prime.then_some(TimeFactor::PrimeTime),
        },
    }
}

/// Score a reading at the current UTC hour.
pub fn score_now(reading: &EnvironmentalReading) -> FavorabilityResult {
    use chrono::Timelike;
    score_at_hour(reading, chrono::Utc::now().hour())
}
