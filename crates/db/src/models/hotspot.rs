//! Hotspot reference data models.

use serde::Serialize;
use sqlx::FromRow;

use pelagic_core::types::{DbId, Timestamp};

/// Seed data for one hotspot.
#[derive(Debug, Clone)]
pub struct HotspotSeed {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub description: &'static str,
    pub common_species: &'static [&'static str],
    pub best_months: &'static [i32],
    pub success_rate: f64,
}

/// A hotspot row annotated with recent catch activity: the count and
/// average weight of catches logged within the hotspot box over the
/// trailing window.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AnnotatedHotspot {
    pub id: DbId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
    pub common_species: Vec<String>,
    pub best_months: Vec<i32>,
    pub success_rate: f64,
    pub created_at: Timestamp,
    pub recent_catch_count: i64,
    pub avg_catch_weight_kg: Option<f64>,
}
