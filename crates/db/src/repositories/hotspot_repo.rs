//! Repository for the `hotspots` reference table.

use sqlx::PgPool;

use pelagic_core::types::Timestamp;

use crate::models::hotspot::{AnnotatedHotspot, HotspotSeed};

/// Half-width in degrees of the box used to attribute catches to a hotspot.
const CATCH_BOX_RADIUS_DEG: f64 = 0.05;

/// The five reference hotspots seeded at startup.
const SEEDS: [HotspotSeed; 5] = [
    HotspotSeed {
        name: "North Cape Bank",
        latitude: -34.30,
        longitude: 173.60,
        description: "Offshore bank north of Cape Reinga; holds bait over the summer current lines.",
        common_species: &["Blue Marlin", "Yellowfin Tuna", "Skipjack Tuna"],
        best_months: &[12, 1, 2, 3, 4],
        success_rate: 0.72,
    },
    HotspotSeed {
        name: "Cape Brett",
        latitude: -35.17,
        longitude: 174.33,
        description: "Deep water close to shore off the Bay of Islands; the classic striped marlin ground.",
        common_species: &["Striped Marlin", "Yellowfin Tuna", "Kingfish"],
        best_months: &[1, 2, 3, 4],
        success_rate: 0.68,
    },
    HotspotSeed {
        name: "Poor Knights Islands",
        latitude: -35.47,
        longitude: 174.74,
        description: "Current-swept pinnacles with strong bait aggregations along the 150 m contour.",
        common_species: &["Striped Marlin", "Kingfish", "Bigeye Tuna"],
        best_months: &[1, 2, 3],
        success_rate: 0.61,
    },
    HotspotSeed {
        name: "Middlesex Bank",
        latitude: -34.04,
        longitude: 171.73,
        description: "Remote seamount west of the Three Kings; big blue marlin water.",
        common_species: &["Blue Marlin", "Black Marlin", "Bigeye Tuna"],
        best_months: &[12, 1, 2, 3],
        success_rate: 0.79,
    },
    HotspotSeed {
        name: "Garden Patch",
        latitude: -34.85,
        longitude: 173.95,
        description: "Broken foul ground east of the Cavallis; reliable mixed pelagic fishing.",
        common_species: &["Yellowfin Tuna", "Skipjack Tuna", "Mahimahi"],
        best_months: &[12, 1, 2, 3, 4, 5],
        success_rate: 0.55,
    },
];

/// Provides seed and query operations for hotspots.
pub struct HotspotRepo;

impl HotspotRepo {
    /// Seed the reference hotspots. Idempotent: rows are keyed by name and
    /// existing rows are left untouched.
    pub async fn seed_defaults(pool: &PgPool) -> Result<(), sqlx::Error> {
        for seed in &SEEDS {
            let common_species: Vec<String> =
                seed.common_species.iter().map(|s| s.to_string()).collect();
            let best_months: Vec<i32> = seed.best_months.to_vec();

            sqlx::query(
                "INSERT INTO hotspots \
                    (name, latitude, longitude, description, common_species, \
                     best_months, success_rate) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7) \
                 ON CONFLICT (name) DO NOTHING",
            )
            .bind(seed.name)
            .bind(seed.latitude)
            .bind(seed.longitude)
            .bind(seed.description)
            .bind(&common_species)
            .bind(&best_months)
            .bind(seed.success_rate)
            .execute(pool)
            .await?;
        }

        tracing::debug!(count = SEEDS.len(), "Hotspot seed data applied");
        Ok(())
    }

    /// All hotspots annotated with the count and average weight of catches
    /// logged inside the hotspot box since the cutoff.
    pub async fn list_annotated(
        pool: &PgPool,
        since: Timestamp,
    ) -> Result<Vec<AnnotatedHotspot>, sqlx::Error> {
        let query = "\
            SELECT h.id, h.name, h.latitude, h.longitude, h.description, \
                   h.common_species, h.best_months, h.success_rate, h.created_at, \
                   (SELECT COUNT(*) FROM catch_logs c \
                     WHERE c.latitude  BETWEEN h.latitude  - $2 AND h.latitude  + $2 \
                       AND c.longitude BETWEEN h.longitude - $2 AND h.longitude + $2 \
                       AND c.time_caught >= $1) AS recent_catch_count, \
                   (SELECT AVG(c.weight_kg) FROM catch_logs c \
                     WHERE c.latitude  BETWEEN h.latitude  - $2 AND h.latitude  + $2 \
                       AND c.longitude BETWEEN h.longitude - $2 AND h.longitude + $2 \
                       AND c.time_caught >= $1) AS avg_catch_weight_kg \
            FROM hotspots h \
            ORDER BY h.name";
        sqlx::query_as::<_, AnnotatedHotspot>(query)
            .bind(since)
            .bind(CATCH_BOX_RADIUS_DEG)
            .fetch_all(pool)
            .await
    }
}
