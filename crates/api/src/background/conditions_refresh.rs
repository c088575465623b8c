//! Periodic environmental refresh.
//!
//! Appends one synthesized reading per reference fishing ground on a
//! fixed schedule so that point and grid lookups near the grounds serve
//! stored data. Runs independently of request traffic; failures are
//! logged and never crash the process.

use std::time::Duration;

use chrono::Utc;
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

use pelagic_core::conditions::simulate_reading;
use pelagic_core::prediction::GROUNDS;
use pelagic_db::repositories::EnvironmentalRepo;

/// How often readings are refreshed.
const REFRESH_INTERVAL: Duration = Duration::from_secs(3 * 3600); // 3 hours

/// Run the environmental refresh loop until `cancel` is triggered.
pub async fn run(pool: PgPool, cancel: CancellationToken) {
    tracing::info!(
        interval_secs = REFRESH_INTERVAL.as_secs(),
        grounds = GROUNDS.len(),
        "Environmental refresh job started"
    );

    let mut interval = tokio::time::interval(REFRESH_INTERVAL);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Environmental refresh job stopping");
                break;
            }
            _ = interval.tick() => {
                refresh_once(&pool).await;
            }
        }
    }
}

/// Append one synthesized reading per reference ground.
///
/// Each ground is attempted independently; a failed insert is logged
/// and the remaining grounds still refresh.
async fn refresh_once(pool: &PgPool) {
    let now = Utc::now();
    let mut inserted = 0usize;

    for ground in &GROUNDS {
        let reading = simulate_reading(ground.latitude, ground.longitude, now, &mut rand::rng());
        match EnvironmentalRepo::insert(pool, &reading).await {
            Ok(_) => inserted += 1,
            Err(e) => {
                tracing::error!(
                    ground = ground.name,
                    error = %e,
                    "Environmental refresh: insert failed"
                );
            }
        }
    }

    tracing::debug!(inserted, "Environmental refresh: readings appended");
}
