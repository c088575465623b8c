//! Advisory alert generation.
//!
//! Alerts are simulated advisory content, not derived from stored data.
//! Each of three fixed templates is included independently with a fixed
//! probability, with a random magnitude substituted into the message.
//! Producing zero alerts is a valid outcome.

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Timestamp;

/// Advisory category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryKind {
    Hotspot,
    Environmental,
    Timing,
}

/// Advisory priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryPriority {
    High,
    Medium,
}

/// A single advisory message with an expiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub id: String,
    pub kind: AdvisoryKind,
    pub priority: AdvisoryPriority,
    pub title: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub expires_at: Timestamp,
}

/// Inclusion probability per template.
const HOTSPOT_INCLUSION: f64 = 0.7;
const ENVIRONMENTAL_INCLUSION: f64 = 0.6;
const TIMING_INCLUSION: f64 = 0.5;

/// Expiry horizon per template, in hours.
const HOTSPOT_EXPIRY_HOURS: i64 = 6;
const ENVIRONMENTAL_EXPIRY_HOURS: i64 = 4;
const TIMING_EXPIRY_HOURS: i64 = 8;

/// Success-probability percentage range quoted in the hotspot advisory.
const HOTSPOT_SUCCESS_MIN_PCT: u32 = 70;
const HOTSPOT_SUCCESS_MAX_PCT: u32 = 95;

/// Lead-time range quoted in the timing advisory, in hours.
const TIMING_LEAD_MIN_HOURS: u32 = 2;
const TIMING_LEAD_MAX_HOURS: u32 = 6;

/// Generate the current advisory set.
///
/// Each template is rolled independently, so the result holds zero to
/// three advisories in template order.
pub fn generate(now: Timestamp, rng: &mut impl Rng) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    if rng.random_bool(HOTSPOT_INCLUSION) {
        let success_pct = rng.random_range(HOTSPOT_SUCCESS_MIN_PCT..=HOTSPOT_SUCCESS_MAX_PCT);
        advisories.push(Advisory {
            id: Uuid::new_v4().to_string(),
            kind: AdvisoryKind::Hotspot,
            priority: AdvisoryPriority::High,
            title: "High activity at Cape Brett".to_string(),
            message: format!(
                "Bait schools holding along the 200 m line off Cape Brett; \
                 estimated {success_pct}% success probability for pelagics."
            ),
            location: Some("Cape Brett".to_string()),
            expires_at: now + chrono::Duration::hours(HOTSPOT_EXPIRY_HOURS),
        });
    }

    if rng.random_bool(ENVIRONMENTAL_INCLUSION) {
        advisories.push(Advisory {
            id: Uuid::new_v4().to_string(),
            kind: AdvisoryKind::Environmental,
            priority: AdvisoryPriority::Medium,
            title: "Warm current push".to_string(),
            message: "A warm-water tongue is moving down the Northland coast, \
                      lifting sea temperatures toward the marlin band."
                .to_string(),
            location: Some("Northland coast".to_string()),
            expires_at: now + chrono::Duration::hours(ENVIRONMENTAL_EXPIRY_HOURS),
        });
    }

    if rng.random_bool(TIMING_INCLUSION) {
        let lead_hours = rng.random_range(TIMING_LEAD_MIN_HOURS..=TIMING_LEAD_MAX_HOURS);
        advisories.push(Advisory {
            id: Uuid::new_v4().to_string(),
            kind: AdvisoryKind::Timing,
            priority: AdvisoryPriority::Medium,
            title: "Bite window approaching".to_string(),
            message: format!(
                "Tide change and light conditions line up in about {lead_hours} hours; \
                 plan to be on the water before then."
            ),
            location: None,
            expires_at: now + chrono::Duration::hours(TIMING_EXPIRY_HOURS),
        });
    }

    advisories
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_advisories_are_well_formed() {
        let now = chrono::Utc::now();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..100 {
            let advisories = generate(now, &mut rng);
            assert!(advisories.len() <= 3);

            for advisory in &advisories {
                assert!(!advisory.id.is_empty());
                assert!(!advisory.title.is_empty());
                assert!(!advisory.message.is_empty());
                assert!(advisory.expires_at > now);

                let horizon = match advisory.kind {
                    AdvisoryKind::Hotspot => HOTSPOT_EXPIRY_HOURS,
                    AdvisoryKind::Environmental => ENVIRONMENTAL_EXPIRY_HOURS,
                    AdvisoryKind::Timing => TIMING_EXPIRY_HOURS,
                };
                assert_eq!(advisory.expires_at, now + chrono::Duration::hours(horizon));
            }
        }
    }

    /// Template order is fixed, so kinds never repeat within a batch.
    #[test]
    fn test_at_most_one_advisory_per_kind() {
        let now = chrono::Utc::now();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..100 {
            let advisories = generate(now, &mut rng);
            let hotspots = advisories
                .iter()
                .filter(|a| a.kind == AdvisoryKind::Hotspot)
                .count();
            assert!(hotspots <= 1);
        }
    }

    /// Over many rolls each template shows up roughly at its inclusion
    /// rate; with 400 trials even the 50% template is far from 0 or 400.
    #[test]
    fn test_inclusion_probabilities_are_independent() {
        let now = chrono::Utc::now();
        let mut rng = StdRng::seed_from_u64(29);

        let mut counts = [0usize; 3];
        for _ in 0..400 {
            for advisory in generate(now, &mut rng) {
                match advisory.kind {
                    AdvisoryKind::Hotspot => counts[0] += 1,
                    AdvisoryKind::Environmental => counts[1] += 1,
                    AdvisoryKind::Timing => counts[2] += 1,
                }
            }
        }

        for count in counts {
            assert!(count > 100, "template included too rarely: {count}");
            assert!(count < 400, "template included every time: {count}");
        }
    }
}
