//! Score tiers
//!
//! Named thresholds derived from the maximum achievable score, ordered from
//! highest to lowest. The lowest tier is always Beginner at 0.

/// Fractions of the max score for each named tier, highest first
const TIER_FRACTIONS: [(&str, f64); 8] = [
    ("Genius", 0.70),
    ("Amazing", 0.50),
    ("Great", 0.40),
    ("Nice", 0.25),
    ("Solid", 0.15),
    ("Good", 0.08),
    ("Moving Up", 0.05),
    ("Good Start", 0.02),
];

/// A named score threshold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier {
    pub title: &'static str,
    pub threshold: u32,
}

/// Compute the tier ladder for a maximum achievable score
///
/// Thresholds are `floor(max_score * fraction)`, non-increasing from Genius
/// down to a fixed Beginner at 0.
#[must_use]
pub fn tiers_for(max_score: u32) -> Vec<Tier> {
    let mut tiers: Vec<Tier> = TIER_FRACTIONS
        .iter()
        .map(|&(title, fraction)| Tier {
            title,
            threshold: (f64::from(max_score) * fraction).floor() as u32,
        })
        .collect();

    tiers.push(Tier {
        title: "Beginner",
        threshold: 0,
    });

    tiers
}

/// Title of the highest tier whose threshold the score meets or exceeds
///
/// Scans from the highest threshold downward; ties break toward the higher
/// tier. With the Beginner floor at 0 every score maps to some title.
#[must_use]
pub fn current_title(score: u32, tiers: &[Tier]) -> &'static str {
    tiers
        .iter()
        .find(|tier| score >= tier.threshold)
        .map_or("", |tier| tier.title)
}
