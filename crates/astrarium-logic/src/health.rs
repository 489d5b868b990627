//! Skill health banding.
//!
//! A skill's `health_score` (0–100) falls into exactly one of four bands.
//! Thresholds are inclusive lower bounds, and the input is clamped before
//! banding so that out-of-range backend values still classify.

use serde::{Deserialize, Serialize};

use crate::constants::health_bands;

/// Health tiers, healthiest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthTier {
    /// Health 80..=100: no practice needed.
    Healthy,
    /// Health 60..80: practice soon.
    NeedsPractice,
    /// Health 40..60: actively fading.
    Decaying,
    /// Health 0..40: close to forgotten.
    Critical,
}

impl HealthTier {
    pub const ALL: [HealthTier; 4] = [
        HealthTier::Healthy,
        HealthTier::NeedsPractice,
        HealthTier::Decaying,
        HealthTier::Critical,
    ];

    pub fn from_score(health_score: i32) -> Self {
        let score = clamp_health(health_score);
        if score >= health_bands::HEALTHY {
            Self::Healthy
        } else if score >= health_bands::NEEDS_PRACTICE {
            Self::NeedsPractice
        } else if score >= health_bands::DECAYING {
            Self::Decaying
        } else {
            Self::Critical
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HealthTier::Healthy => "Healthy",
            HealthTier::NeedsPractice => "Needs Practice",
            HealthTier::Decaying => "Decaying",
            HealthTier::Critical => "Critical",
        }
    }

    /// Text color used for the health percentage.
    pub fn color_class(self) -> &'static str {
        match self {
            HealthTier::Healthy => "text-green-500",
            HealthTier::NeedsPractice => "text-yellow-500",
            HealthTier::Decaying => "text-orange-500",
            HealthTier::Critical => "text-red-500",
        }
    }

    /// Badge styling. Healthy skills get the plain outline badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            HealthTier::Healthy => "outline",
            HealthTier::NeedsPractice => "bg-yellow-500/20 text-yellow-500",
            HealthTier::Decaying => "bg-orange-500/20 text-orange-500",
            HealthTier::Critical => "bg-red-500/20 text-red-500",
        }
    }

    /// Whether a skill in this tier should be offered for practice.
    pub fn needs_practice(self) -> bool {
        !matches!(self, HealthTier::Healthy)
    }
}

/// Result of classifying a health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthBand {
    pub tier: HealthTier,
    pub label: &'static str,
    /// The clamped score the tier was derived from.
    pub score: i32,
}

/// Clamp a raw health score into 0..=100.
pub fn clamp_health(health_score: i32) -> i32 {
    health_score.clamp(health_bands::MIN, health_bands::MAX)
}

/// Tint behind a skill's health bar. Coarser than [`HealthTier`]: the bar
/// only distinguishes three ranges, and 60..80 shares the healthy green.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BarTint {
    Red,
    Orange,
    Green,
}

impl BarTint {
    /// CSS background for the bar track.
    pub fn background(self) -> &'static str {
        match self {
            BarTint::Red => "rgba(239, 68, 68, 0.2)",
            BarTint::Orange => "rgba(249, 115, 22, 0.2)",
            BarTint::Green => "rgba(34, 197, 94, 0.2)",
        }
    }
}

pub fn health_bar_tint(health_score: i32) -> BarTint {
    if health_score < health_bands::DECAYING {
        BarTint::Red
    } else if health_score < health_bands::NEEDS_PRACTICE {
        BarTint::Orange
    } else {
        BarTint::Green
    }
}

/// Classify a skill's health score into its band.
pub fn classify_health_urgency(health_score: i32) -> HealthBand {
    let tier = HealthTier::from_score(health_score);
    HealthBand {
        tier,
        label: tier.label(),
        score: clamp_health(health_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_inclusive_lower() {
        assert_eq!(classify_health_urgency(100).tier, HealthTier::Healthy);
        assert_eq!(classify_health_urgency(80).tier, HealthTier::Healthy);
        assert_eq!(classify_health_urgency(79).tier, HealthTier::NeedsPractice);
        assert_eq!(classify_health_urgency(60).tier, HealthTier::NeedsPractice);
        assert_eq!(classify_health_urgency(59).tier, HealthTier::Decaying);
        assert_eq!(classify_health_urgency(40).tier, HealthTier::Decaying);
        assert_eq!(classify_health_urgency(39).tier, HealthTier::Critical);
        assert_eq!(classify_health_urgency(0).tier, HealthTier::Critical);
    }

    #[test]
    fn out_of_range_scores_clamp() {
        let low = classify_health_urgency(-25);
        assert_eq!(low.tier, HealthTier::Critical);
        assert_eq!(low.score, 0);

        let high = classify_health_urgency(250);
        assert_eq!(high.tier, HealthTier::Healthy);
        assert_eq!(high.score, 100);

        assert_eq!(classify_health_urgency(i32::MIN).tier, HealthTier::Critical);
        assert_eq!(classify_health_urgency(i32::MAX).tier, HealthTier::Healthy);
    }

    #[test]
    fn labels_match_tiers() {
        assert_eq!(classify_health_urgency(85).label, "Healthy");
        assert_eq!(classify_health_urgency(65).label, "Needs Practice");
        assert_eq!(classify_health_urgency(45).label, "Decaying");
        assert_eq!(classify_health_urgency(5).label, "Critical");
    }

    #[test]
    fn every_score_has_exactly_one_tier() {
        for score in 0..=100 {
            let tier = HealthTier::from_score(score);
            let matches = HealthTier::ALL.iter().filter(|t| **t == tier).count();
            assert_eq!(matches, 1, "score {}", score);
        }
    }

    #[test]
    fn tiers_are_monotonic_in_score() {
        let rank = |t: HealthTier| HealthTier::ALL.iter().position(|x| *x == t).unwrap();
        let mut prev = rank(HealthTier::from_score(100));
        for score in (0..100).rev() {
            let r = rank(HealthTier::from_score(score));
            assert!(r >= prev, "tier got healthier as score dropped at {}", score);
            prev = r;
        }
    }

    #[test]
    fn healthy_is_the_only_tier_not_needing_practice() {
        assert!(!HealthTier::Healthy.needs_practice());
        assert!(HealthTier::NeedsPractice.needs_practice());
        assert!(HealthTier::Decaying.needs_practice());
        assert!(HealthTier::Critical.needs_practice());
    }

    #[test]
    fn bar_tint_has_three_ranges() {
        assert_eq!(health_bar_tint(-5), BarTint::Red);
        assert_eq!(health_bar_tint(39), BarTint::Red);
        assert_eq!(health_bar_tint(40), BarTint::Orange);
        assert_eq!(health_bar_tint(59), BarTint::Orange);
        assert_eq!(health_bar_tint(60), BarTint::Green);
        // Needs-practice skills still get the green track.
        assert_eq!(classify_health_urgency(70).tier, HealthTier::NeedsPractice);
        assert_eq!(health_bar_tint(70), BarTint::Green);
        assert_eq!(BarTint::Orange.background(), "rgba(249, 115, 22, 0.2)");
    }

    #[test]
    fn color_classes_distinct() {
        let classes: Vec<_> = HealthTier::ALL.iter().map(|t| t.color_class()).collect();
        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
