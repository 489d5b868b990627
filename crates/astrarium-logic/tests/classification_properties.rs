//! Property tests for the classification rules.
//!
//! Every rule must be total (any input yields a value) and pure (the same
//! input always yields the same value). Randomized inputs cover values far
//! outside the ranges the backend documents.

use astrarium_logic::decay::{classify_decay_urgency, DecayUrgency};
use astrarium_logic::evolution::{
    derive_evolution_display_str, nominal_stage_for_level, EvolutionStage, UNKNOWN_SPRITE,
};
use astrarium_logic::health::{classify_health_urgency, HealthTier};
use astrarium_logic::mood::{derive_mood_str, MOOD_FALLBACK};
use astrarium_logic::progression::{
    compute_experience_bar_fraction, compute_level, compute_streak_badge, hue_rotation,
    stat_bar_percent,
};
use proptest::prelude::*;

fn known_stage_names() -> impl Strategy<Value = String> {
    prop::sample::select(
        EvolutionStage::ORDERED
            .iter()
            .map(|s| s.as_str().to_string())
            .collect::<Vec<_>>(),
    )
}

/// Randomly flip the case of each ASCII letter.
fn scramble_case(name: String, mask: Vec<bool>) -> String {
    name.chars()
        .zip(mask.into_iter().chain(std::iter::repeat(false)))
        .map(|(c, upper)| if upper { c.to_ascii_uppercase() } else { c })
        .collect()
}

proptest! {
    #[test]
    fn health_classification_is_total_and_pure(score in any::<i32>()) {
        let a = classify_health_urgency(score);
        let b = classify_health_urgency(score);
        prop_assert_eq!(a, b);
        prop_assert!(HealthTier::ALL.contains(&a.tier));
        prop_assert!((0..=100).contains(&a.score));
    }

    #[test]
    fn health_band_matches_thresholds(score in 0i32..=100) {
        let expected = if score >= 80 {
            HealthTier::Healthy
        } else if score >= 60 {
            HealthTier::NeedsPractice
        } else if score >= 40 {
            HealthTier::Decaying
        } else {
            HealthTier::Critical
        };
        prop_assert_eq!(classify_health_urgency(score).tier, expected);
    }

    #[test]
    fn level_formula_holds(xp in any::<u32>()) {
        let lvl = compute_level(xp);
        prop_assert!(lvl.level >= 1);
        prop_assert_eq!(lvl.level, xp / 100 + 1);
        prop_assert!(lvl.xp_progress < 100);
        prop_assert_eq!(lvl.xp_progress + lvl.xp_to_next_level, 100);
        prop_assert_eq!(compute_level(xp), lvl);
    }

    #[test]
    fn experience_bar_stays_in_range(xp in any::<u32>()) {
        let bar = compute_experience_bar_fraction(xp);
        prop_assert!((1..100).contains(&bar));
        prop_assert_eq!(bar, compute_experience_bar_fraction(xp));
    }

    #[test]
    fn streak_badge_is_monotonic(a in 0u32..1000, b in 0u32..1000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(compute_streak_badge(lo).tier <= compute_streak_badge(hi).tier);
    }

    #[test]
    fn mood_lookup_never_fails(raw in ".*") {
        let a = derive_mood_str(&raw);
        prop_assert_eq!(a, derive_mood_str(&raw));
        if !["radiant", "content", "dimming", "flickering", "eclipse"].contains(&raw.as_str()) {
            prop_assert_eq!(a, MOOD_FALLBACK);
        }
    }

    #[test]
    fn stage_lookup_ignores_case(name in known_stage_names(), mask in prop::collection::vec(any::<bool>(), 0..12)) {
        let scrambled = scramble_case(name.clone(), mask);
        let sprite = derive_evolution_display_str(&scrambled);
        prop_assert_eq!(sprite, derive_evolution_display_str(&name));
        prop_assert_ne!(sprite, UNKNOWN_SPRITE);
    }

    #[test]
    fn arbitrary_stage_strings_resolve(raw in ".*") {
        let sprite = derive_evolution_display_str(&raw);
        prop_assert_eq!(sprite, derive_evolution_display_str(&raw));
    }

    #[test]
    fn urgency_style_is_total(raw in ".*") {
        let urgency = DecayUrgency::parse(&raw);
        prop_assert_eq!(classify_decay_urgency(&urgency), classify_decay_urgency(&urgency));
    }

    #[test]
    fn nominal_stage_monotonic(a in 0u32..200, b in 0u32..200) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo_idx = nominal_stage_for_level(lo).index();
        let hi_idx = nominal_stage_for_level(hi).index();
        prop_assert!(lo_idx <= hi_idx);
    }

    #[test]
    fn gauges_clamp(v in any::<i32>(), hue in any::<i32>()) {
        prop_assert!(stat_bar_percent(v) <= 100);
        prop_assert!(hue_rotation(hue) < 360);
    }
}

#[test]
fn stage_first_levels_map_back_to_their_stage() {
    for stage in EvolutionStage::ORDERED {
        let first = stage.first_level().unwrap();
        assert_eq!(nominal_stage_for_level(first), stage);
    }
}

#[test]
fn documented_boundaries() {
    assert_eq!(classify_health_urgency(80).tier, HealthTier::Healthy);
    assert_eq!(classify_health_urgency(79).tier, HealthTier::NeedsPractice);
    assert_eq!(compute_level(0).level, 1);
    assert_eq!(compute_level(99).level, 1);
    assert_eq!(compute_level(100).level, 2);
    assert_eq!(compute_level(250).level, 3);
    assert_eq!(compute_experience_bar_fraction(0), 1);
    assert_eq!(compute_experience_bar_fraction(100), 1);
    assert_eq!(compute_experience_bar_fraction(150), 50);
    assert_eq!(compute_streak_badge(6).emoji, "✨");
    assert_eq!(compute_streak_badge(7).emoji, "🔥");
    assert_eq!(compute_streak_badge(29).emoji, "🔥🔥");
    assert_eq!(compute_streak_badge(30).emoji, "🔥🔥🔥");
    assert_eq!(
        derive_evolution_display_str("EGG"),
        derive_evolution_display_str("egg")
    );
    assert_eq!(derive_mood_str("unknown_value"), MOOD_FALLBACK);
}
