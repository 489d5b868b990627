//! Levels, streaks, and progress bars.
//!
//! ```
//! use astrarium_logic::progression::{compute_level, compute_experience_bar_fraction};
//!
//! let lvl = compute_level(250);
//! assert_eq!((lvl.level, lvl.xp_progress, lvl.xp_to_next_level), (3, 50, 50));
//! assert_eq!(compute_experience_bar_fraction(0), 1);
//! ```

use serde::Serialize;

use crate::constants::{
    streak_tiers, EXPERIENCE_BAR_FLOOR, EXPERIENCE_BAR_SPAN, HUE_TURN, STAR_POWER_PER_STAR,
    STAT_MAX, STAT_MIN, XP_PER_LEVEL,
};

/// A user's level derived from total XP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelProgress {
    /// Always ≥ 1.
    pub level: u32,
    /// XP earned inside the current level, 0..100.
    pub xp_progress: u32,
    /// XP still needed to reach the next level, 1..=100.
    pub xp_to_next_level: u32,
}

pub fn compute_level(total_xp: u32) -> LevelProgress {
    let xp_progress = total_xp % XP_PER_LEVEL;
    LevelProgress {
        level: total_xp / XP_PER_LEVEL + 1,
        xp_progress,
        xp_to_next_level: XP_PER_LEVEL - xp_progress,
    }
}

/// Streak badge tiers, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum StreakTier {
    Spark,
    Kindled,
    Blazing,
    Inferno,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreakBadge {
    pub tier: StreakTier,
    pub emoji: &'static str,
    pub tier_label: &'static str,
}

pub fn compute_streak_badge(streak_count: u32) -> StreakBadge {
    if streak_count >= streak_tiers::INFERNO {
        StreakBadge {
            tier: StreakTier::Inferno,
            emoji: "🔥🔥🔥",
            tier_label: "Inferno",
        }
    } else if streak_count >= streak_tiers::BLAZING {
        StreakBadge {
            tier: StreakTier::Blazing,
            emoji: "🔥🔥",
            tier_label: "Blazing",
        }
    } else if streak_count >= streak_tiers::KINDLED {
        StreakBadge {
            tier: StreakTier::Kindled,
            emoji: "🔥",
            tier_label: "Kindled",
        }
    } else {
        StreakBadge {
            tier: StreakTier::Spark,
            emoji: "✨",
            tier_label: "Spark",
        }
    }
}

/// Width of the pet experience bar, in percent.
///
/// Experience wraps every 100 points. A remainder of zero is drawn as 1 so
/// the bar never renders empty; this applies right after a level-up too
/// (`100 → 1`).
pub fn compute_experience_bar_fraction(experience: u32) -> u32 {
    match experience % EXPERIENCE_BAR_SPAN {
        0 => EXPERIENCE_BAR_FLOOR,
        n => n,
    }
}

/// Clamp a 0–100 gauge (luminosity, energy, health…) to a bar width.
pub fn stat_bar_percent(value: i32) -> u32 {
    value.clamp(STAT_MIN, STAT_MAX) as u32
}

/// Stars shown for a skill: one per started 20 points of star power.
pub fn star_rating(star_power: i32) -> u32 {
    stat_bar_percent(star_power).div_ceil(STAR_POWER_PER_STAR)
}

pub fn star_glyphs(stars: u32) -> String {
    "⭐".repeat(stars as usize)
}

/// Normalize any hue to 0..360 degrees.
pub fn hue_rotation(color_hue: i32) -> u32 {
    color_hue.rem_euclid(HUE_TURN) as u32
}

/// How a signed stat change is written in answer feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeDisplay {
    pub text: String,
    pub color_class: &'static str,
}

pub fn signed_change(delta: i32) -> ChangeDisplay {
    match delta.signum() {
        1 => ChangeDisplay {
            text: format!("+{}", delta),
            color_class: "text-green-500",
        },
        -1 => ChangeDisplay {
            text: delta.to_string(),
            color_class: "text-red-500",
        },
        _ => ChangeDisplay {
            text: "0".to_string(),
            color_class: "text-gray-500",
        },
    }
}

/// Headline for a graded answer.
pub fn answer_verdict(is_correct: bool) -> &'static str {
    if is_correct {
        "🌟 Correct!"
    } else {
        "❌ Incorrect"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_boundaries() {
        assert_eq!(compute_level(0).level, 1);
        assert_eq!(compute_level(99).level, 1);
        assert_eq!(compute_level(100).level, 2);
        assert_eq!(compute_level(250).level, 3);
    }

    #[test]
    fn xp_to_next_level() {
        assert_eq!(compute_level(0).xp_to_next_level, 100);
        assert_eq!(compute_level(99).xp_to_next_level, 1);
        assert_eq!(compute_level(100).xp_to_next_level, 100);
        assert_eq!(compute_level(250).xp_progress, 50);
    }

    #[test]
    fn level_never_overflows() {
        let top = compute_level(u32::MAX);
        assert_eq!(top.level, u32::MAX / 100 + 1);
        assert!(top.xp_progress < 100);
    }

    #[test]
    fn star_rating_counts_started_twenties() {
        assert_eq!(star_rating(0), 0);
        assert_eq!(star_rating(1), 1);
        assert_eq!(star_rating(20), 1);
        assert_eq!(star_rating(21), 2);
        assert_eq!(star_rating(100), 5);
        assert_eq!(star_rating(250), 5);
        assert_eq!(star_rating(-10), 0);
        assert_eq!(star_glyphs(3), "⭐⭐⭐");
        assert_eq!(star_glyphs(0), "");
    }

    #[test]
    fn streak_thresholds() {
        assert_eq!(compute_streak_badge(0).emoji, "✨");
        assert_eq!(compute_streak_badge(6).emoji, "✨");
        assert_eq!(compute_streak_badge(7).emoji, "🔥");
        assert_eq!(compute_streak_badge(13).emoji, "🔥");
        assert_eq!(compute_streak_badge(14).emoji, "🔥🔥");
        assert_eq!(compute_streak_badge(29).emoji, "🔥🔥");
        assert_eq!(compute_streak_badge(30).emoji, "🔥🔥🔥");
        assert_eq!(compute_streak_badge(365).tier, StreakTier::Inferno);
    }

    // The zero-to-one floor is a deliberate display rule, not an off-by-one.
    #[test]
    fn experience_bar_never_empty() {
        assert_eq!(compute_experience_bar_fraction(0), 1);
        assert_eq!(compute_experience_bar_fraction(100), 1);
        assert_eq!(compute_experience_bar_fraction(200), 1);
    }

    #[test]
    fn experience_bar_wraps() {
        assert_eq!(compute_experience_bar_fraction(1), 1);
        assert_eq!(compute_experience_bar_fraction(99), 99);
        assert_eq!(compute_experience_bar_fraction(150), 50);
    }

    #[test]
    fn stat_bar_clamps() {
        assert_eq!(stat_bar_percent(-5), 0);
        assert_eq!(stat_bar_percent(42), 42);
        assert_eq!(stat_bar_percent(180), 100);
    }

    #[test]
    fn hue_wraps() {
        assert_eq!(hue_rotation(240), 240);
        assert_eq!(hue_rotation(360), 0);
        assert_eq!(hue_rotation(725), 5);
        assert_eq!(hue_rotation(-30), 330);
    }

    #[test]
    fn signed_change_formatting() {
        assert_eq!(signed_change(15).text, "+15");
        assert_eq!(signed_change(15).color_class, "text-green-500");
        assert_eq!(signed_change(-4).text, "-4");
        assert_eq!(signed_change(-4).color_class, "text-red-500");
        assert_eq!(signed_change(0).text, "0");
        assert_eq!(signed_change(0).color_class, "text-gray-500");
    }

    #[test]
    fn verdicts() {
        assert_eq!(answer_verdict(true), "🌟 Correct!");
        assert_eq!(answer_verdict(false), "❌ Incorrect");
    }
}
