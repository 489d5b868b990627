//! Thresholds and ranges shared by the classification rules.
//!
//! Plain integer constants with no dependencies, used by both the rules
//! modules and the headless harness.

/// Skill health bands. Each value is the inclusive lower bound of a band.
pub mod health_bands {
    pub const HEALTHY: i32 = 80;
    pub const NEEDS_PRACTICE: i32 = 60;
    pub const DECAYING: i32 = 40;
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 100;
}

/// XP needed per user level.
pub const XP_PER_LEVEL: u32 = 100;

/// Pet experience wraps into the progress bar every 100 points.
pub const EXPERIENCE_BAR_SPAN: u32 = 100;

/// The experience bar is never drawn at zero width.
pub const EXPERIENCE_BAR_FLOOR: u32 = 1;

/// Streak badge thresholds (inclusive lower bounds, in days).
pub mod streak_tiers {
    pub const INFERNO: u32 = 30;
    pub const BLAZING: u32 = 14;
    pub const KINDLED: u32 = 7;
}

/// Pet and skill stats are 0–100 gauges.
pub const STAT_MIN: i32 = 0;
pub const STAT_MAX: i32 = 100;

/// Star power covered by one star on a skill card.
pub const STAR_POWER_PER_STAR: u32 = 20;

/// Pet color hue wraps at a full turn.
pub const HUE_TURN: i32 = 360;

/// First level of each evolution stage, in stage order (egg → celestial).
pub const STAGE_FIRST_LEVELS: [u32; 12] = [1, 2, 3, 5, 7, 9, 11, 15, 20, 30, 40, 50];
