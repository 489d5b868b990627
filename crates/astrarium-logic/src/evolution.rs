//! Pet evolution stages and their sprites.
//!
//! Twelve ordered stages, egg → celestial. The backend reports the stage
//! and the level separately, and a snapshot can carry a stage that does not
//! match its level. Both are rendered as received. [`stage_level_consistency`]
//! can *report* a mismatch, but nothing here corrects one.
//!
//! # Nominal stage table
//!
//! | Stage | Levels |
//! |-------|--------|
//! | egg | 1 |
//! | hatching | 2 |
//! | baby | 3–4 |
//! | larvae | 5–6 |
//! | young | 7–8 |
//! | juvenile | 9–10 |
//! | teen | 11–14 |
//! | maturing | 15–19 |
//! | adult | 20–29 |
//! | prime | 30–39 |
//! | elder | 40–49 |
//! | celestial | 50+ |

use serde::{Deserialize, Serialize};

use crate::constants::STAGE_FIRST_LEVELS;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EvolutionStage {
    Egg,
    Hatching,
    Baby,
    Larvae,
    Young,
    Juvenile,
    Teen,
    Maturing,
    Adult,
    Prime,
    Elder,
    Celestial,
    Unknown(String),
}

impl EvolutionStage {
    /// All known stages in evolution order.
    pub const ORDERED: [EvolutionStage; 12] = [
        EvolutionStage::Egg,
        EvolutionStage::Hatching,
        EvolutionStage::Baby,
        EvolutionStage::Larvae,
        EvolutionStage::Young,
        EvolutionStage::Juvenile,
        EvolutionStage::Teen,
        EvolutionStage::Maturing,
        EvolutionStage::Adult,
        EvolutionStage::Prime,
        EvolutionStage::Elder,
        EvolutionStage::Celestial,
    ];

    /// Case-insensitive: the backend has sent both `egg` and `EGG`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        Self::ORDERED
            .iter()
            .find(|stage| stage.as_str().eq_ignore_ascii_case(trimmed))
            .cloned()
            .unwrap_or_else(|| Self::Unknown(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            EvolutionStage::Egg => "egg",
            EvolutionStage::Hatching => "hatching",
            EvolutionStage::Baby => "baby",
            EvolutionStage::Larvae => "larvae",
            EvolutionStage::Young => "young",
            EvolutionStage::Juvenile => "juvenile",
            EvolutionStage::Teen => "teen",
            EvolutionStage::Maturing => "maturing",
            EvolutionStage::Adult => "adult",
            EvolutionStage::Prime => "prime",
            EvolutionStage::Elder => "elder",
            EvolutionStage::Celestial => "celestial",
            EvolutionStage::Unknown(raw) => raw,
        }
    }

    /// Position in evolution order, `None` for unknown stages.
    pub fn index(&self) -> Option<usize> {
        Self::ORDERED.iter().position(|s| s == self)
    }

    /// First level at which the backend promotes a pet into this stage.
    pub fn first_level(&self) -> Option<u32> {
        self.index().map(|i| STAGE_FIRST_LEVELS[i])
    }
}

impl From<String> for EvolutionStage {
    fn from(raw: String) -> Self {
        match Self::parse(&raw) {
            Self::Unknown(_) => Self::Unknown(raw),
            known => known,
        }
    }
}

impl From<EvolutionStage> for String {
    fn from(stage: EvolutionStage) -> Self {
        match stage {
            EvolutionStage::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

// ============================================================================
// SPRITES
// ============================================================================

/// A stage's sprite: a stable identifier plus the glyphs that draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sprite {
    pub id: &'static str,
    pub glyph: &'static str,
    /// Sparkle row drawn under or over the main glyph. Empty for none.
    pub accent: &'static str,
}

pub const UNKNOWN_SPRITE: Sprite = Sprite {
    id: "sprite-unknown",
    glyph: "👽",
    accent: "",
};

pub fn derive_evolution_display(stage: &EvolutionStage) -> Sprite {
    match stage {
        EvolutionStage::Egg => Sprite {
            id: "sprite-egg",
            glyph: "🥚",
            accent: "",
        },
        EvolutionStage::Hatching => Sprite {
            id: "sprite-hatching",
            glyph: "🥚",
            accent: "✨",
        },
        EvolutionStage::Baby => Sprite {
            id: "sprite-baby",
            glyph: "👶",
            accent: "💫",
        },
        EvolutionStage::Larvae => Sprite {
            id: "sprite-larvae",
            glyph: "👽",
            accent: "💫",
        },
        EvolutionStage::Young => Sprite {
            id: "sprite-young",
            glyph: "🐛",
            accent: "✨💫",
        },
        EvolutionStage::Juvenile => Sprite {
            id: "sprite-juvenile",
            glyph: "👾",
            accent: "✨💫✨",
        },
        EvolutionStage::Teen => Sprite {
            id: "sprite-teen",
            glyph: "🤖",
            accent: "⭐💫⭐",
        },
        EvolutionStage::Maturing => Sprite {
            id: "sprite-maturing",
            glyph: "🦾",
            accent: "🌟✨🌟",
        },
        EvolutionStage::Adult => Sprite {
            id: "sprite-adult",
            glyph: "🛸",
            accent: "🌟💫🌟",
        },
        EvolutionStage::Prime => Sprite {
            id: "sprite-prime",
            glyph: "🚀",
            accent: "✨🌟✨🌟✨",
        },
        EvolutionStage::Elder => Sprite {
            id: "sprite-elder",
            glyph: "🌠",
            accent: "✨🌟✨",
        },
        EvolutionStage::Celestial => Sprite {
            id: "sprite-celestial",
            glyph: "🌌",
            accent: "✨🌟✨",
        },
        EvolutionStage::Unknown(_) => UNKNOWN_SPRITE,
    }
}

/// Sprite lookup straight from a backend string.
pub fn derive_evolution_display_str(raw: &str) -> Sprite {
    derive_evolution_display(&EvolutionStage::parse(raw))
}

// ============================================================================
// STAGE / LEVEL RELATIONSHIP
// ============================================================================

/// The stage the backend's promotion table assigns to `level`.
/// Levels below 1 are treated as 1.
pub fn nominal_stage_for_level(level: u32) -> EvolutionStage {
    let level = level.max(1);
    let idx = STAGE_FIRST_LEVELS
        .iter()
        .rposition(|first| level >= *first)
        .unwrap_or(0);
    EvolutionStage::ORDERED[idx].clone()
}

/// Whether a reported stage agrees with the reported level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StageConsistency {
    Consistent,
    Mismatch { expected: EvolutionStage },
    /// The stage is not one we know, so nothing can be compared.
    Undetermined,
}

pub fn stage_level_consistency(stage: &EvolutionStage, level: u32) -> StageConsistency {
    if stage.index().is_none() {
        return StageConsistency::Undetermined;
    }
    let expected = nominal_stage_for_level(level);
    if &expected == stage {
        StageConsistency::Consistent
    } else {
        StageConsistency::Mismatch { expected }
    }
}

/// Level at which the pet leaves `stage`. `None` at the final stage and for
/// unknown stages.
pub fn next_evolution_level(stage: &EvolutionStage) -> Option<u32> {
    let idx = stage.index()?;
    STAGE_FIRST_LEVELS.get(idx + 1).copied()
}

/// Level shown in the pet header. An egg always reads as level 1; every
/// other stage shows the reported level unchanged. Matching goes through
/// [`EvolutionStage::parse`], so `"EGG"` counts as an egg too.
pub fn display_level(stage: &EvolutionStage, level: u32) -> u32 {
    match stage {
        EvolutionStage::Egg => 1,
        _ => level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(
            derive_evolution_display_str("EGG"),
            derive_evolution_display_str("egg")
        );
        assert_eq!(
            derive_evolution_display_str("Celestial").id,
            "sprite-celestial"
        );
        assert_eq!(derive_evolution_display_str("tEeN").id, "sprite-teen");
    }

    #[test]
    fn unmatched_stage_gets_unknown_sprite() {
        assert_eq!(derive_evolution_display_str("chrysalis"), UNKNOWN_SPRITE);
        assert_eq!(derive_evolution_display_str(""), UNKNOWN_SPRITE);
    }

    #[test]
    fn every_stage_has_unique_sprite_id() {
        let ids: Vec<_> = EvolutionStage::ORDERED
            .iter()
            .map(|s| derive_evolution_display(s).id)
            .collect();
        for (i, id) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(id), "duplicate {}", id);
            assert_ne!(*id, UNKNOWN_SPRITE.id);
        }
    }

    #[test]
    fn nominal_table_matches_level_ranges() {
        assert_eq!(nominal_stage_for_level(0), EvolutionStage::Egg);
        assert_eq!(nominal_stage_for_level(1), EvolutionStage::Egg);
        assert_eq!(nominal_stage_for_level(2), EvolutionStage::Hatching);
        assert_eq!(nominal_stage_for_level(4), EvolutionStage::Baby);
        assert_eq!(nominal_stage_for_level(6), EvolutionStage::Larvae);
        assert_eq!(nominal_stage_for_level(8), EvolutionStage::Young);
        assert_eq!(nominal_stage_for_level(10), EvolutionStage::Juvenile);
        assert_eq!(nominal_stage_for_level(14), EvolutionStage::Teen);
        assert_eq!(nominal_stage_for_level(19), EvolutionStage::Maturing);
        assert_eq!(nominal_stage_for_level(29), EvolutionStage::Adult);
        assert_eq!(nominal_stage_for_level(39), EvolutionStage::Prime);
        assert_eq!(nominal_stage_for_level(49), EvolutionStage::Elder);
        assert_eq!(nominal_stage_for_level(50), EvolutionStage::Celestial);
        assert_eq!(nominal_stage_for_level(u32::MAX), EvolutionStage::Celestial);
    }

    #[test]
    fn nominal_stage_is_monotonic() {
        let mut prev = 0;
        for level in 1..=120 {
            let idx = nominal_stage_for_level(level).index().unwrap();
            assert!(idx >= prev, "stage regressed at level {}", level);
            prev = idx;
        }
    }

    #[test]
    fn mismatch_is_reported_not_fixed() {
        let egg = EvolutionStage::Egg;
        assert_eq!(
            stage_level_consistency(&egg, 10),
            StageConsistency::Mismatch {
                expected: EvolutionStage::Juvenile
            }
        );
        // Reporting a mismatch does not change what gets drawn.
        assert_eq!(derive_evolution_display(&egg).id, "sprite-egg");
        assert_eq!(
            stage_level_consistency(&EvolutionStage::Teen, 12),
            StageConsistency::Consistent
        );
        assert_eq!(
            stage_level_consistency(&EvolutionStage::parse("mystery"), 12),
            StageConsistency::Undetermined
        );
    }

    #[test]
    fn next_evolution_levels() {
        assert_eq!(next_evolution_level(&EvolutionStage::Egg), Some(2));
        assert_eq!(next_evolution_level(&EvolutionStage::Teen), Some(15));
        assert_eq!(next_evolution_level(&EvolutionStage::Elder), Some(50));
        assert_eq!(next_evolution_level(&EvolutionStage::Celestial), None);
        assert_eq!(next_evolution_level(&EvolutionStage::parse("??")), None);
    }

    #[test]
    fn egg_header_always_reads_level_one() {
        assert_eq!(display_level(&EvolutionStage::Egg, 7), 1);
        assert_eq!(display_level(&EvolutionStage::Adult, 7), 7);
        assert_eq!(display_level(&EvolutionStage::parse("EGG"), 3), 1);
    }

    #[test]
    fn parse_keeps_raw_unknown_value() {
        let stage = EvolutionStage::from("Nymph".to_string());
        assert_eq!(stage.as_str(), "Nymph");
        let back: String = stage.into();
        assert_eq!(back, "Nymph");
        let known: String = EvolutionStage::from("PRIME".to_string()).into();
        assert_eq!(known, "prime");
    }
}
