//! Per-card derived views.
//!
//! Each view bundles everything one dashboard card needs from a single
//! snapshot. Views are rebuilt from scratch on every poll and hold no
//! references back into the snapshot.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::decay::{classify_decay_urgency, idle_caption, DecayStyle};
use crate::entities::{
    AnswerResult, DecayInfo, PetRecord, SkillRecommendation, SkillRecord, UserProfile,
};
use crate::evolution::{
    derive_evolution_display, display_level, next_evolution_level, stage_level_consistency,
    Sprite, StageConsistency,
};
use crate::health::{classify_health_urgency, health_bar_tint, BarTint, HealthBand};
use crate::mood::{derive_mood, MoodDisplay};
use crate::pet::{days_since_hatched, hatched_caption, skills_mastered_label, species_label};
use crate::progression::{
    answer_verdict, compute_experience_bar_fraction, compute_level, compute_streak_badge,
    hue_rotation, signed_change, star_glyphs, star_rating, stat_bar_percent, ChangeDisplay,
    LevelProgress, StreakBadge,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillView {
    pub skill_id: i64,
    pub name: String,
    pub health: HealthBand,
    pub health_color_class: &'static str,
    pub badge_class: &'static str,
    pub health_bar: u32,
    pub health_bar_tint: BarTint,
    pub star_power_bar: u32,
    /// Filled stars out of five.
    pub star_rating: u32,
    pub stars: String,
}

impl SkillView {
    pub fn derive(skill: &SkillRecord) -> Self {
        let health = classify_health_urgency(skill.health_score);
        let stars = star_rating(skill.star_power);
        Self {
            skill_id: skill.id,
            name: skill.skill_name.clone(),
            health,
            health_color_class: health.tier.color_class(),
            badge_class: health.tier.badge_class(),
            health_bar: stat_bar_percent(skill.health_score),
            health_bar_tint: health_bar_tint(skill.health_score),
            star_power_bar: stat_bar_percent(skill.star_power),
            star_rating: stars,
            stars: star_glyphs(stars),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecayView {
    pub skill: SkillView,
    pub style: DecayStyle,
    pub idle_caption: String,
    pub recommendation: String,
}

impl DecayView {
    pub fn derive(info: &DecayInfo) -> Self {
        Self {
            skill: SkillView::derive(&info.skill),
            style: classify_decay_urgency(&info.urgency),
            idle_caption: idle_caption(info.days_idle),
            recommendation: info.recommendation.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationView {
    pub skill: SkillView,
    pub style: DecayStyle,
    pub reason: String,
    pub suggested_questions: u32,
    pub estimated_time_minutes: u32,
}

impl RecommendationView {
    pub fn derive(rec: &SkillRecommendation) -> Self {
        Self {
            skill: SkillView::derive(&rec.skill),
            style: classify_decay_urgency(&rec.urgency),
            reason: rec.reason.clone(),
            suggested_questions: rec.suggested_questions,
            estimated_time_minutes: rec.estimated_time_minutes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserView {
    pub username: String,
    pub total_xp: u32,
    pub level: LevelProgress,
    pub streak: StreakBadge,
    pub streak_count: u32,
    pub status_label: &'static str,
}

impl UserView {
    pub fn derive(user: &UserProfile) -> Self {
        Self {
            username: user.username.clone(),
            total_xp: user.total_xp,
            level: compute_level(user.total_xp),
            streak: compute_streak_badge(user.streak_count),
            streak_count: user.streak_count,
            status_label: if user.is_active { "Active" } else { "Inactive" },
        }
    }
}

/// Gauge widths for the four pet stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PetGauges {
    pub luminosity: u32,
    pub energy: u32,
    pub knowledge_hunger: u32,
    pub cosmic_resonance: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PetView {
    pub name: String,
    pub species_label: String,
    pub mood: MoodDisplay,
    pub mood_label: String,
    pub sprite: Sprite,
    /// Level as reported by the backend.
    pub level: u32,
    /// Level shown in the card header (eggs read as level 1).
    pub header_level: u32,
    pub stage_label: String,
    pub consistency: StageConsistency,
    pub next_evolution_at: Option<u32>,
    pub gauges: PetGauges,
    pub experience: u32,
    pub experience_bar: u32,
    pub hue_rotation: u32,
    pub skills_mastered: String,
    pub days_since_hatched: Option<i64>,
    pub hatched_caption: String,
}

impl PetView {
    /// `now` feeds the days-since-hatched counter only.
    pub fn derive(pet: &PetRecord, now: DateTime<Utc>) -> Self {
        let days = days_since_hatched(pet.hatched_at.as_deref(), now);
        Self {
            name: pet.name.clone(),
            species_label: species_label(&pet.species),
            mood: derive_mood(&pet.mood),
            mood_label: pet.mood.as_str().to_string(),
            sprite: derive_evolution_display(&pet.evolution_stage),
            level: pet.level,
            header_level: display_level(&pet.evolution_stage, pet.level),
            stage_label: pet.evolution_stage.as_str().to_string(),
            consistency: stage_level_consistency(&pet.evolution_stage, pet.level),
            next_evolution_at: next_evolution_level(&pet.evolution_stage),
            gauges: PetGauges {
                luminosity: stat_bar_percent(pet.luminosity),
                energy: stat_bar_percent(pet.energy),
                knowledge_hunger: stat_bar_percent(pet.knowledge_hunger),
                cosmic_resonance: stat_bar_percent(pet.cosmic_resonance),
            },
            experience: pet.experience,
            experience_bar: compute_experience_bar_fraction(pet.experience),
            hue_rotation: hue_rotation(pet.color_hue),
            skills_mastered: skills_mastered_label(pet.total_skills_mastered),
            days_since_hatched: days,
            hatched_caption: hatched_caption(days),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerFeedbackView {
    pub verdict: &'static str,
    pub xp: ChangeDisplay,
    pub skill_health: ChangeDisplay,
    pub pet_luminosity: Option<ChangeDisplay>,
    pub pet_knowledge_hunger: Option<ChangeDisplay>,
    pub pet_message: String,
}

impl AnswerFeedbackView {
    pub fn derive(result: &AnswerResult) -> Self {
        Self {
            verdict: answer_verdict(result.is_correct),
            xp: signed_change(result.xp_earned),
            skill_health: signed_change(result.skill_health_change),
            pet_luminosity: result.pet_luminosity_change.map(signed_change),
            pet_knowledge_hunger: result.pet_knowledge_hunger_change.map(signed_change),
            pet_message: result.pet_message.clone(),
        }
    }
}
