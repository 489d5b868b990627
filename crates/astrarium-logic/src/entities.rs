//! Backend snapshot types.
//!
//! These mirror the JSON the Astrarium backend sends and accepts. Field names
//! are the backend's snake_case names. Timestamps stay as opaque ISO-8601
//! strings. Gauges the backend stores as floats (`luminosity`, …) are
//! rounded to the nearest integer on the way in. Values that feed a
//! threshold are converted so the threshold still holds exactly against the
//! raw float: `health_score` is floored and `star_power` is rounded up.
//!
//! Snapshots are read-only here: nothing in this crate mutates one after it
//! is parsed.

use serde::{Deserialize, Deserializer, Serialize};

use crate::decay::DecayUrgency;
use crate::evolution::EvolutionStage;
use crate::mood::PetMood;
use crate::pet::PetSpecies;

/// Accepts a JSON integer or float and rounds to the nearest integer.
fn rounded<'de, D: Deserializer<'de>>(d: D) -> Result<i32, D::Error> {
    let v = f64::deserialize(d)?;
    Ok(v.round() as i32)
}

/// Like [`rounded`], but negative values become 0.
fn rounded_unsigned<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    let v = f64::deserialize(d)?;
    Ok(v.round().max(0.0) as u32)
}

/// Floors, so `x >= t` holds for an integer threshold `t` exactly when it
/// held for the raw float.
fn floored<'de, D: Deserializer<'de>>(d: D) -> Result<i32, D::Error> {
    let v = f64::deserialize(d)?;
    Ok(v.floor() as i32)
}

/// Rounds up, so `ceil(x / n)` is unchanged for any integer `n`.
fn ceiled<'de, D: Deserializer<'de>>(d: D) -> Result<i32, D::Error> {
    let v = f64::deserialize(d)?;
    Ok(v.ceil() as i32)
}

fn rounded_opt<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i32>, D::Error> {
    let v = Option::<f64>::deserialize(d)?;
    Ok(v.map(|v| v.round() as i32))
}

// ============================================================================
// USERS & AUTH
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(deserialize_with = "rounded_unsigned")]
    pub streak_count: u32,
    #[serde(default)]
    pub last_practice_date: Option<String>,
    #[serde(deserialize_with = "rounded_unsigned")]
    pub total_xp: u32,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserCreate {
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLogin {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: UserProfile,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

// ============================================================================
// SKILLS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub skill_name: String,
    #[serde(default)]
    pub category: Option<String>,
    /// 1–10.
    #[serde(deserialize_with = "rounded")]
    pub proficiency_level: i32,
    /// 0–100. Higher is healthier.
    #[serde(deserialize_with = "floored")]
    pub health_score: i32,
    /// 0–100.
    #[serde(deserialize_with = "ceiled")]
    pub star_power: i32,
    #[serde(default)]
    pub last_used: Option<String>,
    #[serde(default)]
    pub last_practiced: Option<String>,
    #[serde(default)]
    pub decay_rate: Option<f64>,
    #[serde(default)]
    pub next_review_date: Option<String>,
    #[serde(default)]
    pub review_interval_days: Option<f64>,
    #[serde(default)]
    pub ease_factor: Option<f64>,
    #[serde(default)]
    pub consecutive_correct: u32,
    #[serde(default)]
    pub consecutive_wrong: u32,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
impl SkillRecord {
    /// Test fixture: mid-range proficiency and star power.
    pub(crate) fn new(id: i64, skill_name: &str, health_score: i32) -> Self {
        Self {
            id,
            user_id: None,
            skill_name: skill_name.to_string(),
            category: None,
            proficiency_level: 5,
            health_score,
            star_power: 50,
            last_used: None,
            last_practiced: None,
            decay_rate: None,
            next_review_date: None,
            review_interval_days: None,
            ease_factor: None,
            consecutive_correct: 0,
            consecutive_wrong: 0,
            created_at: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillCreate {
    pub skill_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proficiency_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_used: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star_power: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proficiency_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_used: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star_power: Option<i32>,
}

/// A decaying skill as reported by `/skills/decaying`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayInfo {
    pub skill: SkillRecord,
    #[serde(deserialize_with = "rounded_unsigned")]
    pub days_idle: u32,
    /// Authoritative; never recomputed client-side.
    pub urgency: DecayUrgency,
    #[serde(default)]
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecommendation {
    pub skill: SkillRecord,
    #[serde(default)]
    pub reason: String,
    pub urgency: DecayUrgency,
    #[serde(default)]
    pub suggested_questions: u32,
    #[serde(default)]
    pub estimated_time_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

// ============================================================================
// QUESTIONS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionType {
    MultipleChoice,
    OpenEnded,
    Unknown(String),
}

impl QuestionType {
    pub fn as_str(&self) -> &str {
        match self {
            QuestionType::MultipleChoice => "multiple_choice",
            QuestionType::OpenEnded => "open_ended",
            QuestionType::Unknown(raw) => raw,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "Multiple Choice",
            QuestionType::OpenEnded | QuestionType::Unknown(_) => "Open Ended",
        }
    }
}

impl From<String> for QuestionType {
    fn from(raw: String) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "multiple_choice" => Self::MultipleChoice,
            "open_ended" => Self::OpenEnded,
            _ => Self::Unknown(raw),
        }
    }
}

impl From<QuestionType> for String {
    fn from(t: QuestionType) -> Self {
        t.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Unknown(String),
}

impl Difficulty {
    pub fn as_str(&self) -> &str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Unknown(raw) => raw,
        }
    }
}

impl From<String> for Difficulty {
    fn from(raw: String) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "easy" => Self::Easy,
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            _ => Self::Unknown(raw),
        }
    }
}

impl From<Difficulty> for String {
    fn from(d: Difficulty) -> Self {
        d.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub question_id: i64,
    #[serde(default)]
    pub skill_id: Option<i64>,
    pub question_text: String,
    pub question_type: QuestionType,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub correct_answer: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    pub difficulty: Difficulty,
    /// XP awarded for a correct answer.
    #[serde(default)]
    pub cosmic_reward: u32,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionGenerate {
    pub skill_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_type: Option<QuestionType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerSubmission {
    pub question_id: i64,
    pub user_answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_taken_seconds: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub is_correct: bool,
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub xp_earned: i32,
    #[serde(deserialize_with = "rounded")]
    pub skill_health_change: i32,
    #[serde(default)]
    pub pet_mood: String,
    #[serde(default)]
    pub pet_message: String,
    #[serde(default)]
    pub next_review_date: Option<String>,
    #[serde(default)]
    pub review_interval_days: Option<f64>,
    #[serde(default, deserialize_with = "rounded_opt")]
    pub pet_luminosity_change: Option<i32>,
    #[serde(default, deserialize_with = "rounded_opt")]
    pub pet_knowledge_hunger_change: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerHistory {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub question_id: i64,
    pub user_answer: String,
    pub is_correct: bool,
    #[serde(default)]
    pub answered_at: Option<String>,
    #[serde(default)]
    pub question: Option<Question>,
}

// ============================================================================
// PETS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub species: PetSpecies,
    /// Reported independently of `evolution_stage`; the two may disagree.
    #[serde(deserialize_with = "rounded_unsigned")]
    pub level: u32,
    #[serde(deserialize_with = "rounded_unsigned")]
    pub experience: u32,
    pub evolution_stage: EvolutionStage,
    pub mood: PetMood,
    #[serde(deserialize_with = "rounded")]
    pub luminosity: i32,
    #[serde(deserialize_with = "rounded")]
    pub energy: i32,
    #[serde(deserialize_with = "rounded")]
    pub knowledge_hunger: i32,
    #[serde(deserialize_with = "rounded")]
    pub cosmic_resonance: i32,
    /// HSL hue, 0–360.
    #[serde(default, deserialize_with = "rounded")]
    pub color_hue: i32,
    #[serde(default)]
    pub particle_effect: Option<String>,
    #[serde(default)]
    pub total_skills_mastered: u32,
    #[serde(default)]
    pub hatched_at: Option<String>,
    #[serde(default)]
    pub last_fed: Option<String>,
    #[serde(default)]
    pub last_interaction: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetState {
    #[serde(default)]
    pub narrative: String,
    pub mood: PetMood,
    pub evolution_stage: EvolutionStage,
    #[serde(deserialize_with = "rounded_unsigned")]
    pub level: u32,
    #[serde(deserialize_with = "rounded_unsigned")]
    pub next_evolution_at: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetInteractionResult {
    pub message: String,
    #[serde(default, deserialize_with = "rounded")]
    pub energy_change: i32,
    #[serde(default)]
    pub new_mood: Option<PetMood>,
}

// ==================== PET DEBUG ====================

/// Response of the debug force-evolve endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForceEvolveResult {
    pub message: String,
    pub old_stage: EvolutionStage,
    pub new_stage: EvolutionStage,
    #[serde(deserialize_with = "rounded_unsigned")]
    pub old_level: u32,
    #[serde(deserialize_with = "rounded_unsigned")]
    pub new_level: u32,
    #[serde(deserialize_with = "rounded_unsigned")]
    pub xp_gained: u32,
    #[serde(deserialize_with = "rounded_unsigned")]
    pub current_xp: u32,
}

/// Request body for the debug decay-rate endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecayRateUpdate {
    pub multiplier: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayRateResult {
    pub message: String,
    pub multiplier: f64,
    #[serde(default)]
    pub note: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_accepts_float_gauges() {
        let json = r#"{
            "id": 3, "skill_name": "SQL", "proficiency_level": 5.0,
            "health_score": 79.6, "star_power": 50.0,
            "last_practiced": null, "created_at": "2025-01-01T00:00:00"
        }"#;
        let skill: SkillRecord = serde_json::from_str(json).unwrap();
        assert_eq!(skill.health_score, 79);
        assert_eq!(skill.proficiency_level, 5);
        assert!(skill.last_practiced.is_none());
        assert!(skill.next_review_date.is_none());
    }

    fn skill_with(health: &str, star_power: &str) -> SkillRecord {
        let json = format!(
            r#"{{"id": 1, "skill_name": "Go", "proficiency_level": 4,
                "health_score": {}, "star_power": {}}}"#,
            health, star_power
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn float_health_bands_against_raw_value() {
        use crate::health::{classify_health_urgency, HealthTier};

        let cases = [
            ("80.0", HealthTier::Healthy),
            ("79.6", HealthTier::NeedsPractice),
            ("79.99", HealthTier::NeedsPractice),
            ("60", HealthTier::NeedsPractice),
            ("59.5", HealthTier::Decaying),
            ("40.0", HealthTier::Decaying),
            ("39.5", HealthTier::Critical),
            ("0.4", HealthTier::Critical),
        ];
        for (raw, tier) in cases {
            let skill = skill_with(raw, "50");
            assert_eq!(
                classify_health_urgency(skill.health_score).tier,
                tier,
                "health {}",
                raw
            );
        }
    }

    #[test]
    fn float_star_power_rounds_up() {
        assert_eq!(skill_with("50", "40.3").star_power, 41);
        assert_eq!(skill_with("50", "40").star_power, 40);
        assert_eq!(skill_with("50", "0.0").star_power, 0);
    }

    #[test]
    fn decay_info_parses_lowercase_urgency() {
        let json = r#"{
            "skill": {"id": 1, "skill_name": "Go", "proficiency_level": 3,
                      "health_score": 22, "star_power": 10},
            "days_idle": 12, "urgency": "critical", "recommendation": "Practice now"
        }"#;
        let info: DecayInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.urgency, DecayUrgency::Critical);
        assert_eq!(info.days_idle, 12);
    }

    #[test]
    fn pet_keeps_unknown_enums() {
        let json = r#"{
            "id": 1, "name": "Zib", "species": "nebula_sprite", "mood": "sulking",
            "luminosity": 88.4, "energy": 70, "knowledge_hunger": 50.5,
            "cosmic_resonance": 50, "evolution_stage": "CHRYSALIS",
            "level": 4, "experience": 130, "color_hue": 240
        }"#;
        let pet: PetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(pet.mood, PetMood::Unknown("sulking".into()));
        assert_eq!(pet.evolution_stage, EvolutionStage::Unknown("CHRYSALIS".into()));
        assert_eq!(pet.species, PetSpecies::NebulaSprite);
        assert_eq!(pet.luminosity, 88);
        assert_eq!(pet.knowledge_hunger, 51);

        let back = serde_json::to_value(&pet).unwrap();
        assert_eq!(back["mood"], "sulking");
        assert_eq!(back["evolution_stage"], "CHRYSALIS");
    }

    #[test]
    fn user_negative_counters_floor_at_zero() {
        let json = r#"{"streak_count": -3, "total_xp": 250}"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(user.streak_count, 0);
        assert_eq!(user.total_xp, 250);
        assert!(user.is_active);
    }

    #[test]
    fn request_bodies_omit_unset_fields() {
        let body = serde_json::to_value(SkillUpdate {
            health_score: Some(90),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"health_score": 90}));

        let gen = serde_json::to_value(QuestionGenerate {
            skill_id: 7,
            difficulty: Some(Difficulty::Hard),
            question_type: None,
        })
        .unwrap();
        assert_eq!(gen, serde_json::json!({"skill_id": 7, "difficulty": "hard"}));
    }

    #[test]
    fn answer_result_optional_pet_deltas() {
        let json = r#"{
            "is_correct": true, "correct_answer": "B", "explanation": null,
            "xp_earned": 15, "skill_health_change": 4.6, "pet_mood": "radiant",
            "pet_message": "Yum!", "review_interval_days": 2.5,
            "pet_luminosity_change": 12.0
        }"#;
        let result: AnswerResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.skill_health_change, 5);
        assert_eq!(result.pet_luminosity_change, Some(12));
        assert_eq!(result.pet_knowledge_hunger_change, None);
    }

    #[test]
    fn question_type_labels() {
        let q: QuestionType = "multiple_choice".to_string().into();
        assert_eq!(q.label(), "Multiple Choice");
        let q: QuestionType = "essay".to_string().into();
        assert_eq!(q.as_str(), "essay");
        assert_eq!(q.label(), "Open Ended");
    }
}
