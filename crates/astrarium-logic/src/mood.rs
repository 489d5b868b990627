//! Pet mood display.

use serde::{Deserialize, Serialize};

/// The pet's emotional state as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PetMood {
    Radiant,
    Content,
    Dimming,
    Flickering,
    Eclipse,
    Unknown(String),
}

impl PetMood {
    pub const KNOWN: [PetMood; 5] = [
        PetMood::Radiant,
        PetMood::Content,
        PetMood::Dimming,
        PetMood::Flickering,
        PetMood::Eclipse,
    ];

    /// Exact match on the lowercase wire names.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "radiant" => Self::Radiant,
            "content" => Self::Content,
            "dimming" => Self::Dimming,
            "flickering" => Self::Flickering,
            "eclipse" => Self::Eclipse,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PetMood::Radiant => "radiant",
            PetMood::Content => "content",
            PetMood::Dimming => "dimming",
            PetMood::Flickering => "flickering",
            PetMood::Eclipse => "eclipse",
            PetMood::Unknown(raw) => raw,
        }
    }
}

impl From<String> for PetMood {
    fn from(raw: String) -> Self {
        match Self::parse(&raw) {
            Self::Unknown(_) => Self::Unknown(raw),
            known => known,
        }
    }
}

impl From<PetMood> for String {
    fn from(mood: PetMood) -> Self {
        match mood {
            PetMood::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// How a mood is drawn: the emoji beside the pet's name, its text color,
/// and the background of the mood badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoodDisplay {
    pub emoji: &'static str,
    pub color_class: &'static str,
    pub badge_class: &'static str,
}

pub const MOOD_FALLBACK: MoodDisplay = MoodDisplay {
    emoji: "❓",
    color_class: "text-gray-400",
    badge_class: "bg-gray-500",
};

pub fn derive_mood(mood: &PetMood) -> MoodDisplay {
    match mood {
        PetMood::Radiant => MoodDisplay {
            emoji: "✨",
            color_class: "text-yellow-400",
            badge_class: "bg-yellow-500",
        },
        PetMood::Content => MoodDisplay {
            emoji: "🌟",
            color_class: "text-blue-400",
            badge_class: "bg-green-500",
        },
        PetMood::Dimming => MoodDisplay {
            emoji: "🌙",
            color_class: "text-purple-400",
            badge_class: "bg-blue-500",
        },
        PetMood::Flickering => MoodDisplay {
            emoji: "⚡",
            color_class: "text-orange-400",
            badge_class: "bg-orange-500",
        },
        PetMood::Eclipse => MoodDisplay {
            emoji: "🌑",
            color_class: "text-gray-400",
            badge_class: "bg-red-500",
        },
        PetMood::Unknown(_) => MOOD_FALLBACK,
    }
}

/// Convenience for callers holding the raw backend string.
pub fn derive_mood_str(raw: &str) -> MoodDisplay {
    derive_mood(&PetMood::parse(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_moods() {
        assert_eq!(derive_mood(&PetMood::Radiant).emoji, "✨");
        assert_eq!(derive_mood(&PetMood::Content).emoji, "🌟");
        assert_eq!(derive_mood(&PetMood::Dimming).emoji, "🌙");
        assert_eq!(derive_mood(&PetMood::Flickering).emoji, "⚡");
        assert_eq!(derive_mood(&PetMood::Eclipse).emoji, "🌑");
    }

    #[test]
    fn unknown_mood_falls_back() {
        let d = derive_mood_str("unknown_value");
        assert_eq!(d, MOOD_FALLBACK);
        assert_eq!(d.emoji, "❓");
        assert_eq!(d.color_class, "text-gray-400");
    }

    #[test]
    fn mood_match_is_exact() {
        // The backend always sends lowercase moods.
        assert!(matches!(PetMood::parse("RADIANT"), PetMood::Unknown(_)));
        assert_eq!(derive_mood_str("RADIANT"), MOOD_FALLBACK);
    }

    #[test]
    fn known_moods_have_distinct_emoji() {
        let emoji: Vec<_> = PetMood::KNOWN.iter().map(|m| derive_mood(m).emoji).collect();
        for (i, a) in emoji.iter().enumerate() {
            assert!(!emoji[i + 1..].contains(a));
            assert_ne!(*a, MOOD_FALLBACK.emoji);
        }
    }

    #[test]
    fn round_trip_through_string() {
        for mood in PetMood::KNOWN {
            let raw: String = mood.clone().into();
            assert_eq!(PetMood::from(raw), mood);
        }
        let odd: String = PetMood::from("sulking".to_string()).into();
        assert_eq!(odd, "sulking");
    }
}
