//! Decay urgency presentation.
//!
//! The backend assigns every decaying skill one of five urgency tiers. The
//! tier is authoritative: nothing here re-derives it from `days_idle` or
//! the health score. This module only chooses how each tier is displayed,
//! and how a list of decaying skills is ordered.
//!
//! The backend has been seen sending both `"CRITICAL"` and `"critical"`,
//! so tier names are matched case-insensitively. Anything else is kept as
//! [`DecayUrgency::Unknown`] and gets the neutral style.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::entities::DecayInfo;

/// Backend-assigned urgency tier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DecayUrgency {
    Critical,
    High,
    Medium,
    Low,
    Maintenance,
    /// A tier name this client does not know, kept verbatim.
    Unknown(String),
}

impl DecayUrgency {
    /// The five known tiers, most urgent first.
    pub const KNOWN: [DecayUrgency; 5] = [
        DecayUrgency::Critical,
        DecayUrgency::High,
        DecayUrgency::Medium,
        DecayUrgency::Low,
        DecayUrgency::Maintenance,
    ];

    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("critical") {
            Self::Critical
        } else if trimmed.eq_ignore_ascii_case("high") {
            Self::High
        } else if trimmed.eq_ignore_ascii_case("medium") {
            Self::Medium
        } else if trimmed.eq_ignore_ascii_case("low") {
            Self::Low
        } else if trimmed.eq_ignore_ascii_case("maintenance") {
            Self::Maintenance
        } else {
            Self::Unknown(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DecayUrgency::Critical => "CRITICAL",
            DecayUrgency::High => "HIGH",
            DecayUrgency::Medium => "MEDIUM",
            DecayUrgency::Low => "LOW",
            DecayUrgency::Maintenance => "MAINTENANCE",
            DecayUrgency::Unknown(raw) => raw,
        }
    }

    /// Sort rank: 0 is the most urgent. Unknown tiers sort last.
    pub fn priority(&self) -> u8 {
        match self {
            DecayUrgency::Critical => 0,
            DecayUrgency::High => 1,
            DecayUrgency::Medium => 2,
            DecayUrgency::Low => 3,
            DecayUrgency::Maintenance => 4,
            DecayUrgency::Unknown(_) => 5,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, DecayUrgency::Unknown(_))
    }
}

impl From<String> for DecayUrgency {
    fn from(raw: String) -> Self {
        match Self::parse(&raw) {
            Self::Unknown(_) => Self::Unknown(raw),
            known => known,
        }
    }
}

impl From<DecayUrgency> for String {
    fn from(urgency: DecayUrgency) -> Self {
        match urgency {
            DecayUrgency::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Display style for one urgency tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecayStyle {
    pub label: &'static str,
    /// Card background class in the decay monitor.
    pub background_class: &'static str,
    /// Card text class in the decay monitor.
    pub text_class: &'static str,
    /// Icon shown next to the skill name in the decay monitor.
    pub icon: &'static str,
    /// Icon shown on recommendation cards.
    pub recommendation_icon: &'static str,
    /// Badge class on recommendation cards.
    pub badge_class: &'static str,
}

const UNKNOWN_STYLE: DecayStyle = DecayStyle {
    label: "Unknown",
    background_class: "bg-gray-100 dark:bg-gray-900/20",
    text_class: "text-gray-800 dark:text-gray-200",
    icon: "❓",
    recommendation_icon: "📋",
    badge_class: "bg-gray-500/20 text-gray-500",
};

/// Select the presentation style for a backend urgency tier.
pub fn classify_decay_urgency(urgency: &DecayUrgency) -> DecayStyle {
    match urgency {
        DecayUrgency::Critical => DecayStyle {
            label: "Critical",
            background_class: "bg-red-100 dark:bg-red-900/20",
            text_class: "text-red-800 dark:text-red-200",
            icon: "🚨",
            recommendation_icon: "🚨",
            badge_class: "bg-red-500/20 text-red-500",
        },
        DecayUrgency::High => DecayStyle {
            label: "High",
            background_class: "bg-orange-100 dark:bg-orange-900/20",
            text_class: "text-orange-800 dark:text-orange-200",
            icon: "⚠️",
            recommendation_icon: "⚠️",
            badge_class: "bg-orange-500/20 text-orange-500",
        },
        DecayUrgency::Medium => DecayStyle {
            label: "Medium",
            background_class: "bg-yellow-100 dark:bg-yellow-900/20",
            text_class: "text-yellow-800 dark:text-yellow-200",
            icon: "⚡",
            recommendation_icon: "📊",
            badge_class: "bg-yellow-500/20 text-yellow-500",
        },
        DecayUrgency::Low => DecayStyle {
            label: "Low",
            background_class: "bg-blue-100 dark:bg-blue-900/20",
            text_class: "text-blue-800 dark:text-blue-200",
            icon: "💫",
            recommendation_icon: "📈",
            badge_class: "bg-blue-500/20 text-blue-500",
        },
        DecayUrgency::Maintenance => DecayStyle {
            label: "Maintenance",
            background_class: "bg-green-100 dark:bg-green-900/20",
            text_class: "text-green-800 dark:text-green-200",
            icon: "✨",
            recommendation_icon: "✅",
            badge_class: "bg-green-500/20 text-green-500",
        },
        DecayUrgency::Unknown(_) => UNKNOWN_STYLE,
    }
}

/// Style for a decay record. `days_idle` and the skill's health are not
/// consulted; the record's own urgency decides.
pub fn decay_style(info: &DecayInfo) -> DecayStyle {
    classify_decay_urgency(&info.urgency)
}

/// Order decaying skills most urgent first, then longest idle first.
/// Equal entries keep their backend order.
pub fn sort_by_urgency(infos: &mut [DecayInfo]) {
    infos.sort_by_key(|info| (info.urgency.priority(), Reverse(info.days_idle)));
}

/// Human-readable idle duration for the decay monitor.
pub fn idle_caption(days_idle: u32) -> String {
    match days_idle {
        1 => "1 day since last practice".to_string(),
        n => format!("{} days since last practice", n),
    }
}
