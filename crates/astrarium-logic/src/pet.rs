//! Pet species and small pet-card labels.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: i64 = 86_400;

/// Species the backend hatches. The backend stores them lowercase
/// (`nebula_sprite`) while older clients sent uppercase (`NEBULA_SPRITE`),
/// so parsing ignores case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PetSpecies {
    #[default]
    NebulaSprite,
    StarCrawler,
    VoidWisp,
    CosmicBlob,
    QuantumBeetle,
    Unknown(String),
}

impl PetSpecies {
    pub const KNOWN: [PetSpecies; 5] = [
        PetSpecies::NebulaSprite,
        PetSpecies::StarCrawler,
        PetSpecies::VoidWisp,
        PetSpecies::CosmicBlob,
        PetSpecies::QuantumBeetle,
    ];

    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        Self::KNOWN
            .iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(trimmed))
            .cloned()
            .unwrap_or_else(|| Self::Unknown(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            PetSpecies::NebulaSprite => "nebula_sprite",
            PetSpecies::StarCrawler => "star_crawler",
            PetSpecies::VoidWisp => "void_wisp",
            PetSpecies::CosmicBlob => "cosmic_blob",
            PetSpecies::QuantumBeetle => "quantum_beetle",
            PetSpecies::Unknown(raw) => raw,
        }
    }
}

impl From<String> for PetSpecies {
    fn from(raw: String) -> Self {
        match Self::parse(&raw) {
            Self::Unknown(_) => Self::Unknown(raw),
            known => known,
        }
    }
}

impl From<PetSpecies> for String {
    fn from(species: PetSpecies) -> Self {
        match species {
            PetSpecies::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Species badge text: lowercase with spaces, e.g. "nebula sprite".
pub fn species_label(species: &PetSpecies) -> String {
    species.as_str().to_lowercase().replace('_', " ")
}

pub fn skills_mastered_label(total: u32) -> String {
    if total == 1 {
        "1 skill".to_string()
    } else {
        format!("{} skills", total)
    }
}

/// Parse a backend timestamp. The backend writes naive ISO-8601
/// (`2025-02-01T00:00:00`, optional fraction), read here as UTC. RFC 3339
/// strings with an offset are accepted as well.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Whole days between hatching and `now`, floored. `None` when the pet has
/// no hatch time or it cannot be parsed.
pub fn days_since_hatched(hatched_at: Option<&str>, now: DateTime<Utc>) -> Option<i64> {
    let hatched = parse_timestamp(hatched_at?)?;
    Some((now - hatched).num_seconds().div_euclid(SECONDS_PER_DAY))
}

pub fn hatched_caption(days: Option<i64>) -> String {
    match days {
        Some(d) => d.to_string(),
        None => "Not hatched yet".to_string(),
    }
}
