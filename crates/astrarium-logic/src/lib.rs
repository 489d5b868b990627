//! Pure classification rules for Astrarium.
//!
//! This crate turns raw backend snapshots (users, skills, decay reports,
//! pets) into the discrete categories a dashboard draws: health bands,
//! urgency styles, mood colors, evolution sprites, levels, and progress
//! bars. It does no I/O and holds no state. Every function is total and
//! degrades to a documented default instead of failing, so rendering code
//! never has to handle an error from here.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`constants`] | Band thresholds, XP span, stage first-levels |
//! | [`decay`] | Backend urgency tiers and their display styles |
//! | [`entities`] | Serde snapshot types matching the backend JSON |
//! | [`evolution`] | 12 evolution stages, sprites, stage/level table |
//! | [`health`] | Skill health banding (Healthy → Critical), bar tints |
//! | [`mood`] | Pet mood emoji and colors |
//! | [`pet`] | Pet species, card labels, days since hatching |
//! | [`progression`] | Levels, streak badges, star ratings, progress bars, deltas |
//! | [`views`] | Per-card bundles derived from one snapshot |

pub mod constants;
pub mod decay;
pub mod entities;
pub mod evolution;
pub mod health;
pub mod mood;
pub mod pet;
pub mod progression;
pub mod views;
