//! Astrarium Headless Validation Harness
//!
//! Checks the dashboard classification rules and snapshot parsing without a
//! backend. Runs entirely in-process: no HTTP, no rendering.
//!
//! Usage:
//!   cargo run -p astrarium-simtest
//!   cargo run -p astrarium-simtest -- --verbose
//!   cargo run -p astrarium-simtest -- --seed 42
//!   cargo run -p astrarium-simtest -- --snapshot path/to/snapshot.json
//!
//! `--snapshot` skips validation and prints the derived views for a saved
//! backend snapshot as JSON.

use astrarium_logic::constants::STAGE_FIRST_LEVELS;
use astrarium_logic::decay::{classify_decay_urgency, sort_by_urgency, DecayUrgency};
use astrarium_logic::entities::{
    DecayInfo, PetRecord, SkillRecommendation, SkillRecord, UserProfile,
};
use astrarium_logic::evolution::{
    derive_evolution_display, derive_evolution_display_str, nominal_stage_for_level,
    stage_level_consistency, EvolutionStage, StageConsistency, UNKNOWN_SPRITE,
};
use astrarium_logic::health::{classify_health_urgency, HealthTier};
use astrarium_logic::mood::{derive_mood, derive_mood_str, PetMood, MOOD_FALLBACK};
use astrarium_logic::pet::parse_timestamp;
use astrarium_logic::progression::{
    compute_experience_bar_fraction, compute_level, compute_streak_badge, StreakTier,
};
use astrarium_logic::views::{DecayView, PetView, RecommendationView, SkillView, UserView};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

// ── Sample snapshot (shape of the backend's dashboard responses) ────────
const SAMPLE_SNAPSHOT_JSON: &str = include_str!("../data/sample_snapshot.json");
/// Clock used when deriving the sample, ten days after its pet hatched.
const SAMPLE_NOW: &str = "2025-01-12T09:00:00Z";

const DEFAULT_SEED: u64 = 0xA57A;
const RANDOM_ROUNDS: usize = 10_000;

/// One poll's worth of backend responses. Every section is optional.
#[derive(Debug, Default, Deserialize)]
struct Snapshot {
    #[serde(default)]
    user: Option<UserProfile>,
    #[serde(default)]
    skills: Vec<SkillRecord>,
    #[serde(default)]
    decaying: Vec<DecayInfo>,
    #[serde(default)]
    recommendations: Vec<SkillRecommendation>,
    #[serde(default)]
    pet: Option<PetRecord>,
}

/// Everything the dashboard renders for one snapshot.
#[derive(Debug, Serialize)]
struct Dashboard {
    user: Option<UserView>,
    skills: Vec<SkillView>,
    decaying: Vec<DecayView>,
    recommendations: Vec<RecommendationView>,
    pet: Option<PetView>,
}

impl Dashboard {
    fn derive(snapshot: &Snapshot, now: DateTime<Utc>) -> Self {
        let mut decaying = snapshot.decaying.clone();
        sort_by_urgency(&mut decaying);
        Self {
            user: snapshot.user.as_ref().map(UserView::derive),
            skills: snapshot.skills.iter().map(SkillView::derive).collect(),
            decaying: decaying.iter().map(DecayView::derive).collect(),
            recommendations: snapshot
                .recommendations
                .iter()
                .map(RecommendationView::derive)
                .collect(),
            pet: snapshot.pet.as_ref().map(|pet| PetView::derive(pet, now)),
        }
    }
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose");

    if let Some(path) = flag_value(&args, "--snapshot") {
        if let Err(e) = render_snapshot(path) {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        return;
    }

    let seed = match flag_value(&args, "--seed").map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(_)) => {
            log::warn!("Ignoring unparsable --seed, using {}", DEFAULT_SEED);
            DEFAULT_SEED
        }
        None => DEFAULT_SEED,
    };

    println!("=== Astrarium Validation Harness ===\n");

    let mut results = Vec::new();

    // 1. Sample snapshot parsing and derivation
    results.extend(validate_sample_snapshot(verbose));

    // 2. Health band sweep
    results.extend(validate_health_bands(verbose));

    // 3. Decay urgency styles
    results.extend(validate_decay_styles(verbose));

    // 4. Pet mood lookup
    results.extend(validate_moods(verbose));

    // 5. Evolution stages
    results.extend(validate_evolution(verbose));

    // 6. Level, streak and experience bar
    results.extend(validate_progression(verbose));

    // 7. Randomized purity sweep
    results.extend(validate_randomized(seed, verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn render_snapshot(path: &str) -> Result<(), String> {
    let raw = std::fs::read_to_string(path).map_err(|e| format!("Cannot read {}: {}", path, e))?;
    let snapshot: Snapshot =
        serde_json::from_str(&raw).map_err(|e| format!("Invalid snapshot {}: {}", path, e))?;
    log::info!(
        "Loaded snapshot: {} skills, {} decaying",
        snapshot.skills.len(),
        snapshot.decaying.len()
    );
    if let Some(pet) = &snapshot.pet {
        if let StageConsistency::Mismatch { expected } =
            stage_level_consistency(&pet.evolution_stage, pet.level)
        {
            log::warn!(
                "Pet stage {} disagrees with level {} (expected {})",
                pet.evolution_stage.as_str(),
                pet.level,
                expected.as_str()
            );
        }
    }
    let dashboard = Dashboard::derive(&snapshot, Utc::now());
    let json = serde_json::to_string_pretty(&dashboard).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}

// ── 1. Sample Snapshot ──────────────────────────────────────────────────

fn validate_sample_snapshot(verbose: bool) -> Vec<TestResult> {
    println!("--- Sample Snapshot ---");
    let mut results = Vec::new();

    let snapshot: Snapshot = match serde_json::from_str(SAMPLE_SNAPSHOT_JSON) {
        Ok(s) => s,
        Err(e) => {
            results.push(TestResult {
                name: "snapshot_parse".into(),
                passed: false,
                detail: format!("JSON parse error: {}", e),
            });
            return results;
        }
    };
    // Pinned so the hatched-days counter is stable
    let Some(now) = parse_timestamp(SAMPLE_NOW) else {
        results.push(TestResult {
            name: "snapshot_clock".into(),
            passed: false,
            detail: format!("unparsable clock {}", SAMPLE_NOW),
        });
        return results;
    };
    let dashboard = Dashboard::derive(&snapshot, now);

    // Every skill tier represented
    let tiers: Vec<HealthTier> = dashboard.skills.iter().map(|s| s.health.tier).collect();
    results.push(TestResult {
        name: "snapshot_skill_tiers".into(),
        passed: tiers
            == vec![
                HealthTier::Healthy,
                HealthTier::NeedsPractice,
                HealthTier::Decaying,
                HealthTier::Critical,
            ],
        detail: format!("{:?}", tiers),
    });

    // Decay monitor: most urgent first
    let order: Vec<&str> = dashboard
        .decaying
        .iter()
        .map(|d| d.skill.name.as_str())
        .collect();
    results.push(TestResult {
        name: "snapshot_decay_order".into(),
        passed: order == vec!["Guitar", "Calculus", "Spanish"],
        detail: order.join(" > "),
    });

    // Lowercase urgency from the backend still styles
    let icons: Vec<&str> = dashboard.decaying.iter().map(|d| d.style.icon).collect();
    results.push(TestResult {
        name: "snapshot_decay_icons".into(),
        passed: icons == vec!["🚨", "⚠️", "⚡"],
        detail: icons.concat(),
    });

    match &dashboard.user {
        Some(user) => results.push(TestResult {
            name: "snapshot_user_level".into(),
            passed: user.level.level == 15
                && user.level.xp_progress == 80
                && user.streak.tier == StreakTier::Blazing,
            detail: format!(
                "level {} ({}/100), streak {}",
                user.level.level, user.level.xp_progress, user.streak.emoji
            ),
        }),
        None => results.push(TestResult {
            name: "snapshot_user_level".into(),
            passed: false,
            detail: "no user in sample".into(),
        }),
    }

    match &dashboard.pet {
        Some(pet) => results.push(TestResult {
            name: "snapshot_pet".into(),
            passed: pet.sprite.id == "sprite-juvenile"
                && pet.consistency == StageConsistency::Consistent
                && pet.experience_bar == 40
                && pet.next_evolution_at == Some(11)
                && pet.mood.emoji == "🌟"
                && pet.days_since_hatched == Some(10),
            detail: format!(
                "{} {} lvl {} exp-bar {}% next {:?} hatched {}",
                pet.sprite.glyph, pet.stage_label, pet.level, pet.experience_bar,
                pet.next_evolution_at, pet.hatched_caption
            ),
        }),
        None => results.push(TestResult {
            name: "snapshot_pet".into(),
            passed: false,
            detail: "no pet in sample".into(),
        }),
    }

    // Missing sections are not errors
    let empty: Result<Snapshot, _> = serde_json::from_str("{}");
    results.push(TestResult {
        name: "snapshot_empty_ok".into(),
        passed: empty.is_ok(),
        detail: "empty snapshot parses".into(),
    });

    if verbose {
        println!("  Skills:");
        for s in &dashboard.skills {
            println!(
                "    {:10} health {:3} [{}]",
                s.name,
                s.health.score,
                s.health.label
            );
        }
    }

    results
}

// ── 2. Health Bands ─────────────────────────────────────────────────────

fn validate_health_bands(verbose: bool) -> Vec<TestResult> {
    println!("--- Health Bands ---");
    let mut results = Vec::new();

    // Sweep well past both ends; tier never improves as score drops
    let mut monotonic = true;
    let mut counts = [0u32; 4];
    let mut prev: Option<usize> = None;
    for score in (-50..=150).rev() {
        let band = classify_health_urgency(score);
        let rank = HealthTier::ALL
            .iter()
            .position(|t| *t == band.tier)
            .unwrap_or(usize::MAX);
        if let Some(p) = prev {
            if rank < p {
                monotonic = false;
            }
        }
        prev = Some(rank);
        if (0..=100).contains(&score) && rank < counts.len() {
            counts[rank] += 1;
        }
    }
    results.push(TestResult {
        name: "health_monotonic".into(),
        passed: monotonic,
        detail: "tier never improves as score decreases".into(),
    });

    let boundaries = [
        (100, HealthTier::Healthy),
        (80, HealthTier::Healthy),
        (79, HealthTier::NeedsPractice),
        (60, HealthTier::NeedsPractice),
        (59, HealthTier::Decaying),
        (40, HealthTier::Decaying),
        (39, HealthTier::Critical),
        (0, HealthTier::Critical),
        (-10, HealthTier::Critical),
        (250, HealthTier::Healthy),
    ];
    let misses: Vec<String> = boundaries
        .iter()
        .filter(|(score, tier)| classify_health_urgency(*score).tier != *tier)
        .map(|(score, _)| score.to_string())
        .collect();
    results.push(TestResult {
        name: "health_boundaries".into(),
        passed: misses.is_empty(),
        detail: if misses.is_empty() {
            "80/60/40 thresholds hold".into()
        } else {
            format!("misclassified scores: {}", misses.join(", "))
        },
    });

    // Clamped score lands in 0..=100
    let clamped = [-500, 0, 55, 100, 9000]
        .iter()
        .all(|s| (0..=100).contains(&classify_health_urgency(*s).score));
    results.push(TestResult {
        name: "health_clamped".into(),
        passed: clamped,
        detail: "scores clamp to 0..=100".into(),
    });

    if verbose {
        println!(
            "  0..=100 distribution: healthy={} needs={} decaying={} critical={}",
            counts[0], counts[1], counts[2], counts[3]
        );
    }

    results
}

// ── 3. Decay Styles ─────────────────────────────────────────────────────

fn validate_decay_styles(_verbose: bool) -> Vec<TestResult> {
    println!("--- Decay Styles ---");
    let mut results = Vec::new();

    let unknown = classify_decay_urgency(&DecayUrgency::Unknown("someday".into()));
    let styles: Vec<_> = DecayUrgency::KNOWN
        .iter()
        .map(classify_decay_urgency)
        .collect();

    let mut icons: Vec<&str> = styles.iter().map(|s| s.icon).collect();
    icons.sort_unstable();
    icons.dedup();
    results.push(TestResult {
        name: "decay_distinct_icons".into(),
        passed: icons.len() == DecayUrgency::KNOWN.len(),
        detail: format!("{} distinct icons", icons.len()),
    });

    results.push(TestResult {
        name: "decay_known_not_fallback".into(),
        passed: styles.iter().all(|s| *s != unknown),
        detail: "every known tier has its own style".into(),
    });

    results.push(TestResult {
        name: "decay_unknown_fallback".into(),
        passed: unknown.icon == "❓" && unknown.recommendation_icon == "📋",
        detail: format!("unknown → {} / {}", unknown.icon, unknown.recommendation_icon),
    });

    let case_blind = ["critical", "CRITICAL", " Critical "]
        .iter()
        .all(|raw| DecayUrgency::parse(raw) == DecayUrgency::Critical);
    results.push(TestResult {
        name: "decay_parse_case_blind".into(),
        passed: case_blind,
        detail: "lowercase, uppercase and padded forms agree".into(),
    });

    results
}

// ── 4. Moods ────────────────────────────────────────────────────────────

fn validate_moods(verbose: bool) -> Vec<TestResult> {
    println!("--- Pet Moods ---");
    let mut results = Vec::new();

    let known_ok = PetMood::KNOWN
        .iter()
        .all(|m| derive_mood(m) != MOOD_FALLBACK);
    results.push(TestResult {
        name: "mood_known_have_emoji".into(),
        passed: known_ok,
        detail: format!("{} moods mapped", PetMood::KNOWN.len()),
    });

    let odd = ["", "RADIANT", "happy", "unknown_value", "🌙"];
    let fallback_ok = odd.iter().all(|raw| derive_mood_str(raw) == MOOD_FALLBACK);
    results.push(TestResult {
        name: "mood_fallback".into(),
        passed: fallback_ok,
        detail: "unrecognized moods show ❓".into(),
    });

    if verbose {
        for m in PetMood::KNOWN.iter() {
            println!("    {:10} {}", m.as_str(), derive_mood(m).emoji);
        }
    }

    results
}

// ── 5. Evolution ────────────────────────────────────────────────────────

fn validate_evolution(verbose: bool) -> Vec<TestResult> {
    println!("--- Evolution Stages ---");
    let mut results = Vec::new();

    let mut ids: Vec<&str> = EvolutionStage::ORDERED
        .iter()
        .map(|s| derive_evolution_display(s).id)
        .collect();
    ids.sort_unstable();
    ids.dedup();
    results.push(TestResult {
        name: "evolution_distinct_sprites".into(),
        passed: ids.len() == EvolutionStage::ORDERED.len() && !ids.contains(&UNKNOWN_SPRITE.id),
        detail: format!("{} distinct sprites", ids.len()),
    });

    let case_blind = EvolutionStage::ORDERED.iter().all(|s| {
        let name = s.as_str();
        derive_evolution_display_str(&name.to_uppercase()) == derive_evolution_display_str(name)
    });
    results.push(TestResult {
        name: "evolution_case_blind".into(),
        passed: case_blind,
        detail: "stage names match regardless of case".into(),
    });

    results.push(TestResult {
        name: "evolution_unknown_fallback".into(),
        passed: derive_evolution_display_str("ascended") == UNKNOWN_SPRITE,
        detail: format!("unknown stage → {}", UNKNOWN_SPRITE.glyph),
    });

    let mut monotonic = true;
    let mut prev = 0usize;
    for level in 0..=100u32 {
        let idx = nominal_stage_for_level(level).index().unwrap_or(0);
        if idx < prev {
            monotonic = false;
        }
        prev = idx;
    }
    results.push(TestResult {
        name: "evolution_nominal_monotonic".into(),
        passed: monotonic,
        detail: "nominal stage never regresses with level".into(),
    });

    let round_trip = EvolutionStage::ORDERED
        .iter()
        .zip(STAGE_FIRST_LEVELS.iter())
        .all(|(stage, &lvl)| nominal_stage_for_level(lvl) == *stage);
    results.push(TestResult {
        name: "evolution_first_levels".into(),
        passed: round_trip,
        detail: format!("promotion table {:?}", STAGE_FIRST_LEVELS),
    });

    // A mismatch is reported, never corrected
    let mismatch = stage_level_consistency(&EvolutionStage::Egg, 25);
    results.push(TestResult {
        name: "evolution_mismatch_reported".into(),
        passed: mismatch
            == StageConsistency::Mismatch {
                expected: EvolutionStage::Adult,
            },
        detail: format!("egg at level 25 → {:?}", mismatch),
    });

    if verbose {
        for (stage, lvl) in EvolutionStage::ORDERED.iter().zip(STAGE_FIRST_LEVELS.iter()) {
            let sprite = derive_evolution_display(stage);
            println!("    {:10} from level {:2}  {}", stage.as_str(), lvl, sprite.glyph);
        }
    }

    results
}

// ── 6. Progression ──────────────────────────────────────────────────────

fn validate_progression(_verbose: bool) -> Vec<TestResult> {
    println!("--- Progression ---");
    let mut results = Vec::new();

    let levels = [(0, 1), (99, 1), (100, 2), (250, 3), (1234, 13)];
    let level_ok = levels
        .iter()
        .all(|&(xp, lvl)| compute_level(xp).level == lvl);
    results.push(TestResult {
        name: "progression_levels".into(),
        passed: level_ok,
        detail: "level = xp / 100 + 1".into(),
    });

    let bars = [(0, 1), (100, 1), (150, 50), (299, 99)];
    let bar_ok = bars
        .iter()
        .all(|&(exp, pct)| compute_experience_bar_fraction(exp) == pct);
    results.push(TestResult {
        name: "progression_experience_bar".into(),
        passed: bar_ok,
        detail: "empty bar shows a 1% sliver".into(),
    });

    let streaks = [
        (0, StreakTier::Spark),
        (6, StreakTier::Spark),
        (7, StreakTier::Kindled),
        (13, StreakTier::Kindled),
        (14, StreakTier::Blazing),
        (29, StreakTier::Blazing),
        (30, StreakTier::Inferno),
        (365, StreakTier::Inferno),
    ];
    let streak_ok = streaks
        .iter()
        .all(|&(n, tier)| compute_streak_badge(n).tier == tier);
    results.push(TestResult {
        name: "progression_streak_tiers".into(),
        passed: streak_ok,
        detail: "7 / 14 / 30 day thresholds hold".into(),
    });

    results
}

// ── 7. Randomized Sweep ─────────────────────────────────────────────────

const STRING_POOL: &[&str] = &[
    "critical", "HIGH", "Medium", "low", "maintenance", "radiant", "content", "dimming",
    "flickering", "eclipse", "egg", "Hatching", "LARVAE", "celestial", "", "???", "null",
];

fn validate_randomized(seed: u64, _verbose: bool) -> Vec<TestResult> {
    println!("--- Randomized Sweep (seed {}) ---", seed);
    let mut results = Vec::new();
    let mut rng = StdRng::seed_from_u64(seed);

    let mut impure = 0usize;
    let mut out_of_range = 0usize;
    for _ in 0..RANDOM_ROUNDS {
        let score: i32 = rng.gen_range(-1_000..=1_000);
        let xp: u32 = rng.gen();
        let raw = STRING_POOL[rng.gen_range(0..STRING_POOL.len())];

        if classify_health_urgency(score) != classify_health_urgency(score)
            || compute_level(xp) != compute_level(xp)
            || derive_mood_str(raw) != derive_mood_str(raw)
            || derive_evolution_display_str(raw) != derive_evolution_display_str(raw)
            || classify_decay_urgency(&DecayUrgency::parse(raw))
                != classify_decay_urgency(&DecayUrgency::parse(raw))
        {
            impure += 1;
        }

        let bar = compute_experience_bar_fraction(xp);
        let lvl = compute_level(xp);
        if !(1..100).contains(&bar)
            || lvl.level < 1
            || lvl.xp_progress + lvl.xp_to_next_level != 100
            || !(0..=100).contains(&classify_health_urgency(score).score)
        {
            out_of_range += 1;
        }
    }

    results.push(TestResult {
        name: "random_pure".into(),
        passed: impure == 0,
        detail: format!("{} rounds, {} impure results", RANDOM_ROUNDS, impure),
    });
    results.push(TestResult {
        name: "random_in_range".into(),
        passed: out_of_range == 0,
        detail: format!("{} rounds, {} out of range", RANDOM_ROUNDS, out_of_range),
    });

    results
}
