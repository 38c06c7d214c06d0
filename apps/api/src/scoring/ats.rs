//! ATS score — pluggable scorer that grades a resume snapshot for machine readability.
//!
//! Default: `HeuristicAtsScorer` (fixed weighted checklist, deterministic, no I/O).
//!
//! `AppState` holds an `Arc<dyn AtsScorer>`, so handlers never name the backend.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::resume::{is_blank, ExperienceEntry, ResumeState};

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

const REQUIRED_FIELD_POINTS: f64 = 6.0;

/// Points for one experience entry with all four slots filled.
const EXPERIENCE_ENTRY_POINTS: f64 = 5.0;
const EXPERIENCE_SLOTS: f64 = 4.0;
const EXPERIENCE_CAP: f64 = 20.0;

const SKILL_POINTS: f64 = 1.5;
const SKILLS_CAP: f64 = 15.0;

const SUMMARY_LONG_CHARS: usize = 100;
const SUMMARY_SHORT_CHARS: usize = 50;
const SUMMARY_LONG_POINTS: f64 = 10.0;
const SUMMARY_SHORT_POINTS: f64 = 5.0;

const KEYWORD_POINTS: f64 = 3.0;
const KEYWORDS_CAP: f64 = 15.0;

const ACTION_VERB_POINTS: f64 = 2.0;
const ACTION_VERBS_CAP: f64 = 10.0;

const MAX_SCORE: f64 = 100.0;

/// Verbs recruiters' parsers reward. Matched as lowercase substrings.
pub const ACTION_VERBS: &[&str] = &[
    "managed",
    "led",
    "developed",
    "implemented",
    "created",
    "improved",
    "increased",
    "reduced",
    "achieved",
    "coordinated",
];

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Excellent,
    Good,
    Poor,
}

impl ScoreTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 80 => ScoreTier::Excellent,
            s if s >= 60 => ScoreTier::Good,
            _ => ScoreTier::Poor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => "excellent",
            ScoreTier::Good => "good",
            ScoreTier::Poor => "poor",
        }
    }

    /// Progress-bar style the render target uses for this tier.
    pub fn progress_style(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => "success",
            ScoreTier::Good => "warning",
            ScoreTier::Poor => "danger",
        }
    }
}

impl fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Points earned per category, before rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub required_fields: f64, // 0 – 30
    pub experience: f64,      // 0 – 20
    pub skills: f64,          // 0 – 15
    pub summary: f64,         // 0 – 10
    pub keywords: f64,        // 0 – 15
    pub action_verbs: f64,    // 0 – 10
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.required_fields
            + self.experience
            + self.skills
            + self.summary
            + self.keywords
            + self.action_verbs
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub score: u8, // 0 – 100
    pub tier: ScoreTier,
    pub progress_style: String,
    pub breakdown: ScoreBreakdown,
    pub scorer_backend: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching handlers.
pub trait AtsScorer: Send + Sync {
    fn score(&self, state: &ResumeState) -> ScoreReport;
}

/// Fixed weighted checklist over the snapshot.
pub struct HeuristicAtsScorer;

impl AtsScorer for HeuristicAtsScorer {
    fn score(&self, state: &ResumeState) -> ScoreReport {
        compute_score(state)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core heuristic
// ────────────────────────────────────────────────────────────────────────────

/// Scores a snapshot from scratch. There is no incremental mode.
pub fn compute_score(state: &ResumeState) -> ScoreReport {
    let breakdown = ScoreBreakdown {
        required_fields: required_fields_points(state),
        experience: experience_points(&state.experience),
        skills: (state.skills.len() as f64 * SKILL_POINTS).min(SKILLS_CAP),
        summary: summary_points(&state.summary),
        keywords: (state.keywords.len() as f64 * KEYWORD_POINTS).min(KEYWORDS_CAP),
        action_verbs: action_verb_points(&state.experience),
    };

    let score = breakdown.total().round().clamp(0.0, MAX_SCORE) as u8;
    let tier = ScoreTier::from_score(score);

    ScoreReport {
        score,
        tier,
        progress_style: tier.progress_style().to_string(),
        breakdown,
        scorer_backend: "heuristic".to_string(),
    }
}

fn required_fields_points(state: &ResumeState) -> f64 {
    let required = [
        &state.contact.full_name,
        &state.contact.job_title,
        &state.contact.email,
        &state.education.degree,
        &state.education.university,
    ];
    required.iter().filter(|v| !is_blank(v)).count() as f64 * REQUIRED_FIELD_POINTS
}

/// End date occupies a slot even though rendering defaults it to "Present".
fn experience_points(entries: &[ExperienceEntry]) -> f64 {
    let total: f64 = entries
        .iter()
        .map(|e| {
            let filled = [&e.job_title, &e.company, &e.start_date, &e.end_date]
                .iter()
                .filter(|v| !is_blank(v))
                .count();
            filled as f64 / EXPERIENCE_SLOTS * EXPERIENCE_ENTRY_POINTS
        })
        .sum();
    total.min(EXPERIENCE_CAP)
}

fn summary_points(summary: &str) -> f64 {
    match summary.chars().count() {
        n if n > SUMMARY_LONG_CHARS => SUMMARY_LONG_POINTS,
        n if n > SUMMARY_SHORT_CHARS => SUMMARY_SHORT_POINTS,
        _ => 0.0,
    }
}

/// Each verb counts at most once per description, however often it appears.
fn action_verb_points(entries: &[ExperienceEntry]) -> f64 {
    let matches: usize = entries
        .iter()
        .map(|e| {
            let text = e.description.to_lowercase();
            ACTION_VERBS.iter().filter(|verb| text.contains(*verb)).count()
        })
        .sum();
    (matches as f64 * ACTION_VERB_POINTS).min(ACTION_VERBS_CAP)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
