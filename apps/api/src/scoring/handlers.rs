//! Axum route handlers for the Score API.

use axum::{extract::State, Json};
use tracing::debug;

use crate::models::resume::ResumeState;
use crate::scoring::ats::ScoreReport;
use crate::state::AppState;

/// POST /api/v1/resume/score
///
/// Scores the posted snapshot and returns the per-category breakdown.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(resume): Json<ResumeState>,
) -> Json<ScoreReport> {
    let report = state.scorer.score(&resume);
    debug!(
        score = report.score,
        tier = %report.tier,
        experience_entries = resume.experience.len(),
        "Scored resume snapshot"
    );
    Json(report)
}
