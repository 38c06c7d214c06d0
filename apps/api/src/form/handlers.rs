//! Axum route handlers for the Form API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::form::edits::{apply_edits, FormEdit};
use crate::models::resume::ResumeState;
use crate::render::preview::{render_preview, Preview};
use crate::scoring::ats::ScoreReport;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EditRequest {
    /// Snapshot before the edits; a fresh form when omitted.
    #[serde(default)]
    pub state: ResumeState,
    pub edits: Vec<FormEdit>,
}

#[derive(Debug, Serialize)]
pub struct EditResponse {
    pub state: ResumeState,
    pub score: ScoreReport,
    pub preview: Preview,
}

/// POST /api/v1/resume/edits
///
/// Applies the edits in order, then rescores and re-renders the preview from the
/// resulting snapshot. Any failing edit rejects the whole batch.
pub async fn handle_apply_edits(
    State(app): State<AppState>,
    Json(request): Json<EditRequest>,
) -> Result<Json<EditResponse>, AppError> {
    let next = apply_edits(&request.state, &request.edits)?;
    let score = app.scorer.score(&next);
    let preview = render_preview(&next, &score);

    debug!(
        edits = request.edits.len(),
        score = score.score,
        "Applied form edits"
    );

    Ok(Json(EditResponse {
        state: next,
        score,
        preview,
    }))
}
