//! Axum route handlers for the Preview and Export APIs.

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{Html, Response},
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::models::resume::ResumeState;
use crate::render::html::render_preview_html;
use crate::render::latex::{render_latex, LatexExport, EXPORT_FILENAME, EXPORT_MIME_TYPE};
use crate::render::preview::{render_preview, Preview};
use crate::scoring::ats::ScoreReport;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub score: ScoreReport,
    pub preview: Preview,
}

/// Single source of export bytes for every delivery endpoint.
fn export_latex(app: &AppState, resume: &ResumeState) -> String {
    let report = app.scorer.score(resume);
    let latex = render_latex(resume, &report, app.latex);
    debug!(
        score = report.score,
        bytes = latex.len(),
        escaped = app.latex.escape_special,
        "Rendered LaTeX export"
    );
    latex
}

/// POST /api/v1/resume/preview
pub async fn handle_preview(
    State(app): State<AppState>,
    Json(resume): Json<ResumeState>,
) -> Json<PreviewResponse> {
    let score = app.scorer.score(&resume);
    let preview = render_preview(&resume, &score);
    Json(PreviewResponse { score, preview })
}

/// POST /api/v1/resume/preview/html
pub async fn handle_preview_html(
    State(app): State<AppState>,
    Json(resume): Json<ResumeState>,
) -> Html<String> {
    let score = app.scorer.score(&resume);
    Html(render_preview_html(&render_preview(&resume, &score)))
}

/// POST /api/v1/resume/export/latex
///
/// LaTeX source for clipboard copy and the on-screen code view.
pub async fn handle_export_latex(
    State(app): State<AppState>,
    Json(resume): Json<ResumeState>,
) -> Json<LatexExport> {
    Json(LatexExport::new(export_latex(&app, &resume)))
}

/// POST /api/v1/resume/export/download
///
/// Same bytes as `export/latex`, served as a `resume.tex` attachment.
pub async fn handle_export_download(
    State(app): State<AppState>,
    Json(resume): Json<ResumeState>,
) -> Result<Response, AppError> {
    let latex = export_latex(&app, &resume);

    Response::builder()
        .status(StatusCode::OK)
        .header(
            header::CONTENT_TYPE,
            format!("{EXPORT_MIME_TYPE}; charset=utf-8"),
        )
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{EXPORT_FILENAME}\""),
        )
        .body(Body::from(latex))
        .map_err(|e| AppError::Internal(e.into()))
}
