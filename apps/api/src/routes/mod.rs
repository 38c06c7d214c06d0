pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::form::handlers as form;
use crate::render::handlers as render;
use crate::scoring::handlers as scoring;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Score API
        .route("/api/v1/resume/score", post(scoring::handle_score))
        // Form API
        .route("/api/v1/resume/edits", post(form::handle_apply_edits))
        // Preview API
        .route("/api/v1/resume/preview", post(render::handle_preview))
        .route(
            "/api/v1/resume/preview/html",
            post(render::handle_preview_html),
        )
        // Export API
        .route(
            "/api/v1/resume/export/latex",
            post(render::handle_export_latex),
        )
        .route(
            "/api/v1/resume/export/download",
            post(render::handle_export_download),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    fn test_app() -> Router {
        build_router(AppState::new(Config {
            port: 0,
            rust_log: "info".to_string(),
            latex_escape: false,
        }))
    }

    async fn post_json(uri: &str, body: Value) -> Response {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        test_app().oneshot(request).await.unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    fn sample_resume() -> Value {
        json!({
            "contact": {
                "full_name": "Jane Smith",
                "job_title": "Backend Engineer",
                "email": "jane@example.com",
                "github": "https://github.com/jane"
            },
            "summary": "Backend engineer with eight years of experience building payment systems.",
            "education": { "degree": "BSc", "university": "State University" },
            "experience": [{
                "job_title": "Senior Engineer",
                "company": "Acme",
                "start_date": "03/2019",
                "description": "Led the team\n\nDeveloped new process"
            }],
            "keywords": ["Rust", "Kafka"]
        })
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_score_empty_snapshot() {
        let response = post_json("/api/v1/resume/score", json!({})).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["score"], 3);
        assert_eq!(body["tier"], "poor");
        assert_eq!(body["progress_style"], "danger");
        assert_eq!(body["breakdown"]["skills"], 3.0);
    }

    #[tokio::test]
    async fn test_preview_omits_empty_sections() {
        let response = post_json("/api/v1/resume/preview", json!({})).await;
        let body = body_json(response).await;
        assert_eq!(body["preview"]["header"]["name"], "John Doe");
        assert!(body["preview"]["experience"].is_null());
        assert!(body["preview"]["keywords"].is_null());
        assert_eq!(body["preview"]["footer"]["score"], body["score"]["score"]);
    }

    #[tokio::test]
    async fn test_preview_html_content_type() {
        let response = post_json("/api/v1/resume/preview/html", sample_resume()).await;
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));
        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.contains("<h1>Jane Smith</h1>"));
        assert!(html.contains("resume-keywords"));
    }

    #[tokio::test]
    async fn test_download_matches_copy_source() {
        let copy = body_json(post_json("/api/v1/resume/export/latex", sample_resume()).await).await;
        assert_eq!(copy["filename"], "resume.tex");
        assert_eq!(copy["mime_type"], "text/plain");

        let download = post_json("/api/v1/resume/export/download", sample_resume()).await;
        assert_eq!(download.status(), StatusCode::OK);
        assert_eq!(
            download.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"resume.tex\""
        );
        assert_eq!(
            download.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        let bytes = body_bytes(download).await;
        assert_eq!(copy["latex"].as_str().unwrap().as_bytes(), bytes.as_slice());

        let latex = String::from_utf8(bytes).unwrap();
        assert_eq!(latex.matches(r"\item").count(), 2);
        assert!(latex.contains(r"\href{https://github.com/jane}{GitHub}"));
        assert!(!latex.contains(r"\faLinkedin"));
    }

    #[tokio::test]
    async fn test_edits_recompute_everything() {
        let response = post_json(
            "/api/v1/resume/edits",
            json!({
                "state": sample_resume(),
                "edits": [
                    { "op": "remove_keyword", "value": "Rust" },
                    { "op": "remove_keyword", "value": "Kafka" },
                    { "op": "add_skill", "value": "Leadership" },
                    { "op": "add_skill", "value": "  " },
                    { "op": "set_contact", "field": "full_name", "value": "" }
                ]
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["state"]["keywords"], json!([]));
        assert_eq!(body["state"]["skills"], json!(["Leadership", "Communication"]));
        assert_eq!(body["score"]["breakdown"]["keywords"], 0.0);
        assert!(body["preview"]["keywords"].is_null());
        assert_eq!(body["preview"]["header"]["name"], "John Doe");
    }

    #[tokio::test]
    async fn test_edit_out_of_range_is_bad_request() {
        let response = post_json(
            "/api/v1/resume/edits",
            json!({ "edits": [{ "op": "remove_experience", "index": 2 }] }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
