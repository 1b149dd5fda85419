// ABOUTME: Axum router and handlers for the job-scrape API surface.
// ABOUTME: POST /api/scrape-job runs the extractor; failures degrade to manual entry downstream.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;

use joblens_extract::Client;

/// Shared application state: one stateless extraction client.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<Client>,
}

/// Request body for the scrape endpoint.
#[derive(Debug, Deserialize)]
pub struct ScrapeRequest {
    #[serde(default)]
    pub url: String,
}

/// Build the application router around an extraction client.
pub fn build_app(extractor: Client) -> Router {
    let state = AppState {
        extractor: Arc::new(extractor),
    };

    Router::new()
        .route("/api/scrape-job", post(scrape_job))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

/// Scrape a job posting URL and return the extracted fields.
///
/// An empty record is a 200: the caller falls back to manual entry, it
/// never blocks application creation.
async fn scrape_job(State(state): State<AppState>, Json(req): Json<ScrapeRequest>) -> Response {
    if req.url.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "URL is required" })),
        )
            .into_response();
    }

    match state.extractor.extract(&req.url).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(err) => {
            tracing::error!(url = %req.url, error = %err, "failed to scrape job data");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to scrape job data" })),
            )
                .into_response()
        }
    }
}
