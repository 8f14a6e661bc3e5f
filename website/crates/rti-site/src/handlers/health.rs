//! Health Check Handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub regions: usize,
    pub documents: usize,
    /// Regions currently served from the backend overlay.
    pub overlay: usize,
}

/// Liveness probe with catalog counts.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        regions: state.content().slugs().len(),
        documents: rti_catalog::document_count(),
        overlay: state.overlay().len().await,
    })
}
