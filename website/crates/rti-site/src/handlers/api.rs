//! JSON Read Endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use rti_catalog::RegionRecord;

use crate::state::AppState;

/// Slugs of every region, in catalog order.
pub async fn list_regions(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.content().slugs())
}

/// The current record for a region (backend version if available).
pub async fn region(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<RegionRecord>, StatusCode> {
    let page = state.region(&slug).await.ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(page.record.clone()))
}
