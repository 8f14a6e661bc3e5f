//! Home Page Handler

use axum::{extract::State, response::IntoResponse};

use crate::{
    state::AppState,
    templates::{HomeTemplate, RegionCard},
};

/// Handler for the landing page.
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let mut regions = Vec::new();
    for slug in state.content().slugs() {
        if let Some(page) = state.region(&slug).await {
            regions.push(RegionCard::from_page(&page));
        }
    }

    HomeTemplate::new("File RTI Online - FileMyRTI", regions)
}
