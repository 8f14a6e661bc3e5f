//! Region Page Handlers

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::debug;

use crate::{accordion::Accordion, state::AppState, templates::RegionTemplate};

/// Query parameters of the region page.
#[derive(Debug, Default, Deserialize)]
pub struct RegionQuery {
    /// Index of the expanded FAQ entry. Kept as text so a malformed value
    /// collapses the accordion instead of rejecting the request.
    pub faq: Option<String>,
}

/// Handler for a region landing page.
pub async fn region_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    query: Result<Query<RegionQuery>, QueryRejection>,
) -> Result<impl IntoResponse, StatusCode> {
    let page = state.region(&slug).await.ok_or(StatusCode::NOT_FOUND)?;

    // An unreadable query string (e.g. a repeated `faq`) renders collapsed.
    let query = query.map(|Query(query)| query).unwrap_or_else(|rejection| {
        debug!("Ignoring region page query: {}", rejection);
        RegionQuery::default()
    });

    let mut accordion = Accordion::new();
    if let Some(index) = query
        .faq
        .and_then(|raw| raw.parse::<usize>().ok())
        .filter(|&index| index < page.record.faqs.len())
    {
        accordion.toggle(index);
    }

    Ok(RegionTemplate::new(&page, accordion))
}
