//! Backend Overlay
//!
//! Fresher region records fetched from the content backend. A record in the
//! overlay supersedes the static one for its slug; pages never wait on the
//! backend and keep serving static content when it is unreachable.

use std::{collections::HashMap, sync::Arc, time::Duration};

use rti_catalog::RegionRecord;
use tokio::{sync::RwLock, task::JoinHandle};
use tracing::{debug, info, warn};

use crate::{
    content::RegionPage,
    error::{SiteError, SiteResult},
    state::AppState,
};

/// Region pages received from the backend, keyed by slug.
#[derive(Debug, Default)]
pub struct RegionOverlay {
    pages: RwLock<HashMap<String, Arc<RegionPage>>>,
}

impl RegionOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the overlay page for a slug, ignoring case.
    pub async fn get(&self, slug: &str) -> Option<Arc<RegionPage>> {
        self.pages.read().await.get(&slug.to_lowercase()).cloned()
    }

    /// Replace the overlay entry for the record's slug.
    ///
    /// Repeated departments are dropped, keeping the first occurrence.
    pub async fn replace(&self, mut record: RegionRecord) {
        for department in record.dedup_departments() {
            warn!(slug = %record.slug, %department, "Dropping duplicate department from backend");
        }

        let page = Arc::new(RegionPage::new(record));
        self.pages.write().await.insert(page.record.slug.clone(), page);
    }

    pub async fn len(&self) -> usize {
        self.pages.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.pages.read().await.is_empty()
    }
}

/// HTTP client for `GET {base}/regions/{slug}`.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> SiteResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one region record.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-success statuses, undecodable bodies,
    /// and records whose slug is not the one requested.
    pub async fn fetch_region(&self, slug: &str) -> SiteResult<RegionRecord> {
        let url = format!("{}/regions/{}", self.base_url, slug);
        let response = self.http.get(&url).send().await?.error_for_status()?;
        let record: RegionRecord = response.json().await?;

        if record.slug != slug {
            return Err(SiteError::SlugMismatch {
                expected: slug.to_string(),
                actual: record.slug,
            });
        }

        Ok(record)
    }
}

/// Fetch every static region once and fold successes into the overlay.
///
/// Returns how many regions were refreshed. Failures keep whatever the
/// overlay (or the static store) already had.
pub async fn refresh_once(state: &AppState, client: &BackendClient) -> usize {
    let mut refreshed = 0;

    for slug in state.content().slugs() {
        match client.fetch_region(&slug).await {
            Ok(record) => {
                state.overlay().replace(record).await;
                refreshed += 1;
                debug!("Refreshed region {} from backend", slug);
            }
            Err(e) => {
                warn!("Keeping current content for {}: {}", slug, e);
            }
        }
    }

    refreshed
}

/// Shortest refresh period; shorter requests are raised to this.
pub const MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// Spawn the periodic refresh task. The first fetch runs immediately.
pub fn spawn_refresh(state: AppState, client: BackendClient, interval: Duration) -> JoinHandle<()> {
    if interval < MIN_REFRESH_INTERVAL {
        warn!("Refresh interval {:?} too short, using {:?}", interval, MIN_REFRESH_INTERVAL);
    }
    let interval = interval.max(MIN_REFRESH_INTERVAL);

    info!("Refreshing region content from {} every {:?}", client.base_url(), interval);

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let refreshed = refresh_once(&state, &client).await;
            debug!("Backend refresh updated {} regions", refreshed);
        }
    })
}
