//! Application State
//!
//! Arc-wrapped state shared across handlers.

use std::{path::Path, path::PathBuf, sync::Arc};

#[cfg(debug_assertions)]
use tokio::sync::broadcast;

use crate::{
    config::SiteConfig,
    content::{ContentStore, RegionPage},
    overlay::RegionOverlay,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    pub content: ContentStore,
    pub overlay: Arc<RegionOverlay>,
    pub public_dir: PathBuf,
    pub documents_dir: PathBuf,
    #[cfg(debug_assertions)]
    pub reloader: Option<broadcast::Sender<()>>,
}

impl AppState {
    /// Create a new `AppState` over the built-in catalog without hot reload.
    pub fn new(config: &SiteConfig) -> Self {
        Self::with_content(config, ContentStore::load())
    }

    /// Create a new `AppState` over the given content.
    pub fn with_content(config: &SiteConfig, content: ContentStore) -> Self {
        Self {
            inner: Arc::new(InnerState {
                content,
                overlay: Arc::new(RegionOverlay::new()),
                public_dir: config.public_dir.clone(),
                documents_dir: config.documents_dir.clone(),
                #[cfg(debug_assertions)]
                reloader: None,
            }),
        }
    }

    /// Create a new `AppState` with hot reload channel (debug only).
    #[cfg(debug_assertions)]
    pub fn with_reloader(self) -> Self {
        let (tx, _) = broadcast::channel(16);
        Self {
            inner: Arc::new(InnerState {
                content: self.inner.content.clone(),
                overlay: Arc::clone(&self.inner.overlay),
                public_dir: self.inner.public_dir.clone(),
                documents_dir: self.inner.documents_dir.clone(),
                reloader: Some(tx),
            }),
        }
    }

    /// Get the static content store.
    pub fn content(&self) -> &ContentStore {
        &self.inner.content
    }

    /// Get the backend overlay.
    pub fn overlay(&self) -> &RegionOverlay {
        &self.inner.overlay
    }

    /// Resolve a region page: the backend's version if one has arrived,
    /// otherwise the static one.
    pub async fn region(&self, slug: &str) -> Option<Arc<RegionPage>> {
        match self.inner.overlay.get(slug).await {
            Some(page) => Some(page),
            None => self.inner.content.region(slug),
        }
    }

    pub fn public_dir(&self) -> &Path {
        &self.inner.public_dir
    }

    pub fn documents_dir(&self) -> &Path {
        &self.inner.documents_dir
    }

    /// Get the reloader channel (debug only).
    #[cfg(debug_assertions)]
    pub fn reloader(&self) -> Option<&broadcast::Sender<()>> {
        self.inner.reloader.as_ref()
    }
}
