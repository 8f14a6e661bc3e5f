//! RTI Website Library
//!
//! Core library for the RTI filing marketing website: region landing pages
//! rendered from the static catalog, template downloads, and a JSON view of
//! the same records. When a content backend is configured, fresher records
//! are pulled in the background and served in place of the static ones.

pub mod accordion;
pub mod config;
pub mod content;
#[cfg(debug_assertions)]
pub mod dev_tools;
pub mod error;
pub mod handlers;
pub mod overlay;
pub mod router;
pub mod state;
pub mod templates;

pub use config::SiteConfig;
pub use error::{SiteError, SiteResult};

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::{
    overlay::BackendClient,
    router::create_router,
    state::AppState,
};

/// Run the website server until Ctrl+C.
///
/// # Errors
///
/// Fails if the backend client cannot be built, the address cannot be bound,
/// or the server stops with an I/O error.
pub async fn run(config: SiteConfig) -> SiteResult<()> {
    let state = AppState::new(&config);

    #[cfg(debug_assertions)]
    let state = {
        let state_with_reloader = state.with_reloader();
        dev_tools::spawn_file_watcher(state_with_reloader.clone());
        state_with_reloader
    };

    let refresh = match &config.backend_url {
        Some(url) => {
            let client = BackendClient::new(url.as_str(), config.backend_timeout)?;
            Some(overlay::spawn_refresh(state.clone(), client, config.refresh_interval))
        }
        None => {
            info!("No backend configured, serving static content only");
            None
        }
    };

    let app = create_router(state);

    let addr = config.bind_addr;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| SiteError::BindFailed { addr, source })?;

    info!("Listening on http://{}", addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(SiteError::Serve);

    if let Some(refresh) = refresh {
        refresh.abort();
    }

    served
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to install CTRL+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down gracefully...");
}

#[cfg(test)]
mod tests;
