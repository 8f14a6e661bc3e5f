//! Router Configuration
//!
//! Route configuration for the website.

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::{handlers, state::AppState};

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    // Asset URLs carry ?v=BUILD_VERSION, so they can be cached indefinitely.
    let static_service = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            axum::http::header::CACHE_CONTROL,
            axum::http::HeaderValue::from_static("public, max-age=31536000, immutable"),
        ))
        .service(ServeDir::new(state.public_dir()));

    let router = Router::new()
        .route("/", get(handlers::home::home))
        .route("/rti/{slug}", get(handlers::regions::region_page))
        .route("/documents/{department}", get(handlers::documents::download))
        .route("/api/regions", get(handlers::api::list_regions))
        .route("/api/regions/{slug}", get(handlers::api::region))
        .route("/health", get(handlers::health::health))
        .nest_service("/public", static_service)
        .layer(TraceLayer::new_for_http());

    #[cfg(debug_assertions)]
    let router = router.route("/__livereload", get(crate::dev_tools::livereload_handler));

    router.with_state(state)
}
