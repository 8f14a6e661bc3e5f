//! Development Tools
//!
//! Live reload for debug builds. Templates and region content are compiled
//! in, so editing them means a rebuild and restart: each SSE connection
//! first announces the running `BUILD_VERSION`, and a page rendered by an
//! older build reloads itself when it reconnects. Files under the public
//! directory are served from disk and trigger a reload as they change.

use std::{convert::Infallible, path::Path};

use axum::{
    extract::State,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse,
    },
};
use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::{state::AppState, templates::BUILD_VERSION};

/// SSE event carrying the running build's version.
pub const VERSION_EVENT: &str = "version";

/// SSE endpoint for live reload.
pub async fn livereload_handler(State(state): State<AppState>) -> impl IntoResponse {
    let (tx, rx) = mpsc::channel::<Result<Event, Infallible>>(16);

    // Capacity 16, so the first send never waits.
    let _ = tx.try_send(Ok(Event::default().event(VERSION_EVENT).data(BUILD_VERSION)));

    if let Some(reloader) = state.reloader() {
        let mut receiver = reloader.subscribe();

        tokio::spawn(async move {
            while receiver.recv().await.is_ok() {
                if tx.send(Ok(Event::default().data("reload"))).await.is_err() {
                    break;
                }
            }
        });
    }

    Sse::new(tokio_stream::wrappers::ReceiverStream::new(rx)).keep_alive(KeepAlive::default())
}

/// Whether a changed file should be ignored: editor swap and backup files,
/// and the minified stylesheet written by release builds.
pub fn is_ignored(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return true;
    };
    name == "style.min.css"
        || name.ends_with('~')
        || name.ends_with(".swp")
        || name.starts_with(".#")
}

/// Whether a watcher event should reload open pages.
pub fn is_reload_event(event: &notify::Event) -> bool {
    let kind = &event.kind;
    (kind.is_modify() || kind.is_create() || kind.is_remove())
        && event.paths.iter().any(|path| !is_ignored(path))
}

/// Watch the public directory and broadcast reloads (debug only).
pub fn spawn_file_watcher(state: AppState) {
    let public_dir = state.public_dir().to_path_buf();
    if !public_dir.exists() {
        info!("{} does not exist, live reload limited to restarts", public_dir.display());
        return;
    }

    std::thread::spawn(move || {
        let (tx, rx) = std::sync::mpsc::channel();

        let mut watcher = match RecommendedWatcher::new(tx, Config::default()) {
            Ok(watcher) => watcher,
            Err(e) => {
                error!("Failed to create file watcher: {}", e);
                return;
            }
        };

        if let Err(e) = watcher.watch(&public_dir, RecursiveMode::Recursive) {
            error!("Failed to watch {}: {}", public_dir.display(), e);
            return;
        }
        info!("Watching {} for changes", public_dir.display());

        for result in rx {
            match result {
                Ok(event) if is_reload_event(&event) => {
                    debug!("Asset change detected: {:?}", event.paths);
                    if let Some(reloader) = state.reloader() {
                        let _ = reloader.send(());
                    }
                }
                Ok(_) => {}
                Err(e) => error!("Watch error: {:?}", e),
            }
        }
    });
}
