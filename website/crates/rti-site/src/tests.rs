//! Unit tests for rti-site

use std::{collections::HashMap, path::Path, time::Duration};

use axum::{
    body::Body,
    extract::Path as UrlPath,
    http::{header, Request, StatusCode},
    routing::get,
    Json, Router,
};
use rti_catalog::{all_region_slugs, region_by_slug, resolve_path, RegionRecord};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tower::ServiceExt;

use crate::{
    accordion::Accordion,
    config::SiteConfig,
    content::{render_markdown, ContentStore},
    error::SiteError,
    overlay::{refresh_once, spawn_refresh, BackendClient},
    router::create_router,
    state::AppState,
    templates::document_href,
};

struct TestResponse {
    status: StatusCode,
    headers: axum::http::HeaderMap,
    body: Vec<u8>,
}

impl TestResponse {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

fn test_state(documents_dir: &Path) -> AppState {
    let config = SiteConfig::default().with_documents_dir(documents_dir);
    AppState::new(&config)
}

async fn get_uri(state: &AppState, uri: &str) -> TestResponse {
    let response = create_router(state.clone())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec();
    TestResponse { status, headers, body }
}

/// Serve `app` on an ephemeral port and return its base URL.
async fn spawn_backend(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn freshened(slug: &str, title: &str) -> RegionRecord {
    let mut record = region_by_slug(slug).unwrap().clone();
    record.hero.title = title.to_string();
    record
}

// ============================================================================
// Accordion Tests
// ============================================================================

#[test]
fn accordion_starts_collapsed() {
    let accordion = Accordion::new();
    assert_eq!(accordion.open_index(), None);
    assert!((0..6).all(|i| !accordion.is_open(i)));
}

#[test]
fn accordion_toggle_same_entry_collapses() {
    let mut accordion = Accordion::new();
    accordion.toggle(2);
    assert_eq!(accordion.open_index(), Some(2));
    accordion.toggle(2);
    assert_eq!(accordion, Accordion::new());
}

#[test]
fn accordion_toggle_other_entry_swaps() {
    let mut accordion = Accordion::new();
    accordion.toggle(2);
    accordion.toggle(4);
    let open: Vec<_> = (0..6).filter(|&i| accordion.is_open(i)).collect();
    assert_eq!(open, vec![4]);
}

#[test]
fn accordion_query_reflects_state() {
    let accordion = Accordion::new();
    assert_eq!(accordion.query(), "");
    assert_eq!(accordion.toggled(3).query(), "?faq=3");
    assert_eq!(accordion.toggled(3).toggled(3).query(), "");
}

// ============================================================================
// Content Tests
// ============================================================================

#[test]
fn content_store_mirrors_catalog() {
    let content = ContentStore::load();
    assert_eq!(content.slugs(), all_region_slugs());
    assert!(content.region("TELANGANA").is_some());
    assert!(content.region("punjab").is_none());
}

#[test]
fn description_is_rendered_once() {
    let content = ContentStore::load();
    let page = content.region("jammu-and-kashmir").unwrap();
    let html = page.description_html.as_deref().unwrap();
    assert!(html.contains("<strong>RTI Act 2005</strong>"));
    assert!(content.region("telangana").unwrap().description_html.is_none());
}

#[test]
fn markdown_renders_paragraphs() {
    assert_eq!(render_markdown("Hello *there*"), "<p>Hello <em>there</em></p>\n");
}

// ============================================================================
// Page Tests
// ============================================================================

#[tokio::test]
async fn home_lists_every_region() {
    let docs = TempDir::new().unwrap();
    let response = get_uri(&test_state(docs.path()), "/").await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.text();
    for slug in all_region_slugs() {
        assert!(body.contains(&region_by_slug(slug).unwrap().name), "{slug}");
    }
}

#[tokio::test]
async fn region_page_renders_for_every_slug() {
    let docs = TempDir::new().unwrap();
    let state = test_state(docs.path());
    for slug in all_region_slugs() {
        let response = get_uri(&state, &format!("/rti/{slug}")).await;
        assert_eq!(response.status, StatusCode::OK, "{slug}");
    }
}

#[tokio::test]
async fn region_page_slug_is_case_insensitive() {
    let docs = TempDir::new().unwrap();
    let response = get_uri(&test_state(docs.path()), "/rti/Jammu-And-Kashmir").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text().contains("Jammu and Kashmir Information Commission"));
}

#[tokio::test]
async fn unknown_region_is_not_found() {
    let docs = TempDir::new().unwrap();
    let response = get_uri(&test_state(docs.path()), "/rti/punjab").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn region_page_links_only_mapped_departments() {
    let docs = TempDir::new().unwrap();
    let body = get_uri(&test_state(docs.path()), "/rti/telangana").await.text();

    let encoded = |name: &str| urlencoding::encode(name).into_owned();

    assert!(body.contains(&encoded("RTI Telangana Labour Department")));
    assert!(body.contains("RTI Telangana Sericulture Department"));
    assert!(!body.contains(&encoded("RTI Telangana Sericulture Department")));
    // Sections come from the template table, which lists GHMC.
    assert!(body.contains(&encoded("RTI Greater Hyderabad Municipal Corporation (GHMC)")));
}

#[tokio::test]
async fn region_page_faqs_start_collapsed() {
    let docs = TempDir::new().unwrap();
    let body = get_uri(&test_state(docs.path()), "/rti/jammu-and-kashmir").await.text();
    let record = region_by_slug("jammu-and-kashmir").unwrap();

    assert!(body.contains("Got Questions?"));
    for faq in &record.faqs {
        assert!(!body.contains(&faq.answer));
    }
    assert!(body.contains("?faq=0#faq-0"));
    assert!(body.contains("?faq=5#faq-5"));
}

#[tokio::test]
async fn region_page_faq_query_opens_one_entry() {
    let docs = TempDir::new().unwrap();
    let body = get_uri(&test_state(docs.path()), "/rti/jammu-and-kashmir?faq=2").await.text();
    let record = region_by_slug("jammu-and-kashmir").unwrap();

    assert!(body.contains(&record.faqs[2].answer));
    assert!(!body.contains(&record.faqs[0].answer));
    // The open entry links back to the collapsed page; the others swap.
    assert!(!body.contains("?faq=2#faq-2"));
    assert!(body.contains("?faq=4#faq-4"));
}

#[tokio::test]
async fn region_page_ignores_bad_faq_index() {
    let docs = TempDir::new().unwrap();
    let state = test_state(docs.path());
    let record = region_by_slug("jammu-and-kashmir").unwrap();

    for uri in [
        "/rti/jammu-and-kashmir?faq=99",
        "/rti/jammu-and-kashmir?faq=abc",
        "/rti/jammu-and-kashmir?faq=1&faq=2",
    ] {
        let response = get_uri(&state, uri).await;
        assert_eq!(response.status, StatusCode::OK, "{uri}");
        let body = response.text();
        assert!(record.faqs.iter().all(|faq| !body.contains(&faq.answer)), "{uri}");
    }
}

#[tokio::test]
async fn testimonials_render_only_when_present() {
    let docs = TempDir::new().unwrap();
    let state = test_state(docs.path());

    let jk = get_uri(&state, "/rti/jammu-and-kashmir").await.text();
    assert!(jk.contains("What Citizens Say"));
    assert!(jk.contains("Mohammad Asif"));

    let telangana = get_uri(&state, "/rti/telangana").await.text();
    assert!(!telangana.contains("What Citizens Say"));
}

// ============================================================================
// Document Download Tests
// ============================================================================

#[tokio::test]
async fn download_serves_mapped_template() {
    let docs = TempDir::new().unwrap();
    let department = "RTI Delhi Law, Justice & Legislative Affairs Department";
    let file = docs.path().join(resolve_path(department).unwrap());
    std::fs::create_dir_all(file.parent().unwrap()).unwrap();
    std::fs::write(&file, b"%PDF-1.4 test").unwrap();

    let response = get_uri(&test_state(docs.path()), &document_href(department)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, b"%PDF-1.4 test");
    assert_eq!(response.headers[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(
        response.headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"RTI Template For Delhi Law, Justice & Legislative Affairs Department.pdf\"",
    );
}

#[tokio::test]
async fn download_unmapped_department_is_not_found() {
    let docs = TempDir::new().unwrap();
    let response = get_uri(&test_state(docs.path()), &document_href("RTI Punjab Police")).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn download_missing_file_is_not_found() {
    let docs = TempDir::new().unwrap();
    let response = get_uri(&test_state(docs.path()), &document_href("RTI Delhi Police")).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

// ============================================================================
// API Tests
// ============================================================================

#[tokio::test]
async fn api_lists_region_slugs() {
    let docs = TempDir::new().unwrap();
    let response = get_uri(&test_state(docs.path()), "/api/regions").await;

    assert_eq!(response.status, StatusCode::OK);
    let slugs: Vec<String> = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(slugs, all_region_slugs());
}

#[tokio::test]
async fn api_returns_region_record() {
    let docs = TempDir::new().unwrap();
    let state = test_state(docs.path());

    let response = get_uri(&state, "/api/regions/DELHI").await;
    assert_eq!(response.status, StatusCode::OK);
    let record: RegionRecord = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(&record, region_by_slug("delhi").unwrap());

    let missing = get_uri(&state, "/api/regions/punjab").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_reports_catalog_counts() {
    let docs = TempDir::new().unwrap();
    let response = get_uri(&test_state(docs.path()), "/health").await;

    assert_eq!(response.status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["regions"], 3);
    assert_eq!(json["documents"], 160);
    assert_eq!(json["overlay"], 0);
}

// ============================================================================
// Overlay Tests
// ============================================================================

#[tokio::test]
async fn overlay_record_supersedes_static() {
    let docs = TempDir::new().unwrap();
    let state = test_state(docs.path());

    state.overlay().replace(freshened("telangana", "Fresh Telangana Title")).await;

    let page = get_uri(&state, "/rti/telangana").await.text();
    assert!(page.contains("Fresh Telangana Title"));

    let record: RegionRecord =
        serde_json::from_slice(&get_uri(&state, "/api/regions/telangana").await.body).unwrap();
    assert_eq!(record.hero.title, "Fresh Telangana Title");

    // Other regions still come from the static store.
    let delhi = state.region("delhi").await.unwrap();
    assert_eq!(&delhi.record, region_by_slug("delhi").unwrap());
}

#[tokio::test]
async fn refresh_folds_in_successful_fetches() {
    let backend = Router::new().route(
        "/regions/{slug}",
        get(|UrlPath(slug): UrlPath<String>| async move {
            if slug == "telangana" {
                Ok(Json(freshened("telangana", "From Backend")))
            } else {
                Err(StatusCode::SERVICE_UNAVAILABLE)
            }
        }),
    );
    let base_url = spawn_backend(backend).await;

    let docs = TempDir::new().unwrap();
    let state = test_state(docs.path());
    let client = BackendClient::new(format!("{base_url}/"), Duration::from_secs(5)).unwrap();

    assert_eq!(refresh_once(&state, &client).await, 1);
    assert_eq!(state.overlay().len().await, 1);
    assert_eq!(state.region("telangana").await.unwrap().record.hero.title, "From Backend");
    assert_eq!(
        &state.region("jammu-and-kashmir").await.unwrap().record,
        region_by_slug("jammu-and-kashmir").unwrap(),
    );
}

#[tokio::test]
async fn fetch_rejects_record_for_other_region() {
    let backend = Router::new().route(
        "/regions/{slug}",
        get(|| async { Json(region_by_slug("delhi").unwrap().clone()) }),
    );
    let base_url = spawn_backend(backend).await;
    let client = BackendClient::new(base_url, Duration::from_secs(5)).unwrap();

    let err = client.fetch_region("telangana").await.unwrap_err();
    assert!(matches!(err, SiteError::SlugMismatch { ref actual, .. } if actual == "delhi"));
    assert_eq!(client.fetch_region("delhi").await.unwrap().slug, "delhi");
}

#[tokio::test]
async fn unreachable_backend_keeps_static_content() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let docs = TempDir::new().unwrap();
    let state = test_state(docs.path());
    let client = BackendClient::new(format!("http://{addr}"), Duration::from_secs(2)).unwrap();

    assert_eq!(refresh_once(&state, &client).await, 0);
    assert!(state.overlay().is_empty().await);
    assert!(state.region("telangana").await.is_some());
}

#[tokio::test]
async fn refresh_drops_duplicate_departments() {
    let backend = Router::new().route(
        "/regions/{slug}",
        get(|UrlPath(slug): UrlPath<String>| async move {
            let mut record = region_by_slug(&slug).ok_or(StatusCode::NOT_FOUND)?.clone();
            record.departments.push("RTI Delhi Police".to_string());
            record.departments.push("RTI Delhi Police".to_string());
            Ok::<_, StatusCode>(Json(record))
        }),
    );
    let base_url = spawn_backend(backend).await;

    let docs = TempDir::new().unwrap();
    let state = test_state(docs.path());
    let client = BackendClient::new(base_url, Duration::from_secs(5)).unwrap();

    assert_eq!(refresh_once(&state, &client).await, 3);

    let delhi = state.region("delhi").await.unwrap();
    let police = delhi.record.departments.iter().filter(|d| *d == "RTI Delhi Police").count();
    assert_eq!(police, 1);
    assert_eq!(delhi.record.departments, region_by_slug("delhi").unwrap().departments);

    // Appended once to a region that did not list it.
    let telangana = state.region("telangana").await.unwrap();
    assert_eq!(telangana.record.departments.last().unwrap(), "RTI Delhi Police");
    assert_eq!(
        telangana.record.departments.len(),
        region_by_slug("telangana").unwrap().departments.len() + 1,
    );
}

#[tokio::test]
async fn zero_refresh_interval_still_refreshes() {
    let backend = Router::new().route(
        "/regions/{slug}",
        get(|UrlPath(slug): UrlPath<String>| async move {
            Json(freshened(&slug, "Refreshed"))
        }),
    );
    let base_url = spawn_backend(backend).await;

    let docs = TempDir::new().unwrap();
    let state = test_state(docs.path());
    let client = BackendClient::new(base_url, Duration::from_secs(5)).unwrap();

    let handle = spawn_refresh(state.clone(), client, Duration::ZERO);

    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while state.overlay().len().await < 3 && tokio::time::Instant::now() < deadline {
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    assert!(!handle.is_finished(), "refresh task stopped");
    assert_eq!(state.overlay().len().await, 3);
    handle.abort();
}

// ============================================================================
// Config Tests
// ============================================================================

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> =
        vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |name: &str| vars.get(name).cloned()
}

#[test]
fn config_defaults() {
    let config = SiteConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
    assert_eq!(config.public_dir, Path::new("public"));
    assert_eq!(config.documents_dir, Path::new("documents"));
    assert!(config.backend_url.is_none());
    assert_eq!(config.refresh_interval, Duration::from_secs(300));
}

#[test]
fn config_reads_overrides() {
    let config = SiteConfig::from_lookup(lookup(&[
        (SiteConfig::ADDR_VAR, "0.0.0.0:8080"),
        (SiteConfig::DOCUMENTS_DIR_VAR, "/srv/rti/pdf"),
        (SiteConfig::BACKEND_URL_VAR, "https://api.example.test"),
        (SiteConfig::REFRESH_SECS_VAR, "60"),
        (SiteConfig::PUBLIC_DIR_VAR, "  "),
    ]))
    .unwrap();

    assert_eq!(config.bind_addr.port(), 8080);
    assert_eq!(config.documents_dir, Path::new("/srv/rti/pdf"));
    assert_eq!(config.backend_url.as_deref(), Some("https://api.example.test"));
    assert_eq!(config.refresh_interval, Duration::from_secs(60));
    assert_eq!(config.public_dir, Path::new("public"));
}

#[test]
fn config_rejects_malformed_values() {
    for vars in [
        [(SiteConfig::ADDR_VAR, "not-an-address")],
        [(SiteConfig::REFRESH_SECS_VAR, "soon")],
        [(SiteConfig::BACKEND_TIMEOUT_SECS_VAR, "0")],
        [(SiteConfig::BACKEND_URL_VAR, "ftp://example.test")],
    ] {
        let result = SiteConfig::from_lookup(lookup(&vars));
        assert!(matches!(result, Err(SiteError::Config(_))), "{vars:?}");
    }
}

// ============================================================================
// Live Reload Tests
// ============================================================================

#[cfg(debug_assertions)]
#[test]
fn reload_ignores_editor_and_build_artifacts() {
    use crate::dev_tools::is_ignored;

    assert!(!is_ignored(Path::new("public/css/style.css")));
    assert!(!is_ignored(Path::new("public/images/hero.jpg")));
    assert!(is_ignored(Path::new("public/css/style.min.css")));
    assert!(is_ignored(Path::new("public/css/style.css~")));
    assert!(is_ignored(Path::new("public/css/.style.css.swp")));
    assert!(is_ignored(Path::new("public/css/.#style.css")));
}

#[cfg(debug_assertions)]
#[test]
fn reload_fires_on_relevant_changes_only() {
    use notify::{
        event::{AccessKind, CreateKind, ModifyKind},
        Event, EventKind,
    };

    use crate::dev_tools::is_reload_event;

    let css = std::path::PathBuf::from("public/css/style.css");
    let minified = std::path::PathBuf::from("public/css/style.min.css");

    let modify = Event::new(EventKind::Modify(ModifyKind::Any)).add_path(css.clone());
    assert!(is_reload_event(&modify));

    let access = Event::new(EventKind::Access(AccessKind::Any)).add_path(css);
    assert!(!is_reload_event(&access));

    let build_output = Event::new(EventKind::Create(CreateKind::File)).add_path(minified);
    assert!(!is_reload_event(&build_output));
}

#[cfg(debug_assertions)]
#[tokio::test]
async fn livereload_announces_build_version_first() {
    use tokio_stream::StreamExt;

    use crate::{dev_tools::VERSION_EVENT, templates::BUILD_VERSION};

    let docs = TempDir::new().unwrap();
    let state = test_state(docs.path()).with_reloader();
    let response = create_router(state)
        .oneshot(Request::builder().uri("/__livereload").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let mut stream = response.into_body().into_data_stream();
    let first = stream.next().await.unwrap().unwrap();
    let first = String::from_utf8_lossy(&first);
    assert!(first.contains(&format!("event: {VERSION_EVENT}")), "{first}");
    assert!(first.contains(&format!("data: {BUILD_VERSION}")), "{first}");
}
