//! Renderable Region Content
//!
//! Static region records from the catalog, with Markdown descriptions
//! rendered once at load.

use std::{collections::HashMap, sync::Arc};

use pulldown_cmark::{html, Options, Parser};
use rti_catalog::{RegionId, RegionRecord, RegionStore};

/// A region record plus everything derived from it for rendering.
#[derive(Clone, Debug)]
pub struct RegionPage {
    pub record: RegionRecord,
    pub description_html: Option<String>,
    /// Catalog region for the slug, if the catalog has templates for it.
    pub region: Option<RegionId>,
}

impl RegionPage {
    pub fn new(record: RegionRecord) -> Self {
        let description_html = record.description.as_deref().map(render_markdown);
        let region = RegionId::from_slug(&record.slug);
        Self {
            record,
            description_html,
            region,
        }
    }
}

/// Store for static region pages.
#[derive(Clone, Debug, Default)]
pub struct ContentStore {
    pages: HashMap<String, Arc<RegionPage>>,
    order: Vec<String>,
}

impl ContentStore {
    /// Load the built-in catalog.
    pub fn load() -> Self {
        let store = Self::from_store(rti_catalog::builtin());
        tracing::info!("Loaded {} regions", store.order.len());
        store
    }

    pub fn from_store(store: &RegionStore) -> Self {
        let mut content = Self::default();
        for record in store.records() {
            content.order.push(record.slug.clone());
            content.pages.insert(record.slug.clone(), Arc::new(RegionPage::new(record.clone())));
        }
        content
    }

    /// Get a region page by slug, ignoring case.
    pub fn region(&self, slug: &str) -> Option<Arc<RegionPage>> {
        self.pages.get(&slug.to_lowercase()).cloned()
    }

    /// All region pages in catalog order.
    pub fn regions(&self) -> Vec<Arc<RegionPage>> {
        self.order.iter().filter_map(|slug| self.pages.get(slug)).cloned().collect()
    }

    pub fn slugs(&self) -> Vec<String> {
        self.order.clone()
    }
}

/// Render Markdown to HTML.
pub fn render_markdown(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::all());
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
