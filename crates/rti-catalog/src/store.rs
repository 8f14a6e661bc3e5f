//! Read-only store of region records.

use std::{collections::HashMap, sync::LazyLock};

use tracing::error;

use crate::{
    content::{parse_region, RegionRecord},
    error::{CatalogError, CatalogResult},
};

/// Region documents compiled into the binary, in listing order.
const BUILTIN_SOURCES: &[(&str, &str)] = &[
    ("telangana.md", include_str!("../content/regions/telangana.md")),
    ("jammu-and-kashmir.md", include_str!("../content/regions/jammu-and-kashmir.md")),
    ("delhi.md", include_str!("../content/regions/delhi.md")),
];

static BUILTIN: LazyLock<RegionStore> =
    LazyLock::new(|| RegionStore::from_sources(BUILTIN_SOURCES.iter().copied()));

/// Region records keyed by lowercase slug.
///
/// There is no public way to add or remove records once the store is built.
#[derive(Debug, Clone, Default)]
pub struct RegionStore {
    regions: HashMap<String, RegionRecord>,
    order: Vec<String>,
}

impl RegionStore {
    /// Builds a store from `(source name, document)` pairs.
    ///
    /// Documents that fail to parse or reuse a slug are logged and skipped,
    /// so the store always builds.
    pub fn from_sources<'a>(sources: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut store = Self::default();

        for (source_name, text) in sources {
            let result = parse_region(source_name, text).and_then(|record| store.insert(record));
            if let Err(e) = result {
                error!("Skipping region content {}: {}", source_name, e);
            }
        }

        store
    }

    fn insert(&mut self, record: RegionRecord) -> CatalogResult<()> {
        if self.regions.contains_key(&record.slug) {
            return Err(CatalogError::DuplicateSlug(record.slug));
        }
        self.order.push(record.slug.clone());
        self.regions.insert(record.slug.clone(), record);
        Ok(())
    }

    /// Looks up a region. The slug is lowercased first.
    pub fn get(&self, slug: &str) -> Option<&RegionRecord> {
        self.regions.get(&slug.to_lowercase())
    }

    /// All slugs, in the order the documents were supplied.
    pub fn list_slugs(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    /// All records, in the order the documents were supplied.
    pub fn records(&self) -> impl Iterator<Item = &RegionRecord> {
        self.order.iter().filter_map(|slug| self.regions.get(slug))
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// The store built from the compiled-in region documents.
pub fn builtin() -> &'static RegionStore {
    &BUILTIN
}

/// Looks up a built-in region, ignoring case.
pub fn region_by_slug(slug: &str) -> Option<&'static RegionRecord> {
    builtin().get(slug)
}

/// Slugs of every built-in region.
pub fn all_region_slugs() -> Vec<&'static str> {
    builtin().list_slugs()
}
