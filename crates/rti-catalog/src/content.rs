//! Region records and frontmatter parsing.
//!
//! Each region is a Markdown document: the YAML frontmatter carries the
//! record, the body (if any) becomes [`RegionRecord::description`].

use gray_matter::{engine::YAML, Matter, ParsedEntity};
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Everything a region page renders.
///
/// Serialized with camelCase keys, which is also the shape the backend
/// returns for `/regions/{slug}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionRecord {
    pub name: String,
    pub slug: String,
    pub languages: Vec<String>,
    pub hero: Hero,
    pub departments: Vec<String>,
    pub highlights: Vec<String>,
    pub faqs: Vec<FaqEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portal_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process: Option<Vec<ProcessStep>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oversight_body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub testimonials: Vec<Testimonial>,
}

/// Hero banner copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// One step of the filing walkthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStep {
    pub step_number: u32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub location: String,
    pub role: String,
    pub image: String,
}

impl RegionRecord {
    /// Drops repeated department names, keeping the first occurrence.
    ///
    /// Returns the names that were dropped.
    pub fn dedup_departments(&mut self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut dropped = Vec::new();
        self.departments.retain(|department| {
            if seen.insert(department.clone()) {
                true
            } else {
                dropped.push(department.clone());
                false
            }
        });
        dropped
    }
}

/// Parses one region document.
///
/// `source_name` only labels errors and log lines.
///
/// # Errors
///
/// Fails if the frontmatter is missing or does not match the schema, or if
/// the slug is empty or not lowercase.
pub fn parse_region(source_name: &str, text: &str) -> CatalogResult<RegionRecord> {
    let matter = Matter::<YAML>::new();
    let parsed: ParsedEntity<RegionRecord> =
        matter.parse(text).map_err(|err| CatalogError::Frontmatter {
            source_name: source_name.to_string(),
            message: format!("{err:?}"),
        })?;

    let mut record = parsed.data.ok_or_else(|| CatalogError::MissingFrontmatter {
        source_name: source_name.to_string(),
    })?;

    if record.slug.is_empty() || record.slug != record.slug.to_lowercase() {
        return Err(CatalogError::InvalidSlug {
            source_name: source_name.to_string(),
            slug: record.slug,
        });
    }

    let body = parsed.content.trim();
    if !body.is_empty() {
        record.description = Some(body.to_string());
    }

    for department in record.dedup_departments() {
        tracing::warn!(source = source_name, %department, "Dropping duplicate department");
    }

    Ok(record)
}
