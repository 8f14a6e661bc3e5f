//! Askama Templates
//!
//! Template structs for rendering HTML pages.

use askama::Template;
use askama_web::WebTemplate;
use rti_catalog::{department_sections, has_document, Hero, ProcessStep, Testimonial};

use crate::{accordion::Accordion, content::RegionPage};

/// Appended to static asset URLs for cache busting.
pub const BUILD_VERSION: &str = env!("BUILD_VERSION");

/// Whether pages include the livereload script.
const LIVERELOAD: bool = cfg!(debug_assertions);

/// Stylesheet name; release builds serve the minified copy.
const STYLESHEET: &str = if cfg!(debug_assertions) { "style.css" } else { "style.min.css" };

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub title: String,
    pub build_version: &'static str,
    pub stylesheet: &'static str,
    pub livereload: bool,
    pub regions: Vec<RegionCard>,
}

impl HomeTemplate {
    pub fn new(title: impl Into<String>, regions: Vec<RegionCard>) -> Self {
        Self {
            title: title.into(),
            build_version: BUILD_VERSION,
            stylesheet: STYLESHEET,
            livereload: LIVERELOAD,
            regions,
        }
    }
}

/// Summary of a region for the home page.
pub struct RegionCard {
    pub name: String,
    pub href: String,
    pub subtitle: String,
    pub department_count: usize,
    pub document_count: usize,
}

impl RegionCard {
    pub fn from_page(page: &RegionPage) -> Self {
        let record = &page.record;
        Self {
            name: record.name.clone(),
            href: region_href(&record.slug),
            subtitle: record.hero.subtitle.clone(),
            department_count: record.departments.len(),
            document_count: record.departments.iter().filter(|d| has_document(d)).count(),
        }
    }
}

/// Region landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "region.html")]
pub struct RegionTemplate {
    pub title: String,
    pub build_version: &'static str,
    pub stylesheet: &'static str,
    pub livereload: bool,
    pub name: String,
    pub hero: Hero,
    pub languages: String,
    pub description_html: Option<String>,
    pub highlights: Vec<String>,
    pub process: Vec<ProcessStep>,
    pub fee: Option<String>,
    pub oversight_body: Option<String>,
    pub portal_url: Option<String>,
    pub departments: Vec<DepartmentLink>,
    pub sections: Vec<SectionView>,
    pub faqs: Vec<FaqView>,
    pub testimonials: Vec<Testimonial>,
}

/// A department name and, when a template is mapped, its download link.
pub struct DepartmentLink {
    pub name: String,
    pub has_download: bool,
    pub download_href: String,
}

impl DepartmentLink {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            has_download: has_document(name),
            download_href: document_href(name),
        }
    }
}

pub struct SectionView {
    pub title: String,
    pub departments: Vec<DepartmentLink>,
}

/// One accordion entry as rendered.
pub struct FaqView {
    pub index: usize,
    pub question: String,
    pub answer: String,
    pub open: bool,
    /// Link that applies this entry's toggle to the current state.
    pub href: String,
}

impl RegionTemplate {
    pub fn new(page: &RegionPage, accordion: Accordion) -> Self {
        let record = &page.record;
        let base = region_href(&record.slug);

        let faqs = record
            .faqs
            .iter()
            .enumerate()
            .map(|(index, faq)| FaqView {
                index,
                question: faq.question.clone(),
                answer: faq.answer.clone(),
                open: accordion.is_open(index),
                href: format!("{base}{}#faq-{index}", accordion.toggled(index).query()),
            })
            .collect();

        let sections = page
            .region
            .map(department_sections)
            .unwrap_or_default()
            .into_iter()
            .map(|section| SectionView {
                title: section.title.to_string(),
                departments: section.departments.into_iter().map(DepartmentLink::new).collect(),
            })
            .collect();

        Self {
            title: format!("File RTI Online in {} - FileMyRTI", record.name),
            build_version: BUILD_VERSION,
            stylesheet: STYLESHEET,
            livereload: LIVERELOAD,
            name: record.name.clone(),
            hero: record.hero.clone(),
            languages: record.languages.join(", "),
            description_html: page.description_html.clone(),
            highlights: record.highlights.clone(),
            process: record.process.clone().unwrap_or_default(),
            fee: record.fee.clone(),
            oversight_body: record.oversight_body.clone(),
            portal_url: record.portal_url.clone(),
            departments: record.departments.iter().map(|d| DepartmentLink::new(d)).collect(),
            sections,
            faqs,
            testimonials: record.testimonials.clone(),
        }
    }
}

/// Path of a region page.
pub fn region_href(slug: &str) -> String {
    format!("/rti/{slug}")
}

/// Path of a department's template download.
pub fn document_href(department: &str) -> String {
    format!("/documents/{}", urlencoding::encode(department))
}
