//! # rti-catalog: Region content and department templates
//!
//! This crate holds everything the RTI filing site knows without talking to
//! a backend:
//! - Region records ([`RegionRecord`]) in a read-only [`RegionStore`]
//! - The department template table ([`resolve_path`], [`has_document`])
//! - Region inference from department names ([`infer_region`])
//! - Department categories for listing pages ([`department_sections`])
//!
//! All tables are built once on first access and never mutated afterwards.
//! Lookups that miss return `None` (or the default region); nothing here
//! fails at request time.
//!
//! # Example
//!
//! ```
//! use rti_catalog::{has_document, infer_region, region_by_slug, resolve_path, RegionId};
//!
//! let region = region_by_slug("Telangana").expect("built-in region");
//! assert_eq!(region.slug, "telangana");
//!
//! assert!(has_document("RTI Delhi Police"));
//! assert_eq!(
//!     resolve_path("RTI Delhi Police"),
//!     Some("delhi/RTI Delhi Police & Security/RTI Template For Delhi Police.pdf"),
//! );
//! assert_eq!(resolve_path("rti delhi police"), None);
//!
//! assert_eq!(infer_region("RTI Jammu and Kashmir Culture Department"), RegionId::JammuAndKashmir);
//! ```

mod content;
mod documents;
mod error;
mod region;
mod store;

pub use content::{parse_region, FaqEntry, Hero, ProcessStep, RegionRecord, Testimonial};
pub use documents::{
    department_sections, document_count, has_document, mapped_departments, resolve_path,
    DepartmentSection, JAMMU_AND_KASHMIR_ARCHIVE,
};
pub use error::{CatalogError, CatalogResult};
pub use region::{infer_region, RegionId, DEFAULT_REGION};
pub use store::{all_region_slugs, builtin, region_by_slug, RegionStore};
