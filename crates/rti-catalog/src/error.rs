//! Catalog error types.

use thiserror::Error;

/// Result type for catalog loading.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while building the region store.
///
/// Lookups never produce these; they only come out of parsing content.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The document has no frontmatter block.
    #[error("{source_name}: missing frontmatter")]
    MissingFrontmatter { source_name: String },

    /// The frontmatter did not match the region schema.
    #[error("{source_name}: invalid frontmatter: {message}")]
    Frontmatter { source_name: String, message: String },

    /// Slugs must be non-empty and lowercase.
    #[error("{source_name}: invalid slug {slug:?}")]
    InvalidSlug { source_name: String, slug: String },

    /// Another region already uses this slug.
    #[error("duplicate region slug: {0}")]
    DuplicateSlug(String),
}
