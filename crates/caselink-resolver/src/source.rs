//! The catalog collaborator contract
//!
//! The CMS client is an external collaborator; the resolver consumes
//! it through this seam. Implementations should return `Err` rather
//! than panic across the boundary, and the resolver defensively treats
//! every `Err` as an empty tier regardless.

use async_trait::async_trait;
use caselink_model::CaseStudy;

/// Upstream catalog failures
#[derive(Debug, Clone, thiserror::Error)]
pub enum SourceError {
    /// The catalog could not be reached at all
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    /// The catalog was reached but the request failed
    #[error("catalog request failed: {0}")]
    RequestFailed(String),
}

/// A live source of case-study records
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// List every published record.
    ///
    /// # Errors
    /// Returns [`SourceError`] when the upstream call fails; the
    /// resolver recovers by moving to the next tier.
    async fn list_all(&self) -> Result<Vec<CaseStudy>, SourceError>;

    /// Fetch one record by its exact slug.
    ///
    /// `Ok(None)` means "reachable but no such record" and is not an
    /// error.
    ///
    /// # Errors
    /// Returns [`SourceError`] when the upstream call fails.
    async fn get_by_slug(&self, slug: &str) -> Result<Option<CaseStudy>, SourceError>;
}
