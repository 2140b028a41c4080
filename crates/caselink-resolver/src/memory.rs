//! In-memory catalog source
//!
//! A concurrent map-backed [`CatalogSource`] keyed by normalized slug.
//! Used by the CLI to load a catalog snapshot from disk and by tests
//! that need a well-behaved live source.

use crate::source::{CatalogSource, SourceError};
use async_trait::async_trait;
use caselink_model::{CaseStudy, SlugKey};
use dashmap::DashMap;

/// A catalog held entirely in memory
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    records: DashMap<SlugKey, CaseStudy>,
}

impl InMemoryCatalog {
    /// Create an empty catalog
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a record collection.
    ///
    /// Records with slugs that normalize identically overwrite each
    /// other; the last one wins.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = CaseStudy>) -> Self {
        let catalog = Self::new();
        for record in records {
            catalog.insert(record);
        }
        catalog
    }

    /// Insert or replace a record, keyed by its normalized slug
    pub fn insert(&self, record: CaseStudy) {
        self.records.insert(record.slug_key(), record);
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalog {
    async fn list_all(&self) -> Result<Vec<CaseStudy>, SourceError> {
        Ok(self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<CaseStudy>, SourceError> {
        Ok(self
            .records
            .get(&SlugKey::new(slug))
            .map(|entry| entry.value().clone()))
    }
}
