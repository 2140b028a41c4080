//! Testing utilities for the caselink workspace
//!
//! Shared fixtures and instrumented catalog sources for
//! failure-injection and memoization tests.

#![allow(missing_docs)]

use async_trait::async_trait;
use caselink_model::{CaseStudy, CaseStudyId};
use caselink_resolver::{CatalogSource, SourceError};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Build a plausible record for a slug.
pub fn case_study(slug: &str) -> CaseStudy {
    let title = slug
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    CaseStudy::new(CaseStudyId::new(format!("cs-{slug}")), title, slug)
        .with_summary(format!("Case study for {slug}"))
        .with_cover(format!("https://cdn.example.com/covers/{slug}.jpg"))
        .with_tags(vec!["design".to_string(), "engineering".to_string()])
}

pub fn sample_catalog() -> Vec<CaseStudy> {
    ["learn-xyz", "atlas-banking", "nimbus-health"]
        .into_iter()
        .map(case_study)
        .collect()
}

/// A catalog whose responses are scripted per test.
///
/// Per-slug lookups are exact-match on the scripted key, with no
/// normalization, so tests can exercise the resolver's own
/// normalized-form retry.
#[derive(Debug, Default)]
pub struct ScriptedCatalog {
    list_response: Mutex<Option<Vec<CaseStudy>>>,
    by_slug: Mutex<HashMap<String, CaseStudy>>,
    failing_slugs: Mutex<Vec<String>>,
}

impl ScriptedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the bulk listing response.
    #[must_use]
    pub fn with_listing(self, records: Vec<CaseStudy>) -> Self {
        *self.list_response.lock() = Some(records);
        self
    }

    /// Leave the bulk listing unavailable (the default).
    #[must_use]
    pub fn with_listing_unavailable(self) -> Self {
        *self.list_response.lock() = None;
        self
    }

    /// Script one per-slug response under an exact key.
    #[must_use]
    pub fn with_slug_record(self, key: &str, record: CaseStudy) -> Self {
        self.by_slug.lock().insert(key.to_string(), record);
        self
    }

    /// Make one per-slug key fail with an upstream error.
    #[must_use]
    pub fn with_failing_slug(self, key: &str) -> Self {
        self.failing_slugs.lock().push(key.to_string());
        self
    }
}

#[async_trait]
impl CatalogSource for ScriptedCatalog {
    async fn list_all(&self) -> Result<Vec<CaseStudy>, SourceError> {
        self.list_response
            .lock()
            .clone()
            .ok_or_else(|| SourceError::Unavailable("scripted outage".to_string()))
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<CaseStudy>, SourceError> {
        if self.failing_slugs.lock().iter().any(|s| s == slug) {
            return Err(SourceError::RequestFailed("scripted failure".to_string()));
        }
        Ok(self.by_slug.lock().get(slug).cloned())
    }
}

/// Wraps a source and counts upstream calls, for memoization tests.
#[derive(Debug)]
pub struct CountingCatalog<S> {
    inner: S,
    list_calls: AtomicUsize,
    slug_calls: AtomicUsize,
}

impl<S> CountingCatalog<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            list_calls: AtomicUsize::new(0),
            slug_calls: AtomicUsize::new(0),
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn slug_calls(&self) -> usize {
        self.slug_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<S: CatalogSource> CatalogSource for CountingCatalog<S> {
    async fn list_all(&self) -> Result<Vec<CaseStudy>, SourceError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.list_all().await
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<CaseStudy>, SourceError> {
        self.slug_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_by_slug(slug).await
    }
}
