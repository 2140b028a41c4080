//! Tiered share-request resolution
//!
//! Slug drift between the CMS and previously distributed links is the
//! primary real-world failure mode this component defends against, so
//! every tier transition is logged with its match count and the
//! exhausted case is a valid empty packet, never an error.

use crate::config::ResolverConfig;
use crate::fallback;
use crate::source::CatalogSource;
use caselink_model::{CaseStudy, ResolvedPacket, ShareRequest, SlugKey};
use futures::future;
use std::sync::Arc;

/// Resolves share requests against a live catalog with three fallbacks
pub struct ProjectResolver {
    source: Arc<dyn CatalogSource>,
    config: ResolverConfig,
}

impl ProjectResolver {
    /// Create a resolver with the default configuration
    #[must_use]
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self::with_config(source, ResolverConfig::default())
    }

    /// Create a resolver with an explicit configuration
    #[must_use]
    pub fn with_config(source: Arc<dyn CatalogSource>, config: ResolverConfig) -> Self {
        Self { source, config }
    }

    /// Resolve a share request into a packet.
    ///
    /// Tiers are evaluated in strict order and the first tier yielding
    /// at least one match for the request wins. Never fails; all four
    /// tiers empty produces an empty packet.
    pub async fn resolve(&self, request: &ShareRequest) -> ResolvedPacket {
        let requested = request.slugs.len();

        let matches = self.resolve_bulk(&request.slugs).await;
        if !matches.is_empty() {
            tracing::info!(
                tier = "bulk",
                matched = matches.len(),
                requested,
                "resolved share request from live listing"
            );
            return ResolvedPacket::new(request.slugs.clone(), matches);
        }

        let matches = self.resolve_per_slug(&request.slugs).await;
        if !matches.is_empty() {
            tracing::info!(
                tier = "per-slug",
                matched = matches.len(),
                requested,
                "resolved share request from individual fetches"
            );
            return ResolvedPacket::new(request.slugs.clone(), matches);
        }

        if let Some(inline) = &request.inline {
            if !inline.is_empty() {
                tracing::info!(
                    tier = "inline",
                    matched = inline.len(),
                    requested,
                    "resolved share request from inline payload"
                );
                return ResolvedPacket::new(request.slugs.clone(), inline.clone());
            }
        }

        let matches = fallback::lookup(&request.slugs);
        if matches.is_empty() {
            tracing::warn!(
                requested,
                "no tier matched; rendering the empty state"
            );
        } else {
            tracing::info!(
                tier = "static",
                matched = matches.len(),
                requested,
                "resolved share request from the bundled catalog"
            );
        }
        ResolvedPacket::new(request.slugs.clone(), matches)
    }

    /// Tier 1: one bulk listing, matched by normalized slug in
    /// requested order. Preferred because it carries live fields such
    /// as cover images.
    async fn resolve_bulk(&self, slugs: &[String]) -> Vec<CaseStudy> {
        let all = match self.source.list_all().await {
            Ok(all) => all,
            Err(err) => {
                tracing::warn!(error = %err, "bulk listing failed; falling through");
                return Vec::new();
            }
        };

        let matches: Vec<CaseStudy> = slugs
            .iter()
            .filter_map(|requested| {
                let key = SlugKey::new(requested);
                all.iter().find(|record| record.slug_key() == key).cloned()
            })
            .collect();

        if matches.is_empty() && !all.is_empty() {
            if self.config.log_catalog_on_miss {
                let available: Vec<&str> = all.iter().map(|r| r.slug.as_str()).collect();
                tracing::warn!(
                    ?available,
                    ?slugs,
                    "no requested slug matched the live listing"
                );
            } else {
                tracing::debug!(
                    listed = all.len(),
                    ?slugs,
                    "no requested slug matched the live listing"
                );
            }
        }
        matches
    }

    /// Tier 2: concurrent per-slug fetches, failures isolated, results
    /// collected in requested order.
    async fn resolve_per_slug(&self, slugs: &[String]) -> Vec<CaseStudy> {
        let fetches = slugs.iter().map(|slug| self.fetch_one(slug));
        future::join_all(fetches)
            .await
            .into_iter()
            .flatten()
            .collect()
    }

    /// One isolated fetch: try the raw slug, then once more with the
    /// normalized form in case the CMS renamed the record.
    async fn fetch_one(&self, requested: &str) -> Option<CaseStudy> {
        match self.source.get_by_slug(requested).await {
            Ok(Some(record)) => return Some(record),
            Ok(None) => {}
            Err(err) => {
                tracing::debug!(slug = requested, error = %err, "per-slug fetch failed");
            }
        }

        if !self.config.normalized_retry {
            return None;
        }
        let normalized = SlugKey::new(requested);
        if normalized.as_str() == requested || normalized.is_empty() {
            return None;
        }
        match self.source.get_by_slug(normalized.as_str()).await {
            Ok(hit) => hit,
            Err(err) => {
                tracing::debug!(
                    slug = %normalized,
                    error = %err,
                    "normalized retry failed"
                );
                None
            }
        }
    }
}
