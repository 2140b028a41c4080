//! Case-study records
//!
//! The record shape every resolution tier produces. Identity is the
//! opaque `id`; the `slug` is the human-facing lookup key and is not
//! guaranteed unique across sources without normalization.

use crate::slug::SlugKey;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use ulid::Ulid;

/// Opaque case-study identifier
///
/// Live records carry the id the CMS assigned; locally rehydrated or
/// fallback records get a freshly generated one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseStudyId(String);

impl CaseStudyId {
    /// Wrap an id assigned by an upstream source
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh local id (ULID for sortability)
    #[inline]
    #[must_use]
    pub fn generate() -> Self {
        Self(Ulid::new().to_string())
    }

    /// Get the underlying string
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CaseStudyId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A published case study
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudy {
    /// Identity across sources
    pub id: CaseStudyId,
    /// Display title
    pub title: String,
    /// Human-facing lookup key (drift-prone)
    pub slug: String,
    /// Short teaser copy
    #[serde(default)]
    pub summary: String,
    /// Cover image location
    #[serde(default)]
    pub cover_url: String,
    /// Topic tags, in display order
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CaseStudy {
    /// Create a record with the required fields
    #[inline]
    #[must_use]
    pub fn new(id: CaseStudyId, title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            slug: slug.into(),
            summary: String::new(),
            cover_url: String::new(),
            tags: Vec::new(),
        }
    }

    /// With teaser copy
    #[inline]
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// With cover image
    #[inline]
    #[must_use]
    pub fn with_cover(mut self, cover_url: impl Into<String>) -> Self {
        self.cover_url = cover_url.into();
        self
    }

    /// With topic tags
    #[inline]
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Append one tag
    #[inline]
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Normalized comparison key for this record's slug
    #[inline]
    #[must_use]
    pub fn slug_key(&self) -> SlugKey {
        SlugKey::new(&self.slug)
    }

    /// Check whether a requested slug addresses this record,
    /// tolerating spelling drift on either side
    #[inline]
    #[must_use]
    pub fn matches_slug(&self, requested: &str) -> bool {
        self.slug_key() == SlugKey::new(requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(CaseStudyId::generate(), CaseStudyId::generate());
    }

    #[test]
    fn id_serde_is_transparent() {
        let id = CaseStudyId::new("cs-42");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"cs-42\"");
    }

    #[test]
    fn record_builder() {
        let cs = CaseStudy::new(CaseStudyId::new("cs-1"), "Learn.xyz", "learn-xyz")
            .with_summary("AI tutoring platform")
            .with_tag("education")
            .with_tag("ai");

        assert_eq!(cs.title, "Learn.xyz");
        assert_eq!(cs.tags, vec!["education", "ai"]);
    }

    #[test]
    fn matches_slug_tolerates_drift() {
        let cs = CaseStudy::new(CaseStudyId::new("cs-1"), "Learn.xyz", "learn-xyz");
        assert!(cs.matches_slug("Learn.XYZ"));
        assert!(cs.matches_slug("learn xyz"));
        assert!(!cs.matches_slug("other"));
    }

    #[test]
    fn record_deserializes_with_missing_optionals() {
        let cs: CaseStudy =
            serde_json::from_str(r#"{"id":"cs-1","title":"T","slug":"t"}"#).unwrap();
        assert!(cs.summary.is_empty());
        assert!(cs.tags.is_empty());
    }
}
