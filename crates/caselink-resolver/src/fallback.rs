//! Static fallback catalog
//!
//! The resolution floor: a small catalog bundled with the application
//! so a share link renders something even when the CMS is gone and the
//! link carries no usable inline payload. Kept to flagship case
//! studies whose slugs have been stable for a long time.

use caselink_codec::placeholder_cover;
use caselink_model::{CaseStudy, CaseStudyId, SlugKey};
use once_cell::sync::Lazy;

static FALLBACK_CATALOG: Lazy<Vec<CaseStudy>> = Lazy::new(|| {
    vec![
        CaseStudy::new(CaseStudyId::new("fallback-learn-xyz"), "Learn.xyz", "learn-xyz")
            .with_summary("AI-native tutoring platform taken from prototype to 40k learners")
            .with_cover(placeholder_cover("learn-xyz"))
            .with_tags(vec!["education".to_string(), "ai".to_string()]),
        CaseStudy::new(
            CaseStudyId::new("fallback-atlas-banking"),
            "Atlas Banking",
            "atlas-banking",
        )
        .with_summary("Core banking dashboard redesign for a challenger bank")
        .with_cover(placeholder_cover("atlas-banking"))
        .with_tags(vec!["fintech".to_string(), "product".to_string()]),
        CaseStudy::new(
            CaseStudyId::new("fallback-nimbus-health"),
            "Nimbus Health",
            "nimbus-health",
        )
        .with_summary("Patient intake flow rebuilt around clinician feedback")
        .with_cover(placeholder_cover("nimbus-health"))
        .with_tags(vec!["healthcare".to_string()]),
        CaseStudy::new(
            CaseStudyId::new("fallback-forge-robotics"),
            "Forge Robotics",
            "forge-robotics",
        )
        .with_summary("Fleet telemetry console for warehouse robotics")
        .with_cover(placeholder_cover("forge-robotics"))
        .with_tags(vec!["robotics".to_string(), "telemetry".to_string()]),
    ]
});

/// The bundled records
#[must_use]
pub fn catalog() -> &'static [CaseStudy] {
    &FALLBACK_CATALOG
}

/// Match requested slugs against the bundled catalog.
///
/// Normalized comparison, requested order, unmatched slugs absent.
#[must_use]
pub fn lookup(slugs: &[String]) -> Vec<CaseStudy> {
    slugs
        .iter()
        .filter_map(|requested| {
            let key = SlugKey::new(requested);
            FALLBACK_CATALOG
                .iter()
                .find(|record| record.slug_key() == key)
                .cloned()
        })
        .collect()
}
