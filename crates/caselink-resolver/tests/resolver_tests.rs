//! End-to-end resolution scenarios across the four tiers

use caselink_model::ShareRequest;
use caselink_resolver::{CatalogSource, ProjectResolver, ResolverConfig, ShareRequestCache};
use caselink_test_utils::{case_study, sample_catalog, CountingCatalog, ScriptedCatalog};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn request(slugs: &[&str]) -> ShareRequest {
    ShareRequest::new(slugs.iter().map(ToString::to_string).collect())
}

#[tokio::test]
async fn drifted_slug_resolves_via_bulk_listing() {
    let catalog = ScriptedCatalog::new().with_listing(sample_catalog());
    let resolver = ProjectResolver::new(Arc::new(catalog));

    let packet = resolver.resolve(&request(&["Learn.XYZ"])).await;

    assert_eq!(packet.projects.len(), 1);
    assert_eq!(packet.projects[0].slug, "learn-xyz");
}

#[tokio::test]
async fn bulk_outage_with_partial_per_slug_success() {
    let catalog = ScriptedCatalog::new()
        .with_listing_unavailable()
        .with_slug_record("alpha", case_study("alpha"))
        .with_slug_record("beta", case_study("beta"))
        .with_failing_slug("gamma");
    let counting = Arc::new(CountingCatalog::new(catalog));

    let resolver = ProjectResolver::new(Arc::clone(&counting) as Arc<dyn CatalogSource>);
    let packet = resolver.resolve(&request(&["alpha", "beta", "gamma"])).await;

    let slugs: Vec<&str> = packet.projects.iter().map(|r| r.slug.as_str()).collect();
    assert_eq!(slugs, vec!["alpha", "beta"]);
    assert_eq!(counting.list_calls(), 1);
}

#[tokio::test]
async fn renamed_record_found_through_normalized_retry() {
    // The CMS renamed the record: only the normalized slug resolves
    let catalog = ScriptedCatalog::new()
        .with_listing(Vec::new())
        .with_slug_record("learn-xyz", case_study("learn-xyz"));
    let resolver = ProjectResolver::new(Arc::new(catalog));

    let packet = resolver.resolve(&request(&["Learn XYZ"])).await;

    assert_eq!(packet.projects.len(), 1);
    assert_eq!(packet.projects[0].slug, "learn-xyz");
}

#[tokio::test]
async fn inline_payload_carries_a_dead_link() {
    let catalog = ScriptedCatalog::new(); // every live call fails or misses
    let resolver = ProjectResolver::new(Arc::new(catalog));

    let inline = vec![case_study("sunset-project")];
    let req = request(&["sunset-project"]).with_inline(inline.clone(), "blob");

    let packet = resolver.resolve(&req).await;
    assert_eq!(packet.projects, inline);
}

#[tokio::test]
async fn live_tiers_win_over_inline_payload() {
    let catalog = ScriptedCatalog::new().with_listing(vec![case_study("alpha")]);
    let counting = Arc::new(CountingCatalog::new(catalog));
    let resolver = ProjectResolver::new(Arc::clone(&counting) as Arc<dyn CatalogSource>);

    let stale = vec![case_study("alpha-but-stale")];
    let req = request(&["alpha"]).with_inline(stale, "blob");

    let packet = resolver.resolve(&req).await;
    assert_eq!(packet.projects[0].slug, "alpha");
    // Inline short-circuit never consulted per-slug fetches either
    assert_eq!(counting.slug_calls(), 0);
}

#[tokio::test]
async fn static_catalog_is_the_floor() {
    let catalog = ScriptedCatalog::new();
    let resolver = ProjectResolver::new(Arc::new(catalog));

    let packet = resolver.resolve(&request(&["learn-xyz", "ghost"])).await;

    // The bundled catalog knows learn-xyz; ghost stays absent
    assert_eq!(packet.projects.len(), 1);
    assert_eq!(packet.projects[0].slug, "learn-xyz");
    assert!(packet.is_partial());
}

#[tokio::test]
async fn fully_exhausted_resolution_is_a_valid_empty_packet() {
    let catalog = ScriptedCatalog::new();
    let resolver = ProjectResolver::new(Arc::new(catalog));

    let packet = resolver.resolve(&request(&["ghost-one", "ghost-two"])).await;

    assert_eq!(packet.slugs, vec!["ghost-one", "ghost-two"]);
    assert!(packet.projects.is_empty());
}

#[tokio::test]
async fn cache_runs_the_upstream_once_per_composite_key() {
    let catalog = ScriptedCatalog::new().with_listing(sample_catalog());
    let counting = Arc::new(CountingCatalog::new(catalog));
    let resolver = ProjectResolver::new(Arc::clone(&counting) as Arc<dyn CatalogSource>);
    let cache = ShareRequestCache::default();

    let req = request(&["learn-xyz"]);

    // Metadata generation and body rendering: two call sites, one key
    let metadata_packet = cache.resolve(&resolver, &req).await;
    let body_packet = cache.resolve(&resolver, &req).await;

    assert_eq!(metadata_packet, body_packet);
    assert_eq!(counting.list_calls(), 1);
}

#[tokio::test]
async fn concurrent_render_phases_coalesce() {
    let catalog = ScriptedCatalog::new().with_listing(sample_catalog());
    let counting = Arc::new(CountingCatalog::new(catalog));
    let resolver = Arc::new(ProjectResolver::new(Arc::clone(&counting) as Arc<dyn CatalogSource>));
    let cache = ShareRequestCache::default();

    let req = request(&["learn-xyz", "atlas-banking"]);
    let (a, b) = tokio::join!(
        cache.resolve(&resolver, &req),
        cache.resolve(&resolver, &req)
    );

    assert_eq!(a, b);
    assert_eq!(counting.list_calls(), 1);
}

#[tokio::test]
async fn catalog_diagnostic_config_does_not_change_results() {
    let catalog = ScriptedCatalog::new().with_listing(vec![case_study("other")]);
    let config = ResolverConfig::new().with_catalog_diagnostic(true);
    let resolver = ProjectResolver::with_config(Arc::new(catalog), config);

    let packet = resolver.resolve(&request(&["ghost"])).await;
    assert!(packet.projects.is_empty());
}
