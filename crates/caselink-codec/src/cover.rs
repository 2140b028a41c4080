//! Deterministic cover placeholders
//!
//! Rehydrated inline records and bundled fallback records have no live
//! cover image. Instead of fetching anything, derive a stable seeded
//! placeholder URL from the record's normalized slug so the same record
//! always renders the same cover.

use caselink_model::slug::normalize;

/// Compute a placeholder cover URL for a slug.
///
/// Pure and deterministic: the seed is the hex prefix of a blake3
/// digest over the normalized slug, so drifted spellings of the same
/// slug yield the same cover. No network call is made here; the
/// browser fetches the image when the page renders.
#[must_use]
pub fn placeholder_cover(slug: &str) -> String {
    let key = normalize(slug);
    let digest = blake3::hash(key.as_bytes());
    let seed = hex::encode(&digest.as_bytes()[..4]);
    format!("https://picsum.photos/seed/{seed}/1200/630")
}
