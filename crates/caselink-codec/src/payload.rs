//! Inline payload encode/decode
//!
//! The payload is the `d` query parameter of a share link: a JSON
//! array of abbreviated records, base64-encoded so freshly minted
//! links keep working even if the CMS is unreachable at share time.
//! Single-letter field names keep the blob short enough to live in a
//! query string.

use crate::cover::placeholder_cover;
use crate::error::CodecError;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use caselink_model::{CaseStudy, CaseStudyId};
use serde::{Deserialize, Serialize};

/// Abbreviated wire shape of one selected record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlinePayloadItem {
    /// Title
    #[serde(rename = "t")]
    pub title: String,
    /// Slug
    #[serde(rename = "s")]
    pub slug: String,
    /// Summary
    #[serde(rename = "d", default)]
    pub summary: String,
    /// Tags, ordered as selected
    #[serde(rename = "k", default)]
    pub tags: Vec<String>,
}

impl From<&CaseStudy> for InlinePayloadItem {
    fn from(record: &CaseStudy) -> Self {
        Self {
            title: record.title.clone(),
            slug: record.slug.clone(),
            summary: record.summary.clone(),
            tags: record.tags.clone(),
        }
    }
}

impl InlinePayloadItem {
    /// Rehydrate into a full record.
    ///
    /// The id and cover are regenerated locally: ids are meaningless
    /// off the live CMS, and the cover is a deterministic placeholder.
    #[must_use]
    pub fn rehydrate(&self) -> CaseStudy {
        CaseStudy::new(CaseStudyId::generate(), self.title.clone(), self.slug.clone())
            .with_summary(self.summary.clone())
            .with_cover(placeholder_cover(&self.slug))
            .with_tags(self.tags.clone())
    }
}

/// Encode a selected record list into a URL-safe payload blob.
///
/// Safe to embed verbatim in a query-string value (URL-safe base64
/// alphabet, no padding).
///
/// # Errors
/// Returns [`CodecError::Serialize`] if JSON serialization fails.
pub fn encode(items: &[CaseStudy]) -> Result<String, CodecError> {
    let wire: Vec<InlinePayloadItem> = items.iter().map(Into::into).collect();
    let json = serde_json::to_vec(&wire)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decode a payload blob into un-rehydrated wire items.
///
/// Returns `None` when the blob is absent, not base64, not a JSON
/// array of items, or an empty array. Every failure is deliberate
/// silence: the payload is best-effort fallback data.
#[must_use]
pub fn decode_items(blob: Option<&str>) -> Option<Vec<InlinePayloadItem>> {
    let blob = blob?.trim();
    if blob.is_empty() {
        return None;
    }
    let bytes = decode_base64(blob)?;
    let items: Vec<InlinePayloadItem> = match serde_json::from_slice(&bytes) {
        Ok(items) => items,
        Err(err) => {
            tracing::debug!(error = %err, "inline payload is not a case-study array");
            return None;
        }
    };
    if items.is_empty() {
        tracing::debug!("inline payload decoded to an empty array");
        return None;
    }
    Some(items)
}

/// Decode a payload blob into rehydrated records.
///
/// Same silence contract as [`decode_items`]; successful items get a
/// fresh id and a deterministic cover placeholder.
#[must_use]
pub fn decode(blob: Option<&str>) -> Option<Vec<CaseStudy>> {
    decode_items(blob).map(|items| items.iter().map(InlinePayloadItem::rehydrate).collect())
}

/// Canonical links use the URL-safe alphabet; links minted by older
/// builders used the standard one. Accept both.
fn decode_base64(blob: &str) -> Option<Vec<u8>> {
    if let Ok(bytes) = URL_SAFE_NO_PAD.decode(blob) {
        return Some(bytes);
    }
    match STANDARD.decode(blob) {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            tracing::debug!(error = %err, "inline payload is not valid base64");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<CaseStudy> {
        vec![
            CaseStudy::new(CaseStudyId::new("cs-1"), "Learn.xyz", "learn-xyz")
                .with_summary("AI tutoring platform")
                .with_cover("https://cdn.example.com/learn.jpg")
                .with_tags(vec!["education".to_string(), "ai".to_string()]),
            CaseStudy::new(CaseStudyId::new("cs-2"), "Atlas Banking", "atlas-banking")
                .with_summary("Core banking redesign"),
        ]
    }

    #[test]
    fn round_trip_preserves_content_fields() {
        let records = sample();
        let blob = encode(&records).unwrap();
        let decoded = decode(Some(&blob)).unwrap();

        assert_eq!(decoded.len(), records.len());
        for (got, want) in decoded.iter().zip(&records) {
            assert_eq!(got.title, want.title);
            assert_eq!(got.slug, want.slug);
            assert_eq!(got.summary, want.summary);
            assert_eq!(got.tags, want.tags);
        }
    }

    #[test]
    fn round_trip_regenerates_id_and_cover() {
        let records = sample();
        let blob = encode(&records).unwrap();
        let decoded = decode(Some(&blob)).unwrap();

        assert_ne!(decoded[0].id, records[0].id);
        assert_ne!(decoded[0].cover_url, records[0].cover_url);
        assert_eq!(decoded[0].cover_url, placeholder_cover("learn-xyz"));
    }

    #[test]
    fn blob_is_query_string_safe() {
        let blob = encode(&sample()).unwrap();
        assert!(blob
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn decode_absent_is_none() {
        assert_eq!(decode(None), None);
    }

    #[test]
    fn decode_garbage_is_none() {
        assert_eq!(decode(Some("not-base64")), None);
        assert_eq!(decode(Some("!!!%%%")), None);
        assert_eq!(decode(Some("")), None);
        assert_eq!(decode(Some("   ")), None);
    }

    #[test]
    fn decode_non_array_json_is_none() {
        let blob = URL_SAFE_NO_PAD.encode(br#"{"t":"solo"}"#);
        assert_eq!(decode(Some(&blob)), None);
    }

    #[test]
    fn decode_empty_array_is_none() {
        let blob = encode(&[]).unwrap();
        assert_eq!(decode(Some(&blob)), None);
    }

    #[test]
    fn decode_accepts_standard_alphabet() {
        let json = serde_json::to_vec(&[InlinePayloadItem {
            title: "T".to_string(),
            slug: "t".to_string(),
            summary: String::new(),
            tags: Vec::new(),
        }])
        .unwrap();
        let blob = STANDARD.encode(json);
        assert_eq!(decode(Some(&blob)).map(|v| v.len()), Some(1));
    }

    #[test]
    fn decode_items_keeps_wire_shape() {
        let blob = encode(&sample()).unwrap();
        let items = decode_items(Some(&blob)).unwrap();
        assert_eq!(items[0].slug, "learn-xyz");
        assert_eq!(items[1].title, "Atlas Banking");
    }

    #[test]
    fn missing_optional_wire_fields_default() {
        let blob = URL_SAFE_NO_PAD.encode(br#"[{"t":"T","s":"t"}]"#);
        let items = decode_items(Some(&blob)).unwrap();
        assert!(items[0].summary.is_empty());
        assert!(items[0].tags.is_empty());
    }
}
