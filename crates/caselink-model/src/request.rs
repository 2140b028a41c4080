//! Share requests
//!
//! One [`ShareRequest`] is built per incoming request from the share
//! link's path segment and query string, and is immutable afterwards.
//! The raw path and raw payload blob are retained verbatim because
//! together they form the memoization key for the request-scoped cache.

use crate::record::CaseStudy;
use percent_encoding::percent_decode_str;

/// Composite memoization key for one share request
///
/// Two call sites within one incoming request (page metadata and page
/// body) build identical keys and must trigger exactly one resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestKey {
    /// Raw comma-separated slug segment as received
    pub path: String,
    /// Raw inline payload blob as received, if any
    pub payload: Option<String>,
}

/// A parsed share request
#[derive(Debug, Clone, PartialEq)]
pub struct ShareRequest {
    /// Requested slugs, ordered as they appear in the link
    pub slugs: Vec<String>,
    /// Rehydrated inline payload records, if the link carried a usable one
    pub inline: Option<Vec<CaseStudy>>,
    /// Display name for the heading (`for` query parameter)
    pub company_name: Option<String>,
    /// Free-text message to the recipient (`note` query parameter)
    pub note: Option<String>,
    /// Raw slug path segment, kept for the cache key
    pub raw_path: String,
    /// Raw payload blob, kept for the cache key
    pub raw_payload: Option<String>,
}

impl ShareRequest {
    /// Build a request from an already-split slug list
    #[must_use]
    pub fn new(slugs: Vec<String>) -> Self {
        let raw_path = slugs.join(",");
        Self {
            slugs,
            inline: None,
            company_name: None,
            note: None,
            raw_path,
            raw_payload: None,
        }
    }

    /// With rehydrated inline records and the blob they came from
    #[must_use]
    pub fn with_inline(mut self, records: Vec<CaseStudy>, raw_blob: impl Into<String>) -> Self {
        self.inline = Some(records);
        self.raw_payload = Some(raw_blob.into());
        self
    }

    /// With a recipient display name
    #[must_use]
    pub fn with_company_name(mut self, name: impl Into<String>) -> Self {
        self.company_name = Some(name.into());
        self
    }

    /// With a note to the recipient
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Memoization key for the request-scoped cache
    #[inline]
    #[must_use]
    pub fn cache_key(&self) -> RequestKey {
        RequestKey {
            path: self.raw_path.clone(),
            payload: self.raw_payload.clone(),
        }
    }
}

/// Split a raw share-link path segment into requested slugs.
///
/// Percent-decodes the segment, splits on `,`, trims whitespace, and
/// discards empty segments. Never fails; malformed percent escapes
/// decode lossily.
#[must_use]
pub fn split_slugs(raw_segment: &str) -> Vec<String> {
    let decoded = percent_decode_str(raw_segment).decode_utf8_lossy();
    decoded
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}
