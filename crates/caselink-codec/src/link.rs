//! Share-link composition and parsing
//!
//! The link shape is
//! `/share/<comma-separated-slugs>?for=<name>&note=<text>&d=<payload>`.
//! Composition is used by the curation UI's link builder; parsing is
//! the entry point for an incoming request.

use crate::error::LinkError;
use crate::payload;
use caselink_model::slug::normalize;
use caselink_model::{split_slugs, CaseStudy, ShareRequest};
use url::Url;

/// Compose a share URL for a selected record list.
///
/// Slugs are normalized into the path segment; the selection is also
/// embedded as an inline payload so the link survives CMS outages and
/// slug renames.
///
/// # Errors
/// Returns [`LinkError::InvalidUrl`] if `base` is not a parseable URL,
/// or [`LinkError::Codec`] if payload serialization fails.
pub fn share_url(
    base: &str,
    items: &[CaseStudy],
    company_name: Option<&str>,
    note: Option<&str>,
) -> Result<String, LinkError> {
    let mut url = Url::parse(base)?;
    let segment = items
        .iter()
        .map(|record| normalize(&record.slug))
        .collect::<Vec<_>>()
        .join(",");
    url.set_path(&format!("/share/{segment}"));
    url.set_query(None);

    if company_name.is_some() || note.is_some() || !items.is_empty() {
        let mut pairs = url.query_pairs_mut();
        if let Some(name) = company_name {
            pairs.append_pair("for", name);
        }
        if let Some(note) = note {
            pairs.append_pair("note", note);
        }
        if !items.is_empty() {
            pairs.append_pair("d", &payload::encode(items)?);
        }
    }

    Ok(url.into())
}

/// Build a [`ShareRequest`] from the raw route parts.
///
/// `raw_segment` is the still-encoded slug path segment;
/// `raw_query` is the query string without the leading `?`. Total:
/// anything unusable degrades to an absent field, never an error.
#[must_use]
pub fn request_from_parts(raw_segment: &str, raw_query: Option<&str>) -> ShareRequest {
    let slugs = split_slugs(raw_segment);

    let mut company_name = None;
    let mut note = None;
    let mut raw_payload = None;
    if let Some(query) = raw_query {
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "for" => company_name = Some(value.into_owned()),
                "note" => note = Some(value.into_owned()),
                "d" => raw_payload = Some(value.into_owned()),
                _ => {}
            }
        }
    }

    let inline = payload::decode(raw_payload.as_deref());

    ShareRequest {
        slugs,
        inline,
        company_name,
        note,
        raw_path: raw_segment.to_string(),
        raw_payload,
    }
}

/// Build a [`ShareRequest`] from a full share URL.
///
/// # Errors
/// Returns [`LinkError::NotAShareLink`] when the path is not
/// `/share/<slugs>`, or [`LinkError::InvalidUrl`] when the input does
/// not parse at all.
pub fn request_from_url(input: &str) -> Result<ShareRequest, LinkError> {
    let url = Url::parse(input)?;
    let mut segments = url.path_segments().ok_or(LinkError::NotAShareLink)?;
    match (segments.next(), segments.next()) {
        (Some("share"), Some(raw_segment)) => Ok(request_from_parts(raw_segment, url.query())),
        _ => Err(LinkError::NotAShareLink),
    }
}
