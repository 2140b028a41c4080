//! Slug normalization for cross-source comparison
//!
//! Slugs are human-editable and drift over time: the CMS may hold
//! `learn-xyz` while a previously distributed link says `Learn.XYZ`.
//! Every cross-source comparison goes through [`normalize`] on both
//! sides; raw string equality is never used for matching.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{self, Display, Formatter};

/// Maximal runs of anything outside `[a-z0-9]` collapse to one dash.
static NON_ALNUM: Lazy<Regex> = Lazy::new(|| {
    Regex::new("[^a-z0-9]+").expect("literal pattern compiles")
});

/// Canonicalize free-form slug text into a comparison key.
///
/// Lower-cases the input, replaces every maximal run of characters
/// outside `[a-z0-9]` with a single `-`, then strips leading and
/// trailing dashes. Total and idempotent:
/// `normalize(normalize(x)) == normalize(x)` for all inputs.
///
/// # Examples
/// ```
/// use caselink_model::slug::normalize;
///
/// assert_eq!(normalize("Learn.xyz"), "learn-xyz");
/// assert_eq!(normalize("Learn XYZ"), "learn-xyz");
/// assert_eq!(normalize("--learn-xyz--"), "learn-xyz");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase();
    let collapsed = NON_ALNUM.replace_all(&lowered, "-");
    collapsed.trim_matches('-').to_string()
}

/// A normalized slug usable as a map key
///
/// Construction always normalizes, so two keys built from drifted
/// spellings of the same slug compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlugKey(String);

impl SlugKey {
    /// Build a key from raw slug text
    #[inline]
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(normalize(raw))
    }

    /// Get the normalized form
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether the raw input normalized to nothing
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for SlugKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SlugKey {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl AsRef<str> for SlugKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
