//! Resolved packets
//!
//! The output contract to the rendering layer. An empty `projects`
//! list is a first-class display state, never an error.

use crate::record::CaseStudy;
use serde::{Deserialize, Serialize};

/// The resolved set of case studies for one share link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPacket {
    /// Slugs exactly as requested
    pub slugs: Vec<String>,
    /// Matched records in requested order; may be shorter than `slugs`
    /// when some requested slugs could not be matched anywhere
    pub projects: Vec<CaseStudy>,
}

impl ResolvedPacket {
    /// Create a packet
    #[inline]
    #[must_use]
    pub fn new(slugs: Vec<String>, projects: Vec<CaseStudy>) -> Self {
        Self { slugs, projects }
    }

    /// A packet with no matches (valid, not an error)
    #[inline]
    #[must_use]
    pub fn empty(slugs: Vec<String>) -> Self {
        Self {
            slugs,
            projects: Vec::new(),
        }
    }

    /// Number of matched records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether nothing matched
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Whether some requested slugs went unmatched
    #[inline]
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.projects.len() < self.slugs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{CaseStudy, CaseStudyId};

    #[test]
    fn empty_packet_is_valid() {
        let packet = ResolvedPacket::empty(vec!["a".to_string()]);
        assert!(packet.is_empty());
        assert!(packet.is_partial());
        assert_eq!(packet.slugs, vec!["a"]);
    }

    #[test]
    fn full_packet_is_not_partial() {
        let record = CaseStudy::new(CaseStudyId::new("cs-1"), "T", "a");
        let packet = ResolvedPacket::new(vec!["a".to_string()], vec![record]);
        assert!(!packet.is_partial());
        assert_eq!(packet.len(), 1);
    }
}
