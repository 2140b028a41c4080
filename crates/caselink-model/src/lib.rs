//! Caselink Model - core types for the share-link pipeline
//!
//! Defines the fundamental vocabulary shared by every caselink crate:
//! - Case-study records and their opaque identifiers
//! - Slug normalization for cross-source comparison
//! - Share requests parsed from incoming share links
//! - Resolved packets handed to the rendering layer
//!
//! # Example
//!
//! ```rust
//! use caselink_model::{slug, ShareRequest};
//!
//! assert_eq!(slug::normalize("Learn.XYZ"), "learn-xyz");
//!
//! let request = ShareRequest::new(vec!["learn-xyz".to_string()]);
//! assert_eq!(request.slugs.len(), 1);
//! ```

#![warn(unreachable_pub)]

pub mod packet;
pub mod record;
pub mod request;
pub mod slug;

// Re-exports for convenience
pub use packet::ResolvedPacket;
pub use record::{CaseStudy, CaseStudyId};
pub use request::{split_slugs, RequestKey, ShareRequest};
pub use slug::{normalize, SlugKey};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
