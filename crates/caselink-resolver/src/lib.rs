//! Caselink Resolver - tiered, failure-tolerant share-request resolution
//!
//! Given a share request, reconstruct the intended record set through
//! several independent, increasingly degraded data sources:
//! 1. Bulk live listing (preferred: carries live cover images)
//! 2. Per-slug concurrent live fetches with a normalized-form retry
//! 3. The inline payload embedded in the link itself
//! 4. A static catalog bundled with the application
//!
//! Resolution never fails: every upstream error is caught, logged, and
//! treated as "this tier produced nothing". The worst outcome is an
//! empty packet, which the rendering layer shows as a first-class
//! "nothing found" state.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use caselink_model::ShareRequest;
//! use caselink_resolver::{InMemoryCatalog, ProjectResolver, ShareRequestCache};
//!
//! # async fn example() {
//! let catalog = Arc::new(InMemoryCatalog::new());
//! let resolver = ProjectResolver::new(catalog);
//! let cache = ShareRequestCache::default();
//!
//! let request = ShareRequest::new(vec!["learn-xyz".to_string()]);
//! // Metadata generation and body rendering share one resolution
//! let packet = cache.resolve(&resolver, &request).await;
//! let again = cache.resolve(&resolver, &request).await;
//! assert_eq!(packet, again);
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod cache;
pub mod config;
pub mod fallback;
pub mod memory;
pub mod resolver;
pub mod source;

// Re-exports for convenience
pub use cache::{CacheStats, ShareRequestCache};
pub use config::{ConfigError, ResolverConfig};
pub use memory::InMemoryCatalog;
pub use resolver::ProjectResolver;
pub use source::{CatalogSource, SourceError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
