//! Caselink Codec - the wire layer of share links
//!
//! Everything that moves selection data through a URL:
//! - Inline payload encode/decode (compact, URL-safe, best-effort)
//! - Deterministic cover placeholders for rehydrated records
//! - Share-link composition and parsing
//!
//! Decode failures are silent by design: the inline payload is a
//! fallback data source, not a required input, so a malformed blob
//! signals "no usable inline data" rather than an error. Each swallow
//! point still emits a debug-level diagnostic so the behavior stays
//! observable.

#![warn(unreachable_pub)]

pub mod cover;
pub mod error;
pub mod link;
pub mod payload;

// Re-exports for convenience
pub use cover::placeholder_cover;
pub use error::{CodecError, LinkError};
pub use link::{request_from_parts, request_from_url, share_url};
pub use payload::{decode, decode_items, encode, InlinePayloadItem};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
