//! Caselink Bus - curation session coordination
//!
//! Lets N independently mounted UI regions (a selectable grid, a
//! separately rendered featured card, a sticky action bar) agree on one
//! ephemeral selection without a common state owner:
//! - A typed publish/subscribe channel, instantiated once per
//!   page/session rather than ambiently global
//! - A documented five-event schema for the curation session
//! - A per-subscriber mirror holding the selection state machine
//! - An explicit teardown contract: drop the subscription on unmount
//!
//! Delivery is fire-and-forget and at-most-once per dispatch. A
//! subscriber that joins after `CurationStarted` has fired misses it
//! and must treat "no session observed" as "not curating"; this race
//! on mount order is accepted, not silently corrected.
//!
//! # Example
//!
//! ```rust
//! use caselink_bus::{SelectionBus, SelectionMirror};
//!
//! # tokio_test::block_on(async {
//! let bus = SelectionBus::new();
//! let mut sub = bus.subscribe();
//! let mut mirror = SelectionMirror::new();
//!
//! bus.start_curation();
//! bus.select("learn-xyz");
//!
//! while let Some(event) = sub.try_recv() {
//!     mirror.apply(&event);
//! }
//! assert!(mirror.is_curating());
//! assert!(mirror.contains("learn-xyz"));
//! # });
//! ```

#![warn(unreachable_pub)]

pub mod bus;
pub mod event;
pub mod mirror;

// Re-exports for convenience
pub use bus::{SelectionBus, Subscription, DEFAULT_CAPACITY};
pub use event::SelectionEvent;
pub use mirror::{CurationState, MirrorHandle, SelectionMirror};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
