//! The selection bus

use crate::event::SelectionEvent;
use tokio::sync::broadcast;

/// Default event buffer per subscriber
///
/// Selection events are tiny and a curation session produces at most a
/// few dozen; a lagging subscriber past this depth is a stalled UI.
pub const DEFAULT_CAPACITY: usize = 64;

/// Typed publish/subscribe channel for one curation session scope
///
/// Create one per page/session and hand clones to each region; clones
/// share the same channel. Publishing is fire-and-forget with
/// at-most-once delivery per dispatch and no acknowledgement.
#[derive(Debug, Clone)]
pub struct SelectionBus {
    tx: broadcast::Sender<SelectionEvent>,
}

impl SelectionBus {
    /// Create a bus with the default buffer capacity
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a bus with an explicit buffer capacity
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Subscribe a region to the session.
    ///
    /// Events published before this call are not replayed; a region
    /// that mounts after `CurationStarted` stays idle until the next
    /// session. Drop the returned [`Subscription`] on unmount to
    /// unsubscribe.
    #[must_use]
    pub fn subscribe(&self) -> Subscription {
        Subscription {
            rx: self.tx.subscribe(),
        }
    }

    /// Publish an event to every current subscriber.
    ///
    /// Returns the number of subscribers the event was delivered to;
    /// zero subscribers is not an error.
    pub fn publish(&self, event: SelectionEvent) -> usize {
        match self.tx.send(event) {
            Ok(delivered) => delivered,
            Err(_) => 0,
        }
    }

    /// Begin a curation session
    pub fn start_curation(&self) -> usize {
        self.publish(SelectionEvent::CurationStarted)
    }

    /// Abandon the session
    pub fn cancel_curation(&self) -> usize {
        self.publish(SelectionEvent::CurationCancelled)
    }

    /// Complete the session (a link was produced)
    pub fn end_curation(&self) -> usize {
        self.publish(SelectionEvent::CurationEnded)
    }

    /// Select a rendered item.
    ///
    /// Callers must only toggle slugs they rendered; the bus does not
    /// validate membership against the catalog.
    pub fn select(&self, slug: impl Into<String>) -> usize {
        self.publish(SelectionEvent::ItemSelected { slug: slug.into() })
    }

    /// Deselect a rendered item
    pub fn deselect(&self, slug: impl Into<String>) -> usize {
        self.publish(SelectionEvent::ItemDeselected { slug: slug.into() })
    }

    /// Number of live subscriptions
    #[inline]
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for SelectionBus {
    fn default() -> Self {
        Self::new()
    }
}

/// One region's subscription to the bus
///
/// Dropping it is the teardown contract: the region stops receiving
/// events and its buffered backlog is discarded.
#[derive(Debug)]
pub struct Subscription {
    rx: broadcast::Receiver<SelectionEvent>,
}

impl Subscription {
    /// Receive the next event.
    ///
    /// Returns `None` once every bus handle is gone. A subscriber that
    /// lagged past the buffer skips the lost events and keeps going;
    /// the skip is logged since a mirror may now be stale until the
    /// next session reset.
    pub async fn recv(&mut self) -> Option<SelectionEvent> {
        loop {
            match self.rx.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "selection subscriber lagged; events lost");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Drain one buffered event without waiting.
    ///
    /// Returns `None` when the buffer is empty or the bus is gone.
    pub fn try_recv(&mut self) -> Option<SelectionEvent> {
        loop {
            match self.rx.try_recv() {
                Ok(event) => return Some(event),
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "selection subscriber lagged; events lost");
                }
                Err(_) => return None,
            }
        }
    }
}
