//! Per-subscriber selection mirrors
//!
//! Each region keeps its own mirror of the session state; state
//! mutation is local to the mirror, never shared memory between
//! subscribers. Handlers run to completion per event.

use crate::bus::SelectionBus;
use crate::event::SelectionEvent;
use indexmap::IndexSet;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Session phase as observed by one subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurationState {
    /// No session observed
    #[default]
    Idle,
    /// Inside a curation session
    Curating,
}

/// One subscriber's view of the curation session
///
/// State machine: `Idle -> Curating` on start; back to `Idle` on
/// cancel or end, discarding the selection. Item toggles are honored
/// only while curating, so a region that missed `CurationStarted`
/// stays idle and ignores them.
#[derive(Debug, Clone, Default)]
pub struct SelectionMirror {
    state: CurationState,
    selected: IndexSet<String>,
}

impl SelectionMirror {
    /// Create an idle mirror with an empty selection
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event, running the transition to completion
    pub fn apply(&mut self, event: &SelectionEvent) {
        match event {
            SelectionEvent::CurationStarted => {
                self.state = CurationState::Curating;
                self.selected.clear();
            }
            SelectionEvent::CurationCancelled | SelectionEvent::CurationEnded => {
                self.state = CurationState::Idle;
                self.selected.clear();
            }
            SelectionEvent::ItemSelected { slug } => {
                if self.state == CurationState::Curating {
                    self.selected.insert(slug.clone());
                }
            }
            SelectionEvent::ItemDeselected { slug } => {
                if self.state == CurationState::Curating {
                    self.selected.shift_remove(slug.as_str());
                }
            }
        }
    }

    /// Current session phase
    #[inline]
    #[must_use]
    pub fn state(&self) -> CurationState {
        self.state
    }

    /// Whether a session is in progress
    #[inline]
    #[must_use]
    pub fn is_curating(&self) -> bool {
        self.state == CurationState::Curating
    }

    /// Whether a slug is currently selected
    #[inline]
    #[must_use]
    pub fn contains(&self, slug: &str) -> bool {
        self.selected.contains(slug)
    }

    /// Selected slugs in selection order
    pub fn selection(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    /// Selected slugs in selection order, owned
    #[must_use]
    pub fn selected_slugs(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }

    /// Number of selected items
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// A mirror driven by a background drain task
///
/// For regions that want a passively updated view instead of pumping
/// events themselves: [`MirrorHandle::attach`] subscribes, spawns a
/// task applying each event to a shared mirror, and [`detach`] tears
/// both down on unmount.
///
/// [`detach`]: MirrorHandle::detach
#[derive(Debug)]
pub struct MirrorHandle {
    shared: Arc<Mutex<SelectionMirror>>,
    task: JoinHandle<()>,
}

impl MirrorHandle {
    /// Subscribe to the bus and start mirroring
    #[must_use]
    pub fn attach(bus: &SelectionBus) -> Self {
        let mut subscription = bus.subscribe();
        let shared = Arc::new(Mutex::new(SelectionMirror::new()));
        let mirror = Arc::clone(&shared);
        let task = tokio::spawn(async move {
            while let Some(event) = subscription.recv().await {
                mirror.lock().apply(&event);
            }
        });
        Self { shared, task }
    }

    /// Snapshot the mirror state
    #[must_use]
    pub fn snapshot(&self) -> SelectionMirror {
        self.shared.lock().clone()
    }

    /// Whether a session is in progress
    #[must_use]
    pub fn is_curating(&self) -> bool {
        self.shared.lock().is_curating()
    }

    /// Selected slugs in selection order
    #[must_use]
    pub fn selected_slugs(&self) -> Vec<String> {
        self.shared.lock().selected_slugs()
    }

    /// Stop mirroring and drop the subscription
    pub fn detach(self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn select(slug: &str) -> SelectionEvent {
        SelectionEvent::ItemSelected {
            slug: slug.to_string(),
        }
    }

    fn deselect(slug: &str) -> SelectionEvent {
        SelectionEvent::ItemDeselected {
            slug: slug.to_string(),
        }
    }

    #[test]
    fn full_session_leaves_mirror_empty_and_idle() {
        let mut mirror = SelectionMirror::new();
        mirror.apply(&SelectionEvent::CurationStarted);
        mirror.apply(&select("a"));
        mirror.apply(&deselect("a"));
        mirror.apply(&SelectionEvent::CurationEnded);

        assert_eq!(mirror.state(), CurationState::Idle);
        assert!(mirror.is_empty());
    }

    #[test]
    fn selection_toggles_inside_session() {
        let mut mirror = SelectionMirror::new();
        mirror.apply(&SelectionEvent::CurationStarted);
        mirror.apply(&select("a"));
        mirror.apply(&select("b"));
        mirror.apply(&select("a")); // re-select is a no-op
        assert_eq!(mirror.selected_slugs(), vec!["a", "b"]);

        mirror.apply(&deselect("a"));
        assert_eq!(mirror.selected_slugs(), vec!["b"]);
    }

    #[test]
    fn selection_order_is_retained() {
        let mut mirror = SelectionMirror::new();
        mirror.apply(&SelectionEvent::CurationStarted);
        mirror.apply(&select("c"));
        mirror.apply(&select("a"));
        mirror.apply(&select("b"));
        assert_eq!(mirror.selected_slugs(), vec!["c", "a", "b"]);
    }

    #[test]
    fn idle_mirror_ignores_item_events() {
        let mut mirror = SelectionMirror::new();
        mirror.apply(&select("a"));
        assert!(mirror.is_empty());
        assert_eq!(mirror.state(), CurationState::Idle);
    }

    #[test]
    fn cancel_discards_selection() {
        let mut mirror = SelectionMirror::new();
        mirror.apply(&SelectionEvent::CurationStarted);
        mirror.apply(&select("a"));
        mirror.apply(&SelectionEvent::CurationCancelled);

        assert!(mirror.is_empty());
        assert!(!mirror.is_curating());
    }

    #[test]
    fn restart_resets_selection() {
        let mut mirror = SelectionMirror::new();
        mirror.apply(&SelectionEvent::CurationStarted);
        mirror.apply(&select("a"));
        mirror.apply(&SelectionEvent::CurationStarted);

        assert!(mirror.is_curating());
        assert!(mirror.is_empty());
    }

    async fn wait_until(handle: &MirrorHandle, predicate: impl Fn(&SelectionMirror) -> bool) {
        for _ in 0..100 {
            if predicate(&handle.snapshot()) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("mirror never reached expected state");
    }

    #[tokio::test]
    async fn attached_mirror_follows_the_bus() {
        let bus = SelectionBus::new();
        let handle = MirrorHandle::attach(&bus);

        bus.start_curation();
        bus.select("a");
        wait_until(&handle, |m| m.contains("a")).await;
        assert!(handle.is_curating());

        bus.end_curation();
        wait_until(&handle, |m| !m.is_curating()).await;
        assert!(handle.selected_slugs().is_empty());

        handle.detach();
    }
}
