//! Explore store
//!
//! Wraps the pure reducer with ordinary store semantics: `dispatch` feeds an
//! action through [`explore_reducer`], `state` returns a snapshot, and
//! `subscribe` registers a listener that sees every dispatched action (the
//! hook hosts use for routing/debugging and tests use to observe dispatch).
//!
//! Dispatch is expected to happen from a single event loop, but the store is
//! `Send + Sync` so services on other tasks can read snapshots.

use std::sync::RwLock;

use super::state::{explore_reducer, ExploreAction, ExploreState};

type ActionListener = Box<dyn Fn(&ExploreAction) + Send + Sync>;

pub struct ExploreStore {
    state: RwLock<ExploreState>,
    listeners: RwLock<Vec<ActionListener>>,
}

impl Default for ExploreStore {
    fn default() -> Self {
        Self::new(ExploreState::default())
    }
}

impl ExploreStore {
    pub fn new(initial: ExploreState) -> Self {
        Self {
            state: RwLock::new(initial),
            listeners: RwLock::new(Vec::new()),
        }
    }

    /// Run an action through the reducer and notify listeners
    pub fn dispatch(&self, action: ExploreAction) {
        if let Ok(listeners) = self.listeners.read() {
            for listener in listeners.iter() {
                listener(&action);
            }
        }
        if let Ok(mut state) = self.state.write() {
            let next = explore_reducer(std::mem::take(&mut *state), action);
            trace_debug!(
                "Dispatched action, panes={}, split={}",
                next.panes.len(),
                next.is_split()
            );
            *state = next;
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> ExploreState {
        self.state
            .read()
            .map(|state| state.clone())
            .unwrap_or_default()
    }

    /// Register a listener invoked with every dispatched action
    pub fn subscribe(&self, listener: impl Fn(&ExploreAction) + Send + Sync + 'static) {
        if let Ok(mut listeners) = self.listeners.write() {
            listeners.push(Box::new(listener));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::explore::state::{ExploreId, ExploreItemState};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_dispatch_updates_state() {
        let store = ExploreStore::new(ExploreState::with_panes(
            ExploreItemState::default(),
            ExploreItemState::default(),
        ));

        store.dispatch(ExploreAction::SplitClose(ExploreId::Right));

        let state = store.state();
        assert_eq!(state.panes.len(), 1);
        assert!(state.pane(ExploreId::Left).is_some());
    }

    #[test]
    fn test_subscribe_sees_every_action() {
        let store = ExploreStore::default();
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = seen.clone();
        store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.dispatch(ExploreAction::EvenPaneResize);
        store.dispatch(ExploreAction::SyncTimes { synced_times: true });

        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_state_returns_snapshot() {
        let store = ExploreStore::default();
        let before = store.state();

        store.dispatch(ExploreAction::SyncTimes { synced_times: true });

        // The earlier snapshot is unaffected by later dispatches
        assert!(!before.synced_times);
        assert!(store.state().synced_times);
    }
}
