use std::fmt;

use super::{CoordinatorState, FormationMode, LocketId};

/// Handle returned by [`StateStore::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Observer callback, invoked with `(current, previous)` after each mutation.
type Listener = Box<dyn FnMut(&CoordinatorState, &CoordinatorState)>;

/// Owner of the [`CoordinatorState`].
///
/// Every mutator builds the complete next state, swaps it in with a single
/// assignment, bumps [`revision`](Self::revision) and then notifies
/// subscribers. Listeners run on every mutator call, including ones that
/// leave the value unchanged.
///
/// The store does not enforce the focus/formation mutual exclusion; see
/// [`toggle_formation_mode`](Self::toggle_formation_mode).
pub struct StateStore {
    state: CoordinatorState,
    /// Monotonically increasing; bumped on every mutator call.
    revision: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl StateStore {
    /// Create a store in the initial `(Scattered, none)` state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: CoordinatorState::default(),
            revision: 0,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn get_state(&self) -> CoordinatorState {
        self.state.clone()
    }

    /// Borrow the current state without cloning.
    #[must_use]
    pub fn state(&self) -> &CoordinatorState {
        &self.state
    }

    /// Number of mutator calls applied so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Set the formation mode unconditionally.
    pub fn set_formation_mode(&mut self, mode: FormationMode) {
        let next = CoordinatorState {
            formation: mode,
            focus: self.state.focus.clone(),
        };
        self.replace(next);
    }

    /// Flip between scattered and assembled.
    ///
    /// Callers must not invoke this while a locket is focused (check
    /// [`InteractionFlags::formation_toggle_enabled`] first). The store does
    /// not reject the call: it logs a warning and flips anyway.
    ///
    /// [`InteractionFlags::formation_toggle_enabled`]:
    ///     crate::gate::InteractionFlags::formation_toggle_enabled
    pub fn toggle_formation_mode(&mut self) {
        if let Some(id) = &self.state.focus {
            log::warn!(
                "formation toggled while {id} is focused; callers should \
                 check formation_toggle_enabled first"
            );
        }
        self.set_formation_mode(self.state.formation.toggled());
    }

    /// Replace the focused locket (last write wins).
    pub fn set_focus(&mut self, focus: Option<LocketId>) {
        let next = CoordinatorState {
            formation: self.state.formation,
            focus,
        };
        self.replace(next);
    }

    /// Register a listener called after every mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&CoordinatorState, &CoordinatorState) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn replace(&mut self, next: CoordinatorState) {
        let previous = std::mem::replace(&mut self.state, next);
        self.revision += 1;
        if previous != self.state {
            log::debug!("state {previous} -> {}", self.state);
        }
        for (_, listener) in &mut self.listeners {
            listener(&self.state, &previous);
        }
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StateStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateStore")
            .field("state", &self.state)
            .field("revision", &self.revision)
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}
