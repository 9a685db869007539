//! Synchronous store runtime.
//!
//! The store owns the state, the reducer and the environment. Actions are
//! reduced one at a time; effects returned by the reducer are executed
//! immediately, in order, before [`Store::send`] returns.

use crate::effect::Effect;
use crate::reducer::Reducer;
use std::collections::VecDeque;

/// The Store - runtime for a reducer
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
///
/// # Example
///
/// ```ignore
/// let mut store = Store::new(SaleState::new(3, SaleMode::Fundraiser), SaleReducer::new(), env);
/// store.send(SaleAction::NameEntered("Alice".into()));
/// let phase = store.state(|s| s.phase.clone());
/// ```
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: S,
    reducer: R,
    environment: E,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    /// Create a new store with initial state, reducer, and environment
    #[must_use]
    pub const fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self {
            state: initial_state,
            reducer,
            environment,
        }
    }

    /// Send an action through the reducer
    ///
    /// Actions fed back by [`Effect::Send`] are queued and reduced in the
    /// order they were produced. Returns the number of actions reduced,
    /// including `action` itself.
    pub fn send(&mut self, action: A) -> usize {
        let mut queue = VecDeque::from([action]);
        let mut reduced = 0;

        while let Some(action) = queue.pop_front() {
            reduced += 1;
            let effects = self
                .reducer
                .reduce(&mut self.state, action, &self.environment);
            for effect in effects {
                if let Effect::Send(action) = effect {
                    queue.push_back(*action);
                }
            }
        }

        tracing::trace!(reduced, "store send complete");
        reduced
    }

    /// Read from the current state
    pub fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        f(&self.state)
    }

    /// Consume the store and hand back the final state
    pub fn into_state(self) -> S {
        self.state
    }
}
