//! # Checklist Runtime
//!
//! Runtime implementation for the Checklist reducer architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that manages state and executes effects
//! - **Effect Executor**: Drives effect descriptions and feeds produced
//!   actions back into the reducer
//! - **Snapshot Channel**: Publishes an owned state snapshot after every
//!   transition so any number of observers can watch one shared handle
//!
//! ## Example
//!
//! ```ignore
//! use checklist_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething).await;
//!
//! // Read state
//! let value = store.state(|s| s.some_field.clone()).await;
//! ```

pub use store::Store;

/// Store module - The runtime for reducers
pub mod store {
    use checklist_core::effect::Effect;
    use checklist_core::reducer::Reducer;
    use std::collections::VecDeque;
    use std::sync::Arc;
    use tokio::sync::{RwLock, watch};

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock` for concurrent access)
    /// 2. Reducer (transition logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with action feedback)
    ///
    /// # Ordering
    ///
    /// Transitions serialize at the state write lock, so actions apply
    /// strictly in the order `send` calls resolve. Effects returned by the
    /// reducer are awaited inline: `send` does not return until every
    /// effect, and every action those effects fed back, has completed.
    /// There is no reordering and no coalescing.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: R,
        environment: E,
        snapshots: watch::Sender<S>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
        A: Send + 'static,
        S: Clone + Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// # Arguments
        ///
        /// - `initial_state`: The starting state for the store
        /// - `reducer`: The reducer implementation (transition logic)
        /// - `environment`: Injected dependencies
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            let (snapshots, _) = watch::channel(initial_state.clone());

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer,
                environment,
                snapshots,
            }
        }

        /// Send an action to the store
        ///
        /// This is the primary way to interact with the store:
        /// 1. Acquires the write lock on state
        /// 2. Calls the reducer with (state, action, environment)
        /// 3. Publishes a state snapshot to observers
        /// 4. Awaits returned effects; actions they produce loop back to 1
        ///
        /// When `send` returns, the transition and everything it caused are
        /// complete and visible through [`Store::state`].
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) {
            let mut pending = VecDeque::new();
            pending.push_back(action);

            while let Some(action) = pending.pop_front() {
                tracing::debug!("Processing action");

                let effects = {
                    let mut state = self.state.write().await;
                    tracing::trace!("Acquired write lock on state");

                    let effects = self.reducer.reduce(&mut *state, action, &self.environment);
                    tracing::trace!("Reducer completed, returned {} effects", effects.len());

                    // Observers get an owned snapshot nothing else can mutate
                    self.snapshots.send_replace(state.clone());

                    effects
                };

                for effect in effects {
                    match effect {
                        Effect::None => {}
                        Effect::Future(fut) => {
                            if let Some(produced) = fut.await {
                                tracing::trace!("Effect produced a feedback action");
                                pending.push_back(produced);
                            }
                        }
                    }
                }
            }

            tracing::debug!("Action processing completed");
        }

        /// Read current state via a closure
        ///
        /// Access state through a closure to ensure the lock is released
        /// promptly:
        ///
        /// ```ignore
        /// let todo_count = store.state(|s| s.todos.len()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&state)
        }

        /// Subscribe to state snapshots
        ///
        /// Returns a receiver that holds the latest state snapshot and wakes
        /// after every transition. Receivers that lag simply skip to the
        /// newest snapshot; there is no backlog to drain.
        #[must_use]
        pub fn subscribe(&self) -> watch::Receiver<S> {
            self.snapshots.subscribe()
        }
    }
}
