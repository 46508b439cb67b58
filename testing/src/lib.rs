//! # Checklist Testing
//!
//! Testing utilities and helpers for the Checklist reducer architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - Assertion helpers for reducers
//! - The [`ReducerTest`] fluent Given/When/Then harness
//!
//! ## Example
//!
//! ```ignore
//! use checklist_testing::{ReducerTest, mocks::SequentialIdGenerator};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(TodoEnvironment::new(Arc::new(SequentialIdGenerator::new())))
//!     .given_state(TodoState::default())
//!     .when_action(TodoAction::Add { name: "Buy milk".to_string() })
//!     .then_state(|state| assert_eq!(state.todos.len(), 1))
//!     .run();
//! ```


pub use reducer_test::{ReducerTest, assertions};

/// Mock implementations of Environment traits
///
/// Deterministic stand-ins for the production environment so reducer tests
/// are reproducible.
pub mod mocks {
    use checklist_core::environment::IdGenerator;
    use std::sync::atomic::{AtomicU64, Ordering};
    use uuid::Uuid;

    /// Id generator that hands out predictable, strictly increasing ids
    ///
    /// # Example
    ///
    /// ```
    /// use checklist_core::environment::IdGenerator;
    /// use checklist_testing::mocks::SequentialIdGenerator;
    ///
    /// let ids = SequentialIdGenerator::new();
    /// let first = ids.generate();
    /// let second = ids.generate();
    /// assert_ne!(first, second);
    /// assert_eq!(first, SequentialIdGenerator::nth(1));
    /// ```
    #[derive(Debug, Default)]
    pub struct SequentialIdGenerator {
        next: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a generator whose first id is `nth(1)`
        #[must_use]
        pub const fn new() -> Self {
            Self {
                next: AtomicU64::new(1),
            }
        }

        /// The id the generator hands out on its `n`-th call
        #[must_use]
        pub const fn nth(n: u64) -> Uuid {
            Uuid::from_u128(n as u128)
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn generate(&self) -> Uuid {
            let n = self.next.fetch_add(1, Ordering::Relaxed);
            Self::nth(n)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mocks::SequentialIdGenerator;
    use checklist_core::environment::IdGenerator;

    #[test]
    fn sequential_ids_are_deterministic() {
        let ids = SequentialIdGenerator::new();
        assert_eq!(ids.generate(), SequentialIdGenerator::nth(1));
        assert_eq!(ids.generate(), SequentialIdGenerator::nth(2));

        let fresh = SequentialIdGenerator::new();
        assert_eq!(fresh.generate(), SequentialIdGenerator::nth(1));
    }
}
