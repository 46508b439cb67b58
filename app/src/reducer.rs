//! Reducer logic for the todo list.
//!
//! The reducer is a pure state machine: three self-loop transitions
//! (add, toggle, delete), each deterministic in the current list and the
//! action payload. It returns no effects; persistence is the composition
//! root's job.

use crate::types::{TodoAction, TodoId, TodoItem, TodoState};
use checklist_core::{SmallVec, effect::Effect, environment::IdGenerator, reducer::Reducer};
use std::sync::Arc;

/// Environment dependencies for the todo reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Source of fresh todo ids
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }
}

/// Reducer for the todo list
#[derive(Clone, Debug)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TodoReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::Add { name } => {
                let id = TodoId::from_uuid(env.ids.generate());
                state.todos.push(TodoItem::new(id, name));
            }

            TodoAction::Toggle { id, completed } => {
                // Unknown ids fall through silently
                if let Some(todo) = state.todos.iter_mut().find(|t| t.id == id) {
                    todo.completed = completed;
                }
            }

            TodoAction::Delete { id } => {
                state.todos.retain(|t| t.id != id);
            }
        }

        SmallVec::new()
    }
}
