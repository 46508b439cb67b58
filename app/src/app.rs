//! The application handle: store, storage binding, and filter in one place.
//!
//! [`TodoApp`] is the composition root and the single shared handle the
//! display surfaces talk to. It is constructed explicitly at startup and
//! passed down; there is no ambient singleton.

use crate::filter::{self, Filter};
use crate::reducer::{TodoEnvironment, TodoReducer};
use crate::storage::{self, StorageError, TodoStorage};
use crate::types::{TodoAction, TodoId, TodoItem, TodoState};
use checklist_core::environment::IdGenerator;
use checklist_runtime::Store;
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by the application layer
#[derive(Debug, Error)]
pub enum AppError {
    /// Storage adapter failure; fatal to the invoking operation
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The persisted blob did not parse as a todo list
    ///
    /// Fatal at startup: there is no fallback to an empty list and no
    /// partial recovery.
    #[error("persisted todo list is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The single shared read/write handle over the todo list
///
/// Exposes the filtered view plus the three pre-bound mutators, so display
/// surfaces need not know about dispatch mechanics. Every mutator writes
/// the resulting list through to storage before returning; when a mutator
/// returns `Ok`, the transition is applied and persisted.
pub struct TodoApp {
    store: Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>,
    storage: Arc<dyn TodoStorage>,
    filter: Filter,
}

impl TodoApp {
    /// Read the persisted blob and build the application handle
    ///
    /// An absent blob initializes the empty list. The filter always starts
    /// empty; it is never persisted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the blob cannot be read and
    /// [`AppError::Malformed`] if it does not parse; both are fatal at
    /// startup.
    pub fn load(
        storage: Arc<dyn TodoStorage>,
        ids: Arc<dyn IdGenerator>,
    ) -> Result<Self, AppError> {
        let todos = match storage.load()? {
            Some(blob) => storage::decode(&blob)?,
            None => Vec::new(),
        };
        tracing::debug!(count = todos.len(), "loaded persisted todos");

        let store = Store::new(
            TodoState::from_todos(todos),
            TodoReducer::new(),
            TodoEnvironment::new(ids),
        );

        Ok(Self {
            store,
            storage,
            filter: Filter::default(),
        })
    }

    /// Append a new todo with the given name
    ///
    /// The store performs no name validation; rejecting empty input is the
    /// input surface's job.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] if the write-through persist fails.
    pub async fn add(&self, name: impl Into<String>) -> Result<(), AppError> {
        self.dispatch(TodoAction::Add { name: name.into() }).await
    }

    /// Set the completion flag of a todo; unknown ids are silent no-ops
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] if the write-through persist fails.
    pub async fn toggle(&self, id: TodoId, completed: bool) -> Result<(), AppError> {
        self.dispatch(TodoAction::Toggle { id, completed }).await
    }

    /// Remove a todo; unknown ids are silent no-ops
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] if the write-through persist fails.
    pub async fn delete(&self, id: TodoId) -> Result<(), AppError> {
        self.dispatch(TodoAction::Delete { id }).await
    }

    /// Apply one transition, then write the whole list through to storage
    ///
    /// No debouncing and no batching: every transition rewrites the blob
    /// before control returns to the caller.
    async fn dispatch(&self, action: TodoAction) -> Result<(), AppError> {
        self.store.send(action).await;

        let todos = self.store.state(|s| s.todos.clone()).await;
        let blob = storage::encode(&todos)?;
        self.storage.store(&blob)?;
        tracing::debug!(count = todos.len(), "wrote todo list through to storage");

        Ok(())
    }

    /// Replace the substring filter
    pub fn set_name_filter(&mut self, name_contains: impl Into<String>) {
        self.filter.name_contains = name_contains.into();
    }

    /// Show or hide completed todos
    pub const fn set_hide_completed(&mut self, hide: bool) {
        self.filter.hide_completed = hide;
    }

    /// Current filter settings
    #[must_use]
    pub const fn filter(&self) -> &Filter {
        &self.filter
    }

    /// The derived filtered view, recomputed on every call
    pub async fn visible(&self) -> Vec<TodoItem> {
        let filter = self.filter.clone();
        self.store
            .state(|s| {
                filter::visible(&s.todos, &filter)
                    .into_iter()
                    .cloned()
                    .collect()
            })
            .await
    }

    /// The full unfiltered list, in insertion order
    pub async fn todos(&self) -> Vec<TodoItem> {
        self.store.state(|s| s.todos.clone()).await
    }
}
