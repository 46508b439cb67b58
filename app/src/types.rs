//! Domain types for the todo list.
//!
//! A todo list is an ordered collection of todo items that can be added,
//! completed, and deleted. Order is insertion order and every item carries
//! an id that is generated once and never changes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a todo item
///
/// Serializes as its UUID string, which is how ids appear in the persisted
/// blob.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Creates a `TodoId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
///
/// This is also the persisted record shape: one JSON object with string
/// fields `id` and `name` and boolean `completed`. There is no version
/// field; any change here is a breaking change to the blob layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier, generated at creation and immutable afterwards
    pub id: TodoId,
    /// Display text of the todo, immutable after creation
    pub name: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new, not-yet-completed todo item
    #[must_use]
    pub const fn new(id: TodoId, name: String) -> Self {
        Self {
            id,
            name,
            completed: false,
        }
    }
}

/// State of the todo list
///
/// Items keep their insertion order; ids are unique within the list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoState {
    /// All todos, oldest first
    pub todos: Vec<TodoItem>,
}

impl TodoState {
    /// Creates a new empty todo state
    #[must_use]
    pub const fn new() -> Self {
        Self { todos: Vec::new() }
    }

    /// Wraps an already-loaded list, e.g. one parsed from storage
    #[must_use]
    pub const fn from_todos(todos: Vec<TodoItem>) -> Self {
        Self { todos }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    /// Returns a todo by id
    #[must_use]
    pub fn get(&self, id: &TodoId) -> Option<&TodoItem> {
        self.todos.iter().find(|t| t.id == *id)
    }

    /// Checks if a todo exists
    #[must_use]
    pub fn exists(&self, id: &TodoId) -> bool {
        self.get(id).is_some()
    }
}

/// Operations on the todo list
///
/// This is a closed set: the original system treated an unknown operation
/// tag as a fatal programming error, which the enum makes unrepresentable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoAction {
    /// Append a new todo with a fresh id and `completed: false`
    ///
    /// The store performs no name validation; empty-name checks belong to
    /// the input surface.
    Add {
        /// Display text for the new todo
        name: String,
    },

    /// Set the completion flag of the matching todo to an explicit value
    ///
    /// An unknown id is a silent no-op.
    Toggle {
        /// Todo to update
        id: TodoId,
        /// New value of the completion flag
        completed: bool,
    },

    /// Remove the matching todo
    ///
    /// An unknown id is a silent no-op.
    Delete {
        /// Todo to remove
        id: TodoId,
    },
}
