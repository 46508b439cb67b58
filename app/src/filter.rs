//! Derived filtered view over the todo list.
//!
//! Filtering is a pure function of the current list and the filter
//! settings: recomputed on every read, never cached, and stable (it keeps
//! the underlying insertion order, it does not re-sort).

use crate::types::TodoItem;

/// Transient filter settings
///
/// Never persisted; every process start begins with the empty filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filter {
    /// Literal, case-sensitive substring the todo name must contain
    pub name_contains: String,
    /// Drop completed todos from the view
    pub hide_completed: bool,
}

impl Filter {
    /// The per-record predicate deciding inclusion in the derived view
    #[must_use]
    pub fn matches(&self, todo: &TodoItem) -> bool {
        (!self.hide_completed || !todo.completed) && todo.name.contains(&self.name_contains)
    }
}

/// The derived view: every todo that passes the filter, in list order
#[must_use]
pub fn visible<'a>(todos: &'a [TodoItem], filter: &Filter) -> Vec<&'a TodoItem> {
    todos.iter().filter(|t| filter.matches(t)).collect()
}
