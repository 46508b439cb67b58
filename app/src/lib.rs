//! Checklist: a minimal local todo list.
//!
//! Users add, toggle-complete, delete, and filter short text tasks. The
//! list persists write-through to a single JSON blob: every change is
//! serialized and stored before the mutator returns. The transition logic
//! is a pure reducer run by the `checklist-runtime` store; this crate adds
//! the domain types, the filter derivation, the storage adapter, and the
//! composition root.
//!
//! # Quick Start
//!
//! ```
//! use checklist::TodoApp;
//! use checklist::storage::MemoryStorage;
//! use checklist_core::environment::UuidIdGenerator;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), checklist::AppError> {
//! let storage = Arc::new(MemoryStorage::new());
//! let mut app = TodoApp::load(storage, Arc::new(UuidIdGenerator))?;
//!
//! app.add("Buy milk").await?;
//! let id = app.todos().await[0].id;
//! app.toggle(id, true).await?;
//!
//! app.set_hide_completed(true);
//! assert!(app.visible().await.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod filter;
pub mod reducer;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use app::{AppError, TodoApp};
pub use filter::Filter;
pub use reducer::{TodoEnvironment, TodoReducer};
pub use types::{TodoAction, TodoId, TodoItem, TodoState};
