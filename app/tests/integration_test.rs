//! Integration tests for the todo application
//!
//! These exercise the whole stack through the public handle: reducer,
//! store runtime, filter derivation, and write-through persistence.

use checklist::storage::{self, FileStorage, MemoryStorage, TodoStorage};
use checklist::{AppError, TodoApp};
use checklist_core::environment::UuidIdGenerator;
use std::sync::Arc;

fn app_with(storage: Arc<MemoryStorage>) -> TodoApp {
    TodoApp::load(storage, Arc::new(UuidIdGenerator)).expect("startup with valid storage")
}

#[tokio::test]
async fn starts_empty_when_nothing_was_persisted() {
    let app = app_with(Arc::new(MemoryStorage::new()));
    assert!(app.todos().await.is_empty());
}

#[tokio::test]
async fn end_to_end_wash_car() {
    let storage = Arc::new(MemoryStorage::new());
    let mut app = app_with(Arc::clone(&storage));

    app.add("Wash car").await.expect("add persists");
    let id = app.todos().await[0].id;
    app.toggle(id, true).await.expect("toggle persists");

    // Hidden while completed todos are filtered out
    app.set_hide_completed(true);
    assert!(app.visible().await.is_empty());

    // Visible, and completed, without the filter
    app.set_hide_completed(false);
    let view = app.visible().await;
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].name, "Wash car");
    assert!(view[0].completed);
}

#[tokio::test]
async fn every_mutation_writes_through_immediately() {
    let storage = Arc::new(MemoryStorage::new());
    let app = app_with(Arc::clone(&storage));

    app.add("Buy milk").await.expect("add persists");
    let blob = storage.snapshot().expect("blob written after add");
    let persisted = storage::decode(&blob).expect("blob parses");
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].name, "Buy milk");
    assert!(!persisted[0].completed);

    let id = persisted[0].id;
    app.toggle(id, true).await.expect("toggle persists");
    let blob = storage.snapshot().expect("blob written after toggle");
    let persisted = storage::decode(&blob).expect("blob parses");
    assert!(persisted[0].completed);

    app.delete(id).await.expect("delete persists");
    assert_eq!(storage.snapshot().as_deref(), Some("[]"));
}

#[tokio::test]
async fn list_survives_a_restart_in_order() {
    let storage = Arc::new(MemoryStorage::new());

    {
        let app = app_with(Arc::clone(&storage));
        app.add("First").await.expect("add persists");
        app.add("Second").await.expect("add persists");
        app.add("Third").await.expect("add persists");
    }

    let reloaded = app_with(storage);
    let names: Vec<_> = reloaded
        .todos()
        .await
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

#[tokio::test]
async fn filter_scenario_buy_milk() {
    let storage = Arc::new(MemoryStorage::new());
    let mut app = app_with(storage);

    app.add("Buy milk").await.expect("add persists");
    app.add("Buy eggs").await.expect("add persists");
    let eggs = app.todos().await[1].id;
    app.toggle(eggs, true).await.expect("toggle persists");

    app.set_name_filter("Buy");
    app.set_hide_completed(true);

    let view = app.visible().await;
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].name, "Buy milk");
}

#[tokio::test]
async fn filter_resets_on_every_startup() {
    let storage = Arc::new(MemoryStorage::new());

    {
        let mut app = app_with(Arc::clone(&storage));
        app.add("Task").await.expect("add persists");
        app.set_name_filter("no such task");
        app.set_hide_completed(true);
        assert!(app.visible().await.is_empty());
    }

    // The filter is transient; a fresh handle starts unfiltered
    let reloaded = app_with(storage);
    assert_eq!(reloaded.filter(), &checklist::Filter::default());
    assert_eq!(reloaded.visible().await.len(), 1);
}

#[tokio::test]
async fn malformed_blob_is_fatal_at_startup() {
    let storage: Arc<MemoryStorage> = Arc::new(MemoryStorage::with_blob("definitely not json"));
    let result = TodoApp::load(storage, Arc::new(UuidIdGenerator));

    assert!(matches!(result, Err(AppError::Malformed(_))));
}

#[tokio::test]
async fn file_backed_app_round_trips_on_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("TODOS.json");

    {
        let storage = Arc::new(FileStorage::new(&path));
        let app = TodoApp::load(storage, Arc::new(UuidIdGenerator)).expect("startup");
        app.add("On disk").await.expect("add persists");
    }

    let storage = Arc::new(FileStorage::new(&path));
    let blob = storage.load().expect("readable").expect("blob exists");
    let persisted = storage::decode(&blob).expect("blob parses");
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].name, "On disk");

    let reloaded = TodoApp::load(storage, Arc::new(UuidIdGenerator)).expect("startup");
    assert_eq!(reloaded.todos().await.len(), 1);
}
