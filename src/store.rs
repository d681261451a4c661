//! Todo Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The canonical
//! todo list and the creation-form draft live here; every list change is
//! mirrored to durable storage before the helper returns.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::list;
use crate::models::{Draft, DraftRejected, Todo};
use crate::storage;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Canonical ordered todo list (insertion order, appends at the end)
    pub todos: Vec<Todo>,
    /// Uncommitted creation-form draft
    pub draft: Draft,
}

impl AppState {
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos,
            draft: Draft::default(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Snapshot of the todo list
pub fn store_todos(store: &AppStore) -> Vec<Todo> {
    store.todos().get()
}

/// Snapshot of the creation-form draft
pub fn store_draft(store: &AppStore) -> Draft {
    store.draft().get()
}

/// Replace the draft title
pub fn store_set_draft_title(store: &AppStore, title: String) {
    store.draft().write().title = title;
}

/// Replace the draft description
pub fn store_set_draft_description(store: &AppStore, description: String) {
    store.draft().write().description = description;
}

/// Commit the draft as a new todo.
///
/// A blank title is rejected and leaves both the list and the draft
/// untouched; the caller surfaces the warning. On success the draft is
/// reset to empty.
pub fn store_create_todo(store: &AppStore) -> Result<(), DraftRejected> {
    let draft = store.draft().get();
    let next = list::created_from_draft(&store.todos().get(), &draft)?;
    store.todos().set(next);
    store.draft().set(Draft::default());
    persist(store);
    Ok(())
}

/// Replace a todo's title and description, keeping its id and position.
/// An unknown id is a no-op.
pub fn store_save_edited_todo(store: &AppStore, id: u32, title: String, description: String) {
    let next = list::with_updated(&store.todos().get(), id, &title, &description);
    store.todos().set(next);
    persist(store);
}

/// Remove a todo by id. An unknown id is a no-op.
pub fn store_remove_todo(store: &AppStore, id: u32) {
    let next = list::without(&store.todos().get(), id);
    store.todos().set(next);
    persist(store);
}

fn persist(store: &AppStore) {
    storage::save_todos(&store.todos().get());
}
