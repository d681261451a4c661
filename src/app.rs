//! Todo App Root
//!
//! Root component: builds the store from durable storage, provides it via
//! context, and renders the creation form above the todo list.

use leptos::prelude::*;
use reactive_stores::Store;
use web_sys::console;

use crate::components::{NewTodoForm, TodoItem};
use crate::storage;
use crate::store::{store_todos, AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let todos = storage::load_todos();
    console::log_1(&format!("[APP] loaded {} todos", todos.len()).into());

    let store: AppStore = Store::new(AppState::with_todos(todos));
    provide_context(store);

    view! {
        <div class="todo-heading">
            <div class="container">
                <h1>"Todo List"</h1>
                <NewTodoForm />
            </div>
        </div>
        <div class="todo-list-wrapper">
            <div class="container">
                <div class="todo-list">
                    // Rows are keyed on the full record so a saved edit
                    // re-renders the affected row from the updated list.
                    <For
                        each=move || store_todos(&store)
                        key=|todo| (todo.id, todo.title.clone(), todo.description.clone())
                        children=move |todo| view! { <TodoItem todo=todo /> }
                    />
                </div>
                <p class="item-count">
                    {move || format!("{} todos", store_todos(&store).len())}
                </p>
            </div>
        </div>
    }
}
