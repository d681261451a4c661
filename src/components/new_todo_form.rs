//! New Todo Form Component
//!
//! Creation form bound to the store draft: title input, description
//! textarea, submit control.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::DraftRejected;
use crate::notify;
use crate::store::{
    store_create_todo, store_draft, store_set_draft_description, store_set_draft_title,
    use_app_store,
};

/// Warning shown when create is attempted without a title
const EMPTY_TITLE_WARNING: &str = "Please enter a title for the todo.";

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Err(DraftRejected::BlankTitle) = store_create_todo(&store) {
            notify::blocking_warn(EMPTY_TITLE_WARNING);
        }
    };

    view! {
        <form class="todo-form" on:submit=create_todo>
            <div class="todo-form-info">
                <input
                    type="text"
                    id="todo-title"
                    placeholder="Title"
                    prop:value=move || store_draft(&store).title
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        store_set_draft_title(&store, input.value());
                    }
                />
                <textarea
                    id="todo-desc"
                    cols="30"
                    rows="10"
                    placeholder="Description"
                    prop:value=move || store_draft(&store).description
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let textarea = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                        store_set_draft_description(&store, textarea.value());
                    }
                ></textarea>
            </div>
            <button type="submit" class="todo-create-btn">"Create Task"</button>
        </form>
    }
}
