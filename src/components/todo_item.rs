//! Todo Item Component
//!
//! A single todo row with view and edit modes. Edits are kept in local
//! draft signals until saved; the canonical record only changes through
//! the store.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::Todo;
use crate::store::{store_remove_todo, store_save_edited_todo, use_app_store};

/// One row in the todo list
#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let store = use_app_store();

    let id = todo.id;
    let title = todo.title.clone();
    let description = todo.description.clone();

    let (editing, set_editing) = signal(false);
    let (draft_title, set_draft_title) = signal(todo.title.clone());
    let (draft_description, set_draft_description) = signal(todo.description);

    // Re-copy the committed values on entry, in case a cancelled edit
    // already ran through the drafts.
    let start_edit = {
        let title = title.clone();
        let description = description.clone();
        move |_| {
            set_draft_title.set(title.clone());
            set_draft_description.set(description.clone());
            set_editing.set(true);
        }
    };

    let save_edit = move || {
        store_save_edited_todo(&store, id, draft_title.get(), draft_description.get());
        set_editing.set(false);
    };

    let cancel_edit = {
        let title = title.clone();
        let description = description.clone();
        move |_| {
            set_draft_title.set(title.clone());
            set_draft_description.set(description.clone());
            set_editing.set(false);
        }
    };

    let delete = move |_| store_remove_todo(&store, id);

    let view_title = title.clone();
    let view_description = description.clone();

    view! {
        <div class="todo-list-item">
            <div class="todo-list-item__content">
                <div class="todo-list-item__heading">
                    <input type="checkbox" class="todo-list-item__checkbox" />
                    {move || if editing.get() {
                        view! {
                            <input
                                type="text"
                                class="todo-list-item__title--edit"
                                prop:value=move || draft_title.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                    set_draft_title.set(input.value());
                                }
                                on:keydown=move |ev: web_sys::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        save_edit();
                                    }
                                }
                            />
                        }.into_any()
                    } else {
                        view! {
                            <h3 class="todo-list-item__title">{view_title.clone()}</h3>
                        }.into_any()
                    }}
                </div>
                <div class="todo-list-item__info">
                    {move || if editing.get() {
                        view! {
                            <textarea
                                class="todo-list-item__description"
                                prop:value=move || draft_description.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let textarea = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                    set_draft_description.set(textarea.value());
                                }
                            ></textarea>
                        }.into_any()
                    } else {
                        view! {
                            <p class="todo-list-item__description">{view_description.clone()}</p>
                        }.into_any()
                    }}
                </div>
                <div class="todo-list-item__btns">
                    <Show when=move || editing.get()>
                        <button
                            class="todo-list-item__btn todo-list-item__btn--edit"
                            on:click=move |_| save_edit()
                        >
                            "Save"
                        </button>
                        <button
                            class="todo-list-item__btn todo-list-item__btn--cancel"
                            on:click=cancel_edit.clone()
                        >
                            "Cancel"
                        </button>
                    </Show>
                    <Show when=move || !editing.get()>
                        <button
                            class="todo-list-item__btn todo-list-item__btn--edit"
                            on:click=start_edit.clone()
                        >
                            "Edit"
                        </button>
                    </Show>
                    <button
                        class="todo-list-item__btn todo-list-item__btn--delete"
                        on:click=delete
                    >
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
