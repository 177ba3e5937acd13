//! Modal form for adding a category.
//!
//! SYSTEM CONTEXT
//! ==============
//! The modal never talks to the network. A submit hands a single POST
//! [`ModelAction`] to the parent through `on_action`; the categories page
//! applies it and re-fetches.

use leptos::prelude::*;

use crate::net::types::{Category, ModelAction};
use crate::state::category_form::CategoryModalState;

#[component]
pub fn CategoryAddModal(
    modal: RwSignal<CategoryModalState>,
    on_action: Callback<ModelAction<Category>>,
) -> impl IntoView {
    let on_close = move || modal.update(CategoryModalState::close);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut action = None;
        modal.update(|m| action = Some(m.submit()));
        if let Some(action) = action {
            on_action.run(action);
        }
    };

    view! {
        <Show when=move || modal.get().show>
            <div class="dialog-backdrop" on:click=move |_| on_close()>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <div class="dialog__header">
                        <h2>"Add category"</h2>
                        <button class="dialog__close" title="Close" on:click=move |_| on_close()>
                            "✕"
                        </button>
                    </div>
                    <form on:submit=on_submit>
                        <div class="dialog__body">
                            <input
                                class="dialog__input"
                                type="text"
                                placeholder="name"
                                prop:value=move || modal.get().name
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    modal.update(|m| m.name = value);
                                }
                            />
                            <input
                                class="dialog__input"
                                type="text"
                                placeholder="description"
                                prop:value=move || modal.get().description
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    modal.update(|m| m.description = value);
                                }
                            />
                        </div>
                        <div class="dialog__actions">
                            <button class="btn" type="button" on:click=move |_| on_close()>
                                "Close"
                            </button>
                            <button class="btn btn--primary" type="submit">
                                "Add"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
