//! Category list page with add and delete actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page owns the round trip to the backend. The add modal and the row
//! delete controls only raise a pending action; an effect tracking that
//! action applies it and re-fetches the full list.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use leptos::prelude::*;

use crate::components::category_add_modal::CategoryAddModal;
use crate::components::nav_bar::NavBar;
use crate::net::api::encode_path_segment;
use crate::net::types::{Category, ModelAction};
use crate::state::categories::CategoriesState;
use crate::state::category_form::CategoryModalState;

/// Path of the word editor for one category.
#[must_use]
pub fn category_href(name: &str) -> String {
    format!("/categories/{}", encode_path_segment(name))
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let categories = RwSignal::new(CategoriesState::default());
    let pending = RwSignal::new(None::<ModelAction<Category>>);
    let modal = RwSignal::new(CategoryModalState::default());

    // Runs on mount and again whenever a new pending action is queued. The
    // action is cleared without notifying so the clear does not re-run this.
    Effect::new(move || {
        let action = pending.get();
        if action.is_some() {
            pending.update_untracked(|p| *p = None);
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let service = crate::net::api::HttpCategoryService::default();
            let fetched = crate::state::categories::sync_categories(&service, action).await;
            categories.update(|s| s.finish_sync(fetched));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = action;
    });

    let on_action = Callback::new(move |action: ModelAction<Category>| pending.set(Some(action)));

    view! {
        <NavBar/>
        <div class="container">
            <table class="categories-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Description"</th>
                        <th>"Amount"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        categories
                            .get()
                            .items
                            .into_iter()
                            .map(|c| {
                                let href = category_href(&c.name);
                                let row = c.clone();
                                view! {
                                    <tr>
                                        <td>{c.name}</td>
                                        <td>{c.description}</td>
                                        <td class="text-center">{c.amount}</td>
                                        <td class="text-center">
                                            <a href=href class="categories-table__edit" title="Edit words">
                                                "✎"
                                            </a>
                                            <a
                                                href="#"
                                                class="categories-table__delete"
                                                title="Delete category"
                                                on:click=move |ev| {
                                                    ev.prevent_default();
                                                    on_action.run(ModelAction::delete(row.clone()));
                                                }
                                            >
                                                "🗑"
                                            </a>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
            <button class="btn btn--primary" type="button" on:click=move |_| modal.update(CategoryModalState::open)>
                "Add Category"
            </button>
        </div>
        <CategoryAddModal modal=modal on_action=on_action/>
    }
}
