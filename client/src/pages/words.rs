//! Word editor for one category (`/categories/:name`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Rows live only in this page's signal. Stored words are fetched once per
//! category to seed the editor; submit validates and logs, nothing is written
//! back to the server.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::nav_bar::NavBar;
use crate::components::word_row_card::WordRowCard;
use crate::state::words::{WordsState, log_submission};

#[component]
pub fn WordsPage() -> impl IntoView {
    let params = use_params_map();
    let category = Memo::new(move |_| params.read().get("name").unwrap_or_default());
    let words = RwSignal::new(WordsState::default());

    Effect::new(move || {
        let name = category.get();
        words.set(WordsState::default());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api::CategoryService as _;

            let service = crate::net::api::HttpCategoryService::default();
            match service.list_words(&name).await {
                // The route may have moved on while the request was in flight.
                Ok(_) if category.get_untracked() != name => {}
                Ok(stored) => {
                    let mut seeded = false;
                    words.update(|s| seeded = s.seed(stored));
                    if !seeded {
                        leptos::logging::log!("kept edited rows for '{name}'; stored words ignored");
                    }
                }
                Err(e) => leptos::logging::warn!("word fetch for '{name}' failed: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = name;
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut outcome = None;
        words.update(|s| outcome = Some(s.submit()));
        if let Some(Ok(submitted)) = outcome {
            log_submission(&category.get_untracked(), &submitted);
        }
    };

    view! {
        <NavBar/>
        <form class="words-form" on:submit=on_submit>
            <div class="container rows">
                <h2 class="words-form__title">{move || category.get()}</h2>
                <For
                    each=move || 0..words.with(|s| s.rows.len())
                    key=|index| *index
                    children=move |index: usize| view! { <WordRowCard index=index words=words/> }
                />
            </div>
            <div class="container words-form__actions">
                <button class="btn" type="button" on:click=move |_| words.update(WordsState::add_row)>
                    "More"
                </button>
                <button class="btn btn--primary" type="submit">
                    "Save"
                </button>
            </div>
        </form>
    }
}
