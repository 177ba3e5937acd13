//! One editable term/definition row in the word editor.

use leptos::prelude::*;

use crate::state::words::WordsState;

fn input_class(invalid: bool) -> &'static str {
    if invalid { "word-card__input word-card__input--invalid" } else { "word-card__input" }
}

/// Card for row `index`; reads and writes through the shared `words` signal.
#[component]
pub fn WordRowCard(index: usize, words: RwSignal<WordsState>) -> impl IntoView {
    let term = move || words.with(|s| s.rows.get(index).map(|w| w.term.clone()).unwrap_or_default());
    let definition = move || words.with(|s| s.rows.get(index).map(|w| w.definition.clone()).unwrap_or_default());
    let term_error = move || words.with(|s| s.visible_errors(index).term);
    let definition_error = move || words.with(|s| s.visible_errors(index).definition);

    let on_delete = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        words.update(|s| {
            s.remove_row(index);
        });
    };

    view! {
        <div class="word-card">
            <div class="word-card__header">
                <span class="word-card__index">{index}</span>
                <a href="#" class="word-card__delete" title="Delete row" on:click=on_delete>
                    "🗑"
                </a>
            </div>
            <div class="word-card__body">
                <div class="word-card__field">
                    <input
                        class=move || input_class(term_error().is_some())
                        type="text"
                        placeholder="term"
                        prop:value=term
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            words.update(|s| s.set_term(index, value));
                        }
                    />
                    <Show when=move || term_error().is_some()>
                        <p class="word-card__feedback">
                            {move || term_error().map(|e| e.message()).unwrap_or_default()}
                        </p>
                    </Show>
                </div>
                <div class="word-card__field">
                    <input
                        class=move || input_class(definition_error().is_some())
                        type="text"
                        placeholder="definition"
                        prop:value=definition
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            words.update(|s| s.set_definition(index, value));
                        }
                    />
                    <Show when=move || definition_error().is_some()>
                        <p class="word-card__feedback">
                            {move || definition_error().map(|e| e.message()).unwrap_or_default()}
                        </p>
                    </Show>
                </div>
            </div>
        </div>
    }
}
