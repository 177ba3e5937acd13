//! Top navigation bar shared by every page.

use leptos::prelude::*;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <a class="navbar__brand" href="#home">"Flashcards"</a>
                <div class="navbar__links">
                    <a class="navbar__link" href="#home">"Home"</a>
                    <a class="navbar__link" href="/categories">"Categories"</a>
                </div>
            </div>
        </nav>
    }
}
