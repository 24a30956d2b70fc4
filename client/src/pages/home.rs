//! Landing page: header with the theme toggle and a short introduction.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;

/// Home page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <header class="page__header">
                <a href="/" class="page__brand">"Nexus"</a>
                <span class="page__spacer"></span>
                <ThemeToggle/>
            </header>

            <main class="page__content">
                <h1>"Nexus"</h1>
                <p>
                    "Pick a theme with the button in the header. Your choice is remembered "
                    "in this browser; until you make one, the page follows your system "
                    "color scheme."
                </p>
            </main>
        </div>
    }
}
