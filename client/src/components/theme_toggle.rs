//! Button that flips the page between dark and light themes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders a plain button carrying `data-theme-toggle`. Once the
//! page hydrates, an effect binds the theme controller to the document; the
//! controller then owns the button label and the `<body>` marker for as long
//! as this component is mounted.

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

use leptos::prelude::*;

/// Label rendered before the controller takes over in the browser.
pub const PLACEHOLDER_LABEL: &str = "Toggle theme";

/// Theme toggle control.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let binding = Rc::new(RefCell::new(None::<theme::ThemeBinding>));
        Effect::new(move || {
            let bound = crate::util::theme_dom::bind_document();
            if bound.is_none() {
                log::debug!("theme toggle mounted without a bindable document");
            }
            *binding.borrow_mut() = bound;
        });
    }

    view! {
        <button type="button" class="theme-toggle" data-theme-toggle="" title="Switch color theme">
            {PLACEHOLDER_LABEL}
        </button>
    }
}
