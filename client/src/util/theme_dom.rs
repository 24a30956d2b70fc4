//! Browser bindings for the theme controller.
//!
//! Marks `<body>` with a `data-theme` attribute, uses the element carrying
//! `data-theme-toggle` as the toggle control, persists the explicit choice in
//! `localStorage` and listens to `(prefers-color-scheme: dark)`. Requires a
//! browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Everything here is hydrate-only; SSR and native test builds get an inert
//! [`bind_document`] that never touches a page.

use theme::ThemeBinding;

#[cfg(test)]
#[path = "theme_dom_test.rs"]
mod theme_dom_test;

/// Attribute identifying the toggle control element.
pub const TOGGLE_ATTRIBUTE: &str = "data-theme-toggle";
/// Selector used to find the toggle control.
pub const TOGGLE_SELECTOR: &str = "[data-theme-toggle]";
/// Theme marker attribute written on `<body>`.
pub const MARKER_ATTRIBUTE: &str = "data-theme";
/// Media query reporting the OS dark color-scheme preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Bind a theme controller to the current document.
///
/// Returns `None` when there is no document or no toggle control on the
/// page; in that case nothing on the page is touched. Dropping the returned
/// binding removes the click and media-query listeners.
pub fn bind_document() -> Option<ThemeBinding> {
    #[cfg(feature = "hydrate")]
    {
        browser::document_context().and_then(theme::ThemeController::bind)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use theme::{
        ClickHandler, PreferenceStore, SchemeHandler, StoreError, Subscription, SystemColorScheme,
        ThemeContext, ThemeMarker, ToggleControl,
    };
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Element, Event, EventTarget, HtmlElement, MediaQueryList, MediaQueryListEvent, Storage};

    use super::{DARK_SCHEME_QUERY, MARKER_ATTRIBUTE, TOGGLE_SELECTOR};

    /// Collect the page capabilities from `window`/`document`.
    pub(super) fn document_context() -> Option<ThemeContext> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let body = document.body()?;

        let control = match document.query_selector(TOGGLE_SELECTOR) {
            Ok(Some(element)) => Some(Box::new(ToggleButton(element)) as Box<dyn ToggleControl>),
            Ok(None) => None,
            Err(err) => {
                log::warn!("theme toggle lookup failed: {err:?}");
                None
            }
        };
        let storage = window.local_storage().unwrap_or_else(|err| {
            log::warn!("localStorage unavailable: {err:?}");
            None
        });
        let query = window.match_media(DARK_SCHEME_QUERY).unwrap_or_else(|err| {
            log::warn!("matchMedia failed: {err:?}");
            None
        });

        Some(ThemeContext {
            marker: Box::new(BodyMarker(body)),
            control,
            store: Box::new(LocalStore(storage)),
            system: Box::new(ColorSchemeQuery(query)),
        })
    }

    struct BodyMarker(HtmlElement);

    impl ThemeMarker for BodyMarker {
        fn read(&self) -> Option<String> {
            self.0.get_attribute(MARKER_ATTRIBUTE)
        }

        fn write(&self, value: &str) {
            if let Err(err) = self.0.set_attribute(MARKER_ATTRIBUTE, value) {
                log::warn!("failed to set {MARKER_ATTRIBUTE}: {err:?}");
            }
        }
    }

    struct ToggleButton(Element);

    impl ToggleControl for ToggleButton {
        fn set_label(&self, label: &str) {
            self.0.set_text_content(Some(label));
        }

        fn on_click(&self, handler: ClickHandler) -> Subscription {
            let mut handler = handler;
            listen(&self.0, "click", move |_: Event| handler())
        }
    }

    struct LocalStore(Option<Storage>);

    impl PreferenceStore for LocalStore {
        fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
            let storage = self.0.as_ref().ok_or(StoreError::Unavailable)?;
            storage.get_item(key).map_err(backend_error)
        }

        fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
            let storage = self.0.as_ref().ok_or(StoreError::Unavailable)?;
            storage.set_item(key, value).map_err(backend_error)
        }
    }

    struct ColorSchemeQuery(Option<MediaQueryList>);

    impl SystemColorScheme for ColorSchemeQuery {
        fn prefers_dark(&self) -> bool {
            self.0.as_ref().map_or(false, MediaQueryList::matches)
        }

        fn on_change(&self, handler: SchemeHandler) -> Subscription {
            let Some(query) = &self.0 else {
                return Subscription::inert();
            };
            let mut handler = handler;
            let fallback = query.clone();
            listen(query, "change", move |event: Event| {
                let prefers_dark = event
                    .dyn_ref::<MediaQueryListEvent>()
                    .map_or_else(|| fallback.matches(), MediaQueryListEvent::matches);
                handler(prefers_dark);
            })
        }
    }

    /// Register `callback` for `event` on `target`; the returned handle
    /// removes it and frees the closure.
    fn listen(
        target: &EventTarget,
        event: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Subscription {
        let closure = Closure::<dyn FnMut(Event)>::new(callback);
        if let Err(err) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!("failed to listen for {event}: {err:?}");
            return Subscription::inert();
        }

        let target = target.clone();
        Subscription::new(move || {
            if let Err(err) =
                target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            {
                log::warn!("failed to remove {event} listener: {err:?}");
            }
        })
    }

    fn backend_error(err: JsValue) -> StoreError {
        StoreError::Backend(err.as_string().unwrap_or_else(|| format!("{err:?}")))
    }
}
