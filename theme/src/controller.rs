//! Theme controller: keeps the page marker, the toggle label and the
//! persisted preference in sync.
//!
//! SYSTEM CONTEXT
//! ==============
//! All calls happen on the UI thread in the order the host delivers page
//! load, click and OS change events. Handlers run to completion, so the
//! controller holds no locks and no state of its own: the marker is the
//! current theme and the store is the explicit preference.

use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, warn};

use crate::STORAGE_KEY;
use crate::host::{
    PreferenceStore, Subscription, SystemColorScheme, ThemeContext, ThemeMarker, ToggleControl,
};
use crate::mode::{PreferenceSource, Theme, ThemePreference};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

pub struct ThemeController {
    marker: Box<dyn ThemeMarker>,
    control: Box<dyn ToggleControl>,
    store: Box<dyn PreferenceStore>,
    system: Box<dyn SystemColorScheme>,
}

impl ThemeController {
    /// Resolve and apply the initial theme.
    ///
    /// Returns `None` without touching the page when the context has no
    /// toggle control. Otherwise the persisted explicit preference is applied
    /// if there is one, else the OS preference. Because the marker is written
    /// here, every controller observes a set marker from its first read.
    pub fn initialize(context: ThemeContext) -> Option<Self> {
        let ThemeContext { marker, control, store, system } = context;
        let Some(control) = control else {
            debug!("no theme toggle control on page; theme controller inactive");
            return None;
        };

        let controller = Self { marker, control, store, system };
        let initial = ThemePreference::resolve(controller.persisted(), controller.system.prefers_dark());
        debug!(theme = %initial.value, source = ?initial.source, "initial theme resolved");
        controller.apply_theme(initial.value);
        Some(controller)
    }

    /// [`initialize`](Self::initialize), then subscribe to control clicks
    /// and OS preference changes for as long as the returned binding lives.
    pub fn bind(context: ThemeContext) -> Option<ThemeBinding> {
        let controller = Rc::new(Self::initialize(context)?);

        let on_click = {
            let weak = Rc::downgrade(&controller);
            controller.control.on_click(Box::new(move || {
                if let Some(controller) = Weak::upgrade(&weak) {
                    controller.on_toggle_click();
                }
            }))
        };
        let on_change = {
            let weak = Rc::downgrade(&controller);
            controller.system.on_change(Box::new(move |prefers_dark| {
                if let Some(controller) = Weak::upgrade(&weak) {
                    controller.on_system_preference_change(prefers_dark);
                }
            }))
        };

        Some(ThemeBinding { controller, subscriptions: vec![on_click, on_change] })
    }

    /// Mark the page with `theme` and relabel the control with the opposite
    /// mode's name.
    pub fn apply_theme(&self, theme: Theme) {
        self.marker.write(theme.as_str());
        self.control.set_label(theme.toggle_label());
    }

    /// Theme currently marked on the page. An unset or unrecognized marker
    /// reads as `Dark`.
    #[must_use]
    pub fn current_theme(&self) -> Theme {
        match self.marker.read().map(|raw| raw.parse::<Theme>()) {
            Some(Ok(theme)) => theme,
            _ => Theme::Dark,
        }
    }

    /// Current theme and whether it is backed by a persisted explicit choice.
    #[must_use]
    pub fn preference(&self) -> ThemePreference {
        let source = if self.persisted().is_some() {
            PreferenceSource::Explicit
        } else {
            PreferenceSource::System
        };
        ThemePreference { value: self.current_theme(), source }
    }

    /// Flip the theme and persist it as the explicit preference.
    ///
    /// The new theme stays applied even if the store rejects the write.
    pub fn on_toggle_click(&self) -> Theme {
        let next = self.current_theme().toggled();
        self.apply_theme(next);
        match self.store.save(STORAGE_KEY, next.as_str()) {
            Ok(()) => debug!(theme = %next, "explicit theme saved"),
            Err(error) => warn!(%error, theme = %next, "failed to persist theme preference"),
        }
        next
    }

    /// Follow an OS color-scheme change unless an explicit preference is
    /// persisted.
    pub fn on_system_preference_change(&self, prefers_dark: bool) {
        if let Some(explicit) = self.persisted() {
            debug!(%explicit, prefers_dark, "system theme change ignored; explicit preference set");
            return;
        }
        let theme = Theme::from_prefers_dark(prefers_dark);
        debug!(%theme, "following system theme change");
        self.apply_theme(theme);
    }

    fn persisted(&self) -> Option<Theme> {
        match self.store.load(STORAGE_KEY) {
            Ok(Some(raw)) => match raw.parse() {
                Ok(theme) => Some(theme),
                Err(error) => {
                    debug!(%error, "ignoring persisted theme value");
                    None
                }
            },
            Ok(None) => None,
            Err(error) => {
                warn!(%error, "failed to read theme preference");
                None
            }
        }
    }
}

impl fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeController")
            .field("current", &self.current_theme())
            .finish_non_exhaustive()
    }
}

/// A live controller plus its event subscriptions.
///
/// Dropping the binding removes the click and OS listeners.
#[derive(Debug)]
#[must_use = "dropping a ThemeBinding removes its listeners"]
pub struct ThemeBinding {
    controller: Rc<ThemeController>,
    subscriptions: Vec<Subscription>,
}

impl ThemeBinding {
    #[must_use]
    pub fn controller(&self) -> &ThemeController {
        &self.controller
    }

    /// Remove both listeners now.
    pub fn unbind(self) {
        for subscription in self.subscriptions {
            subscription.cancel();
        }
    }
}
