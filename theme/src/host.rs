//! Capabilities the controller needs from its environment.
//!
//! DESIGN
//! ======
//! The page, the persistence layer and the OS signal are injected through a
//! [`ThemeContext`] instead of being read from globals. Event sources hand
//! back a [`Subscription`] so a listener can be removed without a live event
//! loop.

use std::fmt;

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

/// Callback invoked when the toggle control is activated.
pub type ClickHandler = Box<dyn FnMut()>;

/// Callback invoked with the new "prefers dark" value when the OS changes it.
pub type SchemeHandler = Box<dyn FnMut(bool)>;

/// Failure reported by a [`PreferenceStore`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No storage is reachable on this page (e.g. disabled by the browser).
    #[error("preference storage unavailable")]
    Unavailable,
    /// The backend rejected the read or write.
    #[error("preference storage error: {0}")]
    Backend(String),
}

/// Element carrying the theme marker attribute.
pub trait ThemeMarker {
    /// Raw marker value, `None` when the attribute is unset.
    fn read(&self) -> Option<String>;
    fn write(&self, value: &str);
}

/// The user-facing control that flips the theme.
pub trait ToggleControl {
    fn set_label(&self, label: &str);
    fn on_click(&self, handler: ClickHandler) -> Subscription;
}

/// Key-value persistence for the explicit preference.
pub trait PreferenceStore {
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend rejects the write.
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// OS-level "prefers dark color scheme" signal.
pub trait SystemColorScheme {
    fn prefers_dark(&self) -> bool;
    fn on_change(&self, handler: SchemeHandler) -> Subscription;
}

/// Everything the controller touches, passed in at construction.
pub struct ThemeContext {
    pub marker: Box<dyn ThemeMarker>,
    /// Absent on pages that do not render a toggle control.
    pub control: Option<Box<dyn ToggleControl>>,
    pub store: Box<dyn PreferenceStore>,
    pub system: Box<dyn SystemColorScheme>,
}

impl fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeContext")
            .field("marker", &self.marker.read())
            .field("has_control", &self.control.is_some())
            .finish_non_exhaustive()
    }
}

/// Handle for a registered listener. Cancels the listener when dropped.
#[must_use = "dropping a Subscription removes the listener"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// A handle with nothing to cancel, for sources that never fire.
    pub fn inert() -> Self {
        Self { cancel: None }
    }

    /// Remove the listener now.
    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
