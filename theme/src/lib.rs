//! Dark/light theme state shared between the page marker, the toggle control
//! and the persisted preference.
//!
//! This crate owns the theme rules and nothing else. Every environment
//! concern (DOM attribute, `localStorage`, `matchMedia`) is reached through the
//! capability traits in [`host`], so the `client` crate plugs in web-sys
//! implementations and tests plug in in-memory fakes.

pub mod controller;
pub mod host;
pub mod mode;

pub use controller::{ThemeBinding, ThemeController};
pub use host::{
    ClickHandler, PreferenceStore, SchemeHandler, StoreError, Subscription, SystemColorScheme,
    ThemeContext, ThemeMarker, ToggleControl,
};
pub use mode::{ParseThemeError, PreferenceSource, Theme, ThemePreference};

/// Key under which the explicit preference is persisted.
pub const STORAGE_KEY: &str = "nexus-theme";
