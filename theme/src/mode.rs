//! Theme values and preference resolution.

use std::fmt;
use std::str::FromStr;

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

/// Error returned when a string is not one of the two theme names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized theme: {0:?} (expected \"dark\" or \"light\")")]
pub struct ParseThemeError(pub String);

/// One of the two mutually exclusive visual modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Marker and storage representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Label shown on the toggle control while this theme is applied.
    ///
    /// Names the mode a click switches *to*, so it reads "Light mode" while
    /// the page is dark.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "Light mode",
            Self::Light => "Dark mode",
        }
    }

    /// Theme implied by the OS "prefers dark color scheme" signal.
    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}

/// Where the applied theme came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreferenceSource {
    /// The user picked it and it is persisted.
    Explicit,
    /// Derived from the OS color-scheme signal.
    System,
}

/// A theme together with its origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemePreference {
    pub value: Theme,
    pub source: PreferenceSource,
}

impl ThemePreference {
    /// Resolve the preference for a fresh page load.
    ///
    /// A persisted explicit value always wins; otherwise the OS signal
    /// decides, with `Light` when it does not report dark.
    #[must_use]
    pub fn resolve(persisted: Option<Theme>, prefers_dark: bool) -> Self {
        match persisted {
            Some(value) => Self { value, source: PreferenceSource::Explicit },
            None => Self {
                value: Theme::from_prefers_dark(prefers_dark),
                source: PreferenceSource::System,
            },
        }
    }

    #[must_use]
    pub fn is_explicit(&self) -> bool {
        self.source == PreferenceSource::Explicit
    }
}
