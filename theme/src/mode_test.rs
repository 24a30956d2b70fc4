use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_parses_both_names() {
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
}

#[test]
fn theme_parse_rejects_other_strings() {
    assert_eq!("Dark".parse::<Theme>(), Err(ParseThemeError("Dark".to_owned())));
    assert_eq!("".parse::<Theme>(), Err(ParseThemeError(String::new())));
    assert!("system".parse::<Theme>().is_err());
}

#[test]
fn theme_display_matches_marker_value() {
    assert_eq!(Theme::Dark.to_string(), "dark");
    assert_eq!(Theme::Light.to_string(), Theme::Light.as_str());
}

#[test]
fn toggled_twice_is_identity() {
    for theme in [Theme::Dark, Theme::Light] {
        assert_ne!(theme.toggled(), theme);
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn toggle_label_names_the_opposite_mode() {
    assert_eq!(Theme::Dark.toggle_label(), "Light mode");
    assert_eq!(Theme::Light.toggle_label(), "Dark mode");
}

#[test]
fn from_prefers_dark_maps_signal() {
    assert_eq!(Theme::from_prefers_dark(true), Theme::Dark);
    assert_eq!(Theme::from_prefers_dark(false), Theme::Light);
}

#[test]
fn parse_error_message_names_value() {
    let err = "blue".parse::<Theme>().unwrap_err();
    assert!(err.to_string().contains("\"blue\""));
}

// =============================================================
// ThemePreference
// =============================================================

#[test]
fn resolve_without_persisted_value_follows_system() {
    let dark = ThemePreference::resolve(None, true);
    assert_eq!(dark.value, Theme::Dark);
    assert_eq!(dark.source, PreferenceSource::System);

    let light = ThemePreference::resolve(None, false);
    assert_eq!(light.value, Theme::Light);
    assert!(!light.is_explicit());
}

#[test]
fn resolve_persisted_value_wins_over_system() {
    for prefers_dark in [true, false] {
        let pref = ThemePreference::resolve(Some(Theme::Light), prefers_dark);
        assert_eq!(pref.value, Theme::Light);
        assert!(pref.is_explicit());

        let pref = ThemePreference::resolve(Some(Theme::Dark), prefers_dark);
        assert_eq!(pref.value, Theme::Dark);
        assert_eq!(pref.source, PreferenceSource::Explicit);
    }
}
