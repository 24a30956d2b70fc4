#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn bind_document_is_none_outside_browser() {
    assert!(bind_document().is_none());
}

#[test]
fn toggle_selector_targets_toggle_attribute() {
    assert_eq!(TOGGLE_SELECTOR, format!("[{TOGGLE_ATTRIBUTE}]"));
}

#[test]
fn marker_attribute_is_data_theme() {
    assert_eq!(MARKER_ATTRIBUTE, "data-theme");
    assert!(DARK_SCHEME_QUERY.contains("prefers-color-scheme: dark"));
}
