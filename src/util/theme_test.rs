#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_defaults_to_dark_off_the_browser() {
    assert_eq!(read_preference(), Theme::Dark);
}

#[test]
fn toggle_flips_the_theme() {
    assert_eq!(toggle(Theme::Dark), Theme::Light);
    assert_eq!(toggle(Theme::Light), Theme::Dark);
}

#[test]
fn apply_and_persist_are_noops_but_callable() {
    apply(Theme::Dark);
    apply(Theme::Light);
    persist(Theme::Dark);
    persist(Theme::Light);
}
