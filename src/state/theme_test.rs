use super::*;

// =============================================================
// Stored preference parsing
// =============================================================

#[test]
fn default_theme_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
    assert_eq!(ThemeState::default().theme, Theme::Dark);
}

#[test]
fn absent_preference_is_dark() {
    assert_eq!(Theme::from_stored(None), Theme::Dark);
}

#[test]
fn stored_light_is_light() {
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
}

#[test]
fn stored_dark_is_dark() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
}

#[test]
fn unrecognized_preference_falls_back_to_dark() {
    assert_eq!(Theme::from_stored(Some("solarized")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
}

#[test]
fn stored_value_round_trips() {
    for theme in [Theme::Dark, Theme::Light] {
        assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
    }
}

// =============================================================
// Toggling
// =============================================================

#[test]
fn toggle_twice_returns_to_original() {
    for theme in [Theme::Dark, Theme::Light] {
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn toggle_parity_from_default() {
    let mut theme = Theme::default();
    for n in 1..=8 {
        theme = theme.toggled();
        let expected = if n % 2 == 0 { Theme::Dark } else { Theme::Light };
        assert_eq!(theme, expected, "after {n} toggles");
    }
}

// =============================================================
// ARIA projection
// =============================================================

#[test]
fn aria_pressed_reflects_light_theme() {
    assert_eq!(Theme::Dark.aria_pressed(), "false");
    assert_eq!(Theme::Light.aria_pressed(), "true");
}
