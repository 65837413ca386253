#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Visual theme preference, persisted across sessions under a single
/// localStorage key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Storage and `data-theme` attribute value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Interpret a stored preference. Absent and unrecognized values
    /// both fall back to dark.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// `aria-pressed` value for the toggle control. The control reads as
    /// pressed while the light theme is active.
    #[must_use]
    pub fn aria_pressed(self) -> &'static str {
        match self {
            Self::Dark => "false",
            Self::Light => "true",
        }
    }
}

/// Shared theme state provided via context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
}
