#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Mobile menu open/closed state. Opening is expected to lock page
/// scrolling; the rendering layer projects that via
/// `util::scroll::set_body_scroll_locked`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

/// Events that can change the menu state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    ToggleClick,
    LinkClick,
    EscapeKey,
}

/// Follow-up effect the rendering layer must perform after a
/// transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEffect {
    /// Return keyboard focus to the toggle control.
    FocusToggle,
}

impl MenuState {
    /// Apply one event. Escape only acts while the menu is open, and is
    /// the only close path that moves focus back to the toggle.
    pub fn apply(&mut self, event: MenuEvent) -> Option<MenuEffect> {
        match event {
            MenuEvent::ToggleClick => {
                self.open = !self.open;
                None
            }
            MenuEvent::LinkClick => {
                self.open = false;
                None
            }
            MenuEvent::EscapeKey if self.open => {
                self.open = false;
                Some(MenuEffect::FocusToggle)
            }
            MenuEvent::EscapeKey => None,
        }
    }

    /// `aria-expanded` value for the toggle control.
    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}
