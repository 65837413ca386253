//! Theme toggle button with pressed-state indicator.

use leptos::prelude::*;

use crate::state::theme::{Theme, ThemeState};

/// Flips between dark and light, persisting the choice. The control
/// reads as pressed (`aria-pressed="true"`) while light is active.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    let on_click = move |_| {
        let next = crate::util::theme::toggle(theme.get_untracked().theme);
        theme.update(|state| state.theme = next);
    };

    view! {
        <button
            id="themeToggle"
            class="theme-toggle"
            on:click=on_click
            aria-pressed=move || theme.get().theme.aria_pressed()
            title="Toggle theme"
        >
            {move || match theme.get().theme {
                Theme::Dark => "☀",
                Theme::Light => "☾",
            }}
        </button>
    }
}
