//! Mobile menu toggle and slide-over panel.

use leptos::prelude::*;

use crate::components::header::NAV_SECTIONS;
use crate::state::menu::{MenuEffect, MenuEvent, MenuState};

/// Menu toggle plus the panel it controls. Opening locks page
/// scrolling; closing via Escape returns focus to the toggle.
#[component]
pub fn MobileMenu() -> impl IntoView {
    let menu = expect_context::<RwSignal<MenuState>>();
    let toggle_ref = NodeRef::<leptos::html::Button>::new();

    let run = move |event: MenuEvent| {
        let mut effect = None;
        menu.update(|state| effect = state.apply(event));
        crate::util::scroll::set_body_scroll_locked(menu.get_untracked().open);
        if effect == Some(MenuEffect::FocusToggle) {
            if let Some(toggle) = toggle_ref.get() {
                let _ = toggle.focus();
            }
        }
    };

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                run(MenuEvent::EscapeKey);
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <button
            id="menuToggle"
            node_ref=toggle_ref
            class="menu-toggle"
            class:active=move || menu.get().open
            aria-expanded=move || menu.get().aria_expanded()
            aria-controls="mobileMenu"
            aria-label="Menu"
            on:click=move |_| run(MenuEvent::ToggleClick)
        >
            <span class="menu-toggle__bar"></span>
            <span class="menu-toggle__bar"></span>
        </button>

        <nav id="mobileMenu" class="mobile-menu" class:active=move || menu.get().open>
            {NAV_SECTIONS
                .iter()
                .map(|&(href, label)| {
                    view! {
                        <a
                            href=href
                            on:click=move |ev| {
                                run(MenuEvent::LinkClick);
                                crate::util::scroll::on_anchor_click(&ev, href);
                            }
                        >
                            {label}
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
