//! Site header: logo, section navigation, theme toggle, and the mobile
//! menu controls.

use leptos::prelude::*;

use crate::components::mobile_menu::MobileMenu;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::header::HeaderState;
use crate::state::nav::NavState;

/// Section links shown in the desktop nav and the mobile menu.
pub const NAV_SECTIONS: [(&str, &str); 4] = [
    ("#about", "About"),
    ("#projects", "Projects"),
    ("#experience", "Experience"),
    ("#contact", "Contact"),
];

/// Fixed page header. Gains the `scrolled` class past the scroll
/// threshold and highlights the nav link of the active section.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let header = expect_context::<RwSignal<HeaderState>>();
    let nav = expect_context::<RwSignal<NavState>>();

    #[cfg(feature = "hydrate")]
    {
        let update = move || {
            header.update(|state| state.on_scroll(crate::util::scroll::vertical_offset()));
        };
        // Once at load, then on every scroll.
        Effect::new(move || update());
        let handle = window_event_listener(leptos::ev::scroll, move |_| update());
        on_cleanup(move || handle.remove());
    }

    view! {
        <header id="header" class="site-header" class:scrolled=move || header.get().scrolled>
            <div class="site-header__inner">
                <a href="#" class="site-header__logo">
                    "Alex Chen"
                </a>

                <nav class="nav-links" aria-label="Primary">
                    {NAV_SECTIONS
                        .iter()
                        .map(|&(href, label)| {
                            view! {
                                <a
                                    href=href
                                    class:active=move || nav.get().link_is_active(href)
                                    aria-current=move || nav.get().aria_current(href)
                                    on:click=move |ev| crate::util::scroll::on_anchor_click(&ev, href)
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>

                <ThemeToggle/>
                <MobileMenu/>
            </div>
        </header>
    }
}
