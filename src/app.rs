//! Root application component and shared-state contexts.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::pages::home::HomePage;
use crate::state::header::HeaderState;
use crate::state::menu::MenuState;
use crate::state::nav::NavState;
use crate::state::theme::ThemeState;

/// Root component.
///
/// Provides the shared state contexts, projects the stored theme onto
/// the document before anything else renders, and mounts the page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemeState {
        theme: crate::util::theme::read_preference(),
    });
    let header = RwSignal::new(HeaderState::default());
    let nav = RwSignal::new(NavState::default());
    let menu = RwSignal::new(MenuState::default());

    provide_context(theme);
    provide_context(header);
    provide_context(nav);
    provide_context(menu);

    #[cfg(feature = "hydrate")]
    {
        crate::util::theme::apply(theme.get_untracked().theme);
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio-client.css"/>
        <Title text="Alex Chen | Portfolio"/>
        <HomePage/>
    }
}
