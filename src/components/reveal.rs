//! One-shot fade-in wrapper for content blocks.

use leptos::prelude::*;

use crate::state::reveal::RevealState;

/// Wraps a block that fades in the first time it scrolls into view.
/// `class` is the block's own styling class; `fade-in` marks it for the
/// reveal treatment and `visible` is projected from the one-shot latch.
#[component]
pub fn Reveal(#[prop(into)] class: String, children: Children) -> impl IntoView {
    let state = RwSignal::new(RevealState::default());
    let node_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            if let Some(element) = node_ref.get() {
                crate::util::observer::watch_reveal(element.into(), state);
            }
        });
    }

    view! {
        <div
            node_ref=node_ref
            class=format!("{class} fade-in")
            class:visible=move || state.get().visible
        >
            {children()}
        </div>
    }
}
