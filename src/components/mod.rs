//! Reusable UI components.
//!
//! Components project shared state from Leptos contexts onto the page
//! chrome; state transitions live in `state` and browser side effects
//! in `util`.

pub mod contact_form;
pub mod header;
pub mod mobile_menu;
pub mod reveal;
pub mod theme_toggle;
