//! Utility helpers isolating browser concerns from components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything touching `web_sys` lives here behind the `hydrate`
//! feature, with deterministic no-op fallbacks so state and component
//! logic stays testable off the browser.

pub mod scroll;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod observer;
