//! Application state modules.
//!
//! DESIGN
//! ======
//! State is split by behavior (`theme`, `menu`, `contact`, etc.) so each
//! interactive surface depends on a small focused model. Every module is
//! a pure (state, event) -> state core; DOM projection stays in
//! `components` and `util`.

pub mod contact;
pub mod header;
pub mod menu;
pub mod nav;
pub mod reveal;
pub mod theme;
