//! Page modules. The portfolio is a single page; sections are in-page
//! anchors rather than routes.

pub mod home;
