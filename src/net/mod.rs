//! Networking: the contact endpoint is the only remote surface.

pub mod api;
