//! Networking modules for the same-origin REST surface.

pub mod api;
