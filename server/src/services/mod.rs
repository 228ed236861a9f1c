//! Service modules for upstream backend access.

pub mod upstream;
