//! Reusable view components.
//!
//! `guarded` hosts the navigation gate inside the router; `route_view` is the
//! stand-in body each declared route renders once the gate lets it through.

pub mod guarded;
pub mod route_view;
