//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` wraps the persisted token; `history` remembers where the last
//! permitted transition landed. Neither holds per-request gate state.

pub mod history;
pub mod session;
