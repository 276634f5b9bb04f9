//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers) from
//! gate logic so the gate stays testable off the browser.

pub mod delay;
pub mod storage;
