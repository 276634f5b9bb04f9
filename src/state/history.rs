//! Origin tracking for view transitions.
//!
//! The router does not report where a transition came from, so the gate
//! adapter records the path of each view it lets through and hands that back
//! as the origin of the next request.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::routes::path_of;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationHistory {
    current: Option<String>,
}

impl NavigationHistory {
    /// Path of the last permitted view, or `""` before the first transition.
    pub fn origin(&self) -> &str {
        self.current.as_deref().unwrap_or("")
    }

    /// Record a permitted destination (query and fragment dropped).
    pub fn settle(&mut self, destination: &str) {
        self.current = Some(path_of(destination).to_owned());
    }
}
