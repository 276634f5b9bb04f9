//! Router adapter that runs the navigation gate before a view renders.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos routes have no before-navigation hook, so each route body is wrapped
//! in `<Guarded>`. On every location change it evaluates the transition and
//! either reveals its children or replaces the location with the redirect.

#[cfg(test)]
#[path = "guarded_test.rs"]
mod guarded_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::GateConfig;
use crate::guard::{Gate, NavigationDecision, NavigationRequest};
use crate::routes::full_path;
use crate::state::history::NavigationHistory;
use crate::state::session::SessionReader;
use crate::util::delay::BrowserDelay;
use crate::util::storage::LocalStorageTokenStore;

/// What the adapter does with a finished evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Applied {
    /// A newer evaluation superseded this one.
    Drop,
    /// Show the route body.
    Reveal,
    /// Replace the location with this href.
    Navigate(String),
}

/// Apply a decision for evaluation `ticket` while `current` is the latest.
///
/// Only a current `Proceed` settles `history`; stale results and redirects
/// leave it untouched.
pub fn apply(
    ticket: u64,
    current: Option<u64>,
    decision: &NavigationDecision,
    destination: &str,
    history: &mut NavigationHistory,
    config: &GateConfig,
) -> Applied {
    if current != Some(ticket) {
        return Applied::Drop;
    }
    match decision.href(config) {
        None => {
            history.settle(destination);
            Applied::Reveal
        }
        Some(href) => Applied::Navigate(href),
    }
}

/// Render `children` only once the gate lets the current location through.
#[component]
pub fn Guarded(children: ChildrenFn) -> impl IntoView {
    let config = expect_context::<GateConfig>();
    let store = expect_context::<LocalStorageTokenStore>();
    let history = expect_context::<RwSignal<NavigationHistory>>();
    let location = use_location();
    let navigate = use_navigate();

    let allowed = RwSignal::new(false);
    // Bumped per evaluation; a finished evaluation acts only if still current.
    let generation = StoredValue::new(0_u64);

    Effect::new(move || {
        let destination = full_path(&location.pathname.get(), &location.search.get());
        let origin = history.with_untracked(|h| h.origin().to_owned());
        let request = NavigationRequest::for_destination(&destination, &origin);

        allowed.set(false);
        generation.update_value(|g| *g += 1);
        let ticket = generation.get_value();

        let gate = Gate::new(config.clone());
        let session = SessionReader::new(store.clone());
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let decision = gate.evaluate(request, &session, &BrowserDelay).await;
            let current = generation.try_get_value();
            let applied = history
                .try_update(|h| apply(ticket, current, &decision, &destination, h, gate.config()))
                .unwrap_or(Applied::Drop);
            match applied {
                Applied::Drop => log::debug!("gate: dropping stale decision for {destination}"),
                Applied::Reveal => allowed.set(true),
                Applied::Navigate(href) => {
                    navigate(&href, NavigateOptions { replace: true, ..NavigateOptions::default() });
                }
            }
        });
    });

    view! {
        <Show when=move || allowed.get()>
            {children()}
        </Show>
    }
}
