//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::{guarded::Guarded, route_view::RouteView};
use crate::config::GateConfig;
use crate::routes::ROOT_REDIRECT;
use crate::state::history::NavigationHistory;
use crate::util::storage::LocalStorageTokenStore;

/// Root application component.
///
/// Provides the gate's config, token store and transition history, then
/// declares every view behind `<Guarded>`.
#[component]
pub fn App() -> impl IntoView {
    let config = GateConfig::default();
    provide_context(LocalStorageTokenStore::new(config.token_key.clone()));
    provide_context(RwSignal::new(NavigationHistory::default()));
    provide_context(config);

    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=ROOT_REDIRECT/> }/>
                <Route path=StaticSegment("login") view=|| view! { <Guarded><RouteView path="/login"/></Guarded> }/>
                <Route path=StaticSegment("register") view=|| view! { <Guarded><RouteView path="/register"/></Guarded> }/>
                <Route path=StaticSegment("data-management") view=|| view! { <Guarded><RouteView path="/data-management"/></Guarded> }/>
                <Route path=StaticSegment("data-analysis") view=|| view! { <Guarded><RouteView path="/data-analysis"/></Guarded> }/>
                <Route path=StaticSegment("model-training") view=|| view! { <Guarded><RouteView path="/model-training"/></Guarded> }/>
                <Route path=StaticSegment("student-feedback") view=|| view! { <Guarded><RouteView path="/student-feedback"/></Guarded> }/>
                <Route path=StaticSegment("teacher-dashboard") view=|| view! { <Guarded><RouteView path="/teacher-dashboard"/></Guarded> }/>
                <Route path=StaticSegment("visualization") view=|| view! { <Guarded><RouteView path="/visualization"/></Guarded> }/>
                <Route path=StaticSegment("profile") view=|| view! { <Guarded><RouteView path="/profile"/></Guarded> }/>
            </Routes>
        </Router>
    }
}
