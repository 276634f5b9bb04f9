//! Placeholder body for a declared route.

use leptos::prelude::*;

use crate::routes::route_for;

/// Shows the declared title for `path`.
#[component]
pub fn RouteView(path: &'static str) -> impl IntoView {
    let title = route_for(path).map_or("Page not found.", |entry| entry.title);
    view! {
        <section class="route-view">
            <h1>{title}</h1>
        </section>
    }
}
