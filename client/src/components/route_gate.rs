//! Route gate wrapping every protected view.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router mounts protected views inside [`RouteGate`]. Each location
//! change re-runs the navigation guard against the live session; a denied
//! transition is replaced with a soft redirect to the login view and the
//! protected content never renders.

#[cfg(test)]
#[path = "route_gate_test.rs"]
mod route_gate_test;

use gate::{GuardDecision, NavigationGuard, RouteTable, SessionStore};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::Console;

/// Resolve `path` through the route table and evaluate the guard for it.
pub fn gate_path(routes: &RouteTable, guard: &NavigationGuard, store: &dyn SessionStore, path: &str) -> GuardDecision {
    let target = routes.resolve(path);
    guard.evaluate(&target, store)
}

#[component]
pub fn RouteGate(children: ChildrenFn) -> impl IntoView {
    let console = expect_context::<Console>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| console.gate(&location.pathname.get()));

    Effect::new(move || {
        if let GuardDecision::Redirect(path) = decision.get() {
            navigate(&path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show when=move || decision.get().is_permitted()>
            {children()}
        </Show>
    }
}
