//! Root application component with routing and context providers.

use std::sync::Arc;

use gate::admin::AdminApi;
use gate::config::{BASE_URL_ENV, TIMEOUT_MS_ENV};
use gate::{ApiConfig, GuardDecision, NavigationGuard, Pipeline, RouteTable};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::main_layout::MainLayout;
use crate::components::route_gate::{RouteGate, gate_path};
use crate::net::api::FetchTransport;
use crate::pages::{
    audit_logs::AuditLogsPage, clients::ClientsPage, dashboard::DashboardPage, licenses::LicensesPage,
    login::LoginPage, products::ProductsPage,
};
use crate::state::progress::{ProgressState, SignalProgress};
use crate::state::session::LocalStorageStore;
use crate::util::navigation::LocationNavigator;

/// Everything a page needs to talk to the backend and gate navigation.
#[derive(Clone)]
pub struct Console {
    pipeline: Arc<Pipeline<FetchTransport>>,
    guard: Arc<NavigationGuard>,
    routes: Arc<RouteTable>,
}

impl Console {
    pub fn new(progress: RwSignal<ProgressState>) -> Self {
        let pipeline = Pipeline::new(
            FetchTransport,
            Arc::new(LocalStorageStore),
            Arc::new(SignalProgress(progress)),
            Arc::new(LocationNavigator),
            build_config(),
        );
        Self {
            pipeline: Arc::new(pipeline),
            guard: Arc::new(NavigationGuard::new()),
            routes: Arc::new(RouteTable::admin_console()),
        }
    }

    pub fn admin(&self) -> AdminApi<'_, FetchTransport> {
        AdminApi::new(&self.pipeline)
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Guard decision for `path` against the live session.
    pub fn gate(&self, path: &str) -> GuardDecision {
        gate_path(&self.routes, &self.guard, self.pipeline.store(), path)
    }
}

/// Build-time overrides; the same-origin default needs none.
fn build_config() -> ApiConfig {
    let lookup = |name: &str| match name {
        BASE_URL_ENV => option_env!("HEXAUTH_BASE_URL").map(str::to_owned),
        TIMEOUT_MS_ENV => option_env!("HEXAUTH_TIMEOUT_MS").map(str::to_owned),
        _ => None,
    };
    match ApiConfig::from_lookup(lookup) {
        Ok(config) => config,
        Err(err) => {
            leptos::logging::warn!("invalid build-time API config ({err}); using defaults");
            ApiConfig::default()
        }
    }
}

/// Root application component.
///
/// Provides the progress signal and the [`Console`] context, then mounts the
/// router. Every protected route renders inside [`RouteGate`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let progress = RwSignal::new(ProgressState::default());
    provide_context(progress);
    provide_context(Console::new(progress));

    view! {
        <Title text="hexauth admin"/>

        <Router>
            <Routes fallback=|| view! { <RouteGate>"Page not found."</RouteGate> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=GatedLayout>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("products") view=ProductsPage/>
                    <Route path=StaticSegment("licenses") view=LicensesPage/>
                    <Route path=StaticSegment("clients") view=ClientsPage/>
                    <Route path=StaticSegment("audit-logs") view=AuditLogsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

#[component]
fn GatedLayout() -> impl IntoView {
    view! {
        <RouteGate>
            <MainLayout/>
        </RouteGate>
    }
}
