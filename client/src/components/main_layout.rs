//! Authenticated shell: sidebar navigation, header, and the routed outlet.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered only after the route gate permits the location. The sidebar is
//! built from the route table's menu so it cannot drift from what the guard
//! and router know about.

#[cfg(test)]
#[path = "main_layout_test.rs"]
mod main_layout_test;

use gate::admin::AdminProfile;
use gate::{LOGIN_PATH, Navigator};
use leptos::prelude::*;
use leptos_router::components::{A, Outlet};

use crate::app::Console;
use crate::components::progress_bar::ProgressBar;
use crate::state::resource::Loadable;
use crate::util::load::spawn_load;
use crate::util::navigation::LocationNavigator;

/// Sidebar label for a route name.
pub fn menu_label(name: &str) -> &'static str {
    match name {
        "dashboard" => "Dashboard",
        "products" => "Products",
        "licenses" => "Licenses",
        "clients" => "Clients",
        "audit-logs" => "Audit Logs",
        _ => "Other",
    }
}

#[component]
pub fn MainLayout() -> impl IntoView {
    let console = expect_context::<Console>();
    let menu = console
        .routes()
        .menu()
        .into_iter()
        .map(|record| (record.path, menu_label(record.name)))
        .collect::<Vec<_>>();

    let profile = RwSignal::new(Loadable::<AdminProfile>::default());
    {
        let console = console.clone();
        spawn_load(profile, async move { console.admin().me().await });
    }

    let on_logout = move |_| {
        console.admin().logout();
        LocationNavigator.force_navigate(LOGIN_PATH);
    };

    view! {
        <ProgressBar/>
        <div class="layout">
            <aside class="layout__sidebar">
                <div class="layout__brand">"hexauth"</div>
                <nav class="layout__menu">
                    {menu
                        .into_iter()
                        .map(|(path, label)| {
                            view! {
                                <A href=path attr:class="layout__menu-item">
                                    {label}
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>
            </aside>
            <div class="layout__main">
                <header class="layout__header">
                    <span class="layout__user">
                        {move || profile.with(|p| p.data.as_ref().map(|me| me.username.clone()).unwrap_or_default())}
                    </span>
                    <button class="layout__logout" on:click=on_logout>
                        "Log out"
                    </button>
                </header>
                <main class="layout__content">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
