//! Dashboard: headline counts, service health, recent activity.

use gate::admin::Dashboard;
use leptos::prelude::*;

use crate::app::Console;
use crate::state::resource::Loadable;
use crate::util::load::spawn_load;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let console = expect_context::<Console>();
    let state = RwSignal::new(Loadable::<Dashboard>::default());
    spawn_load(state, async move { console.admin().dashboard().await });

    let stat = move |label: &'static str, pick: fn(&Dashboard) -> u64| {
        view! {
            <div class="stat-card">
                <span class="stat-card__label">{label}</span>
                <span class="stat-card__value">
                    {move || state.with(|s| s.data.as_ref().map(pick).unwrap_or_default())}
                </span>
            </div>
        }
    };

    view! {
        <section class="page page--dashboard">
            <h2>"Dashboard"</h2>
            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="page__error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <div class="stat-grid">
                {stat("Products", |d| d.stats.product_count)}
                {stat("Licenses", |d| d.stats.license_count)}
                {stat("Active clients", |d| d.stats.active_client_count)}
                {stat("Activations today", |d| d.stats.today_activations)}
            </div>
            <h3>"Health"</h3>
            <ul class="health">
                {move || {
                    let health = state.with(|s| s.data.as_ref().map(|d| d.health_status).unwrap_or_default());
                    [("API", health.api), ("Database", health.database), ("Service", health.service)]
                        .into_iter()
                        .map(|(name, ok)| {
                            view! {
                                <li class="health__item" class:down={!ok}>
                                    {name}
                                    ": "
                                    {if ok { "up" } else { "down" }}
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <h3>"Recent activity"</h3>
            <ul class="activity">
                {move || {
                    state
                        .with(|s| s.data.as_ref().map(|d| d.recent_activities.clone()).unwrap_or_default())
                        .into_iter()
                        .map(|activity| {
                            view! {
                                <li class="activity__item">
                                    <span class="activity__title">{activity.title}</span>
                                    <span class="activity__time">{activity.time}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </section>
    }
}
