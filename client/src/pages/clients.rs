//! Activated clients: filter, disable/enable, delete.

use gate::admin::{Client, ClientFilter, ClientStatus};
use leptos::prelude::*;

use crate::app::Console;
use crate::state::resource::Loadable;
use crate::util::load::{spawn_action, spawn_load};

#[component]
pub fn ClientsPage() -> impl IntoView {
    let console = StoredValue::new(expect_context::<Console>());
    let state = RwSignal::new(Loadable::<Vec<Client>>::default());
    let status = RwSignal::new(None::<ClientStatus>);
    let product_code = RwSignal::new(String::new());
    let version = RwSignal::new(0_u32);
    let notice = RwSignal::new(String::new());

    Effect::new(move || {
        version.track();
        let code = product_code.get();
        let filter = ClientFilter {
            status: status.get(),
            product_code: (!code.trim().is_empty()).then(|| code.trim().to_owned()),
            ..ClientFilter::default()
        };
        let api = console.get_value();
        spawn_load(state, async move { api.admin().clients(&filter).await });
    });

    let reload_or_report = move |result: Result<(), gate::ApiError>| match result {
        Ok(()) => version.update(|v| *v += 1),
        Err(err) => notice.set(err.display_message()),
    };

    view! {
        <section class="page page--clients">
            <h2>"Clients"</h2>
            <div class="page__toolbar">
                <select on:change=move |ev| status.set(event_target_value(&ev).parse().ok())>
                    <option value="">"All statuses"</option>
                    <option value="normal">"Normal"</option>
                    <option value="abnormal">"Abnormal"</option>
                    <option value="disabled">"Disabled"</option>
                </select>
                <input
                    placeholder="Product code"
                    prop:value=move || product_code.get()
                    on:change=move |ev| product_code.set(event_target_value(&ev))
                />
            </div>
            <Show when=move || !notice.get().is_empty()>
                <p class="page__notice">{move || notice.get()}</p>
            </Show>
            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="page__error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Fingerprint"</th>
                        <th>"Product"</th>
                        <th>"License"</th>
                        <th>"Type"</th>
                        <th>"IP"</th>
                        <th>"Last heartbeat"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        state
                            .with(|s| s.data.clone().unwrap_or_default())
                            .into_iter()
                            .map(|client| {
                                let id = client.id;
                                let disabled = client.status == ClientStatus::Disabled;
                                let on_toggle = move |_| {
                                    let api = console.get_value();
                                    spawn_action(
                                        async move {
                                            let admin = api.admin();
                                            let result = if disabled {
                                                admin.enable_client(id).await
                                            } else {
                                                admin.disable_client(id).await
                                            };
                                            result.map(|_| ())
                                        },
                                        reload_or_report,
                                    );
                                };
                                let on_delete = move |_| {
                                    let api = console.get_value();
                                    spawn_action(async move { api.admin().delete_client(id).await }, reload_or_report);
                                };
                                view! {
                                    <tr>
                                        <td class="mono">{client.client_fp}</td>
                                        <td>{client.product_code}</td>
                                        <td>{client.license_id}</td>
                                        <td>{client.client_type.as_str()}</td>
                                        <td>{client.ip_address.unwrap_or_default()}</td>
                                        <td>{client.last_heartbeat.unwrap_or_else(|| "never".to_owned())}</td>
                                        <td>{client.status.as_str()}</td>
                                        <td class="table__actions">
                                            <button on:click=on_toggle>
                                                {if disabled { "Enable" } else { "Disable" }}
                                            </button>
                                            <button class="danger" on:click=on_delete>
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </section>
    }
}
