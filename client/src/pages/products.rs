//! Products: list by status, create, enable/disable, delete.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use gate::admin::{Product, ProductCreate, ProductFilter, ProductStatus, ProductUpdate};
use leptos::prelude::*;

use crate::app::Console;
use crate::state::resource::Loadable;
use crate::util::load::{spawn_action, spawn_load};

/// Build a create request from raw form input.
pub fn parse_product_form(code: &str, name: &str, heartbeat: &str) -> Result<ProductCreate, &'static str> {
    let code = code.trim();
    let name = name.trim();
    if code.is_empty() || name.is_empty() {
        return Err("Product code and name are required.");
    }
    let heartbeat = heartbeat.trim();
    let heartbeat_interval = if heartbeat.is_empty() {
        None
    } else {
        match heartbeat.parse::<u32>() {
            Ok(secs) if secs > 0 => Some(secs),
            _ => return Err("Heartbeat interval must be a positive number of seconds."),
        }
    };
    Ok(ProductCreate {
        product_code: code.to_owned(),
        name: name.to_owned(),
        heartbeat_interval,
        status: Some(ProductStatus::Enabled),
    })
}

/// Status a toggle button switches the product to.
pub fn toggled_status(current: Option<ProductStatus>) -> ProductStatus {
    match current {
        Some(ProductStatus::Disabled) => ProductStatus::Enabled,
        _ => ProductStatus::Disabled,
    }
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let console = StoredValue::new(expect_context::<Console>());
    let state = RwSignal::new(Loadable::<Vec<Product>>::default());
    let status = RwSignal::new(None::<ProductStatus>);
    let version = RwSignal::new(0_u32);
    let notice = RwSignal::new(String::new());

    Effect::new(move || {
        version.track();
        let filter = ProductFilter { status: status.get(), ..ProductFilter::default() };
        let api = console.get_value();
        spawn_load(state, async move { api.admin().products(&filter).await });
    });

    let reload_or_report = move |result: Result<(), gate::ApiError>| match result {
        Ok(()) => version.update(|v| *v += 1),
        Err(err) => notice.set(err.display_message()),
    };

    let code = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let heartbeat = RwSignal::new(String::new());

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let product = match parse_product_form(&code.get(), &name.get(), &heartbeat.get()) {
            Ok(product) => product,
            Err(msg) => {
                notice.set(msg.to_owned());
                return;
            }
        };
        notice.set(String::new());
        let api = console.get_value();
        spawn_action(async move { api.admin().create_product(&product).await.map(|_| ()) }, move |result| {
            if result.is_ok() {
                code.set(String::new());
                name.set(String::new());
                heartbeat.set(String::new());
            }
            reload_or_report(result);
        });
    };

    view! {
        <section class="page page--products">
            <h2>"Products"</h2>
            <div class="page__toolbar">
                <select on:change=move |ev| status.set(event_target_value(&ev).parse().ok())>
                    <option value="">"All statuses"</option>
                    <option value="enabled">"Enabled"</option>
                    <option value="disabled">"Disabled"</option>
                </select>
            </div>
            <form class="page__form" on:submit=on_create>
                <input
                    placeholder="Product code"
                    prop:value=move || code.get()
                    on:input=move |ev| code.set(event_target_value(&ev))
                />
                <input
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    placeholder="Heartbeat (s)"
                    prop:value=move || heartbeat.get()
                    on:input=move |ev| heartbeat.set(event_target_value(&ev))
                />
                <button type="submit">"Create"</button>
            </form>
            <Show when=move || !notice.get().is_empty()>
                <p class="page__notice">{move || notice.get()}</p>
            </Show>
            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="page__error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Code"</th>
                        <th>"Name"</th>
                        <th>"Heartbeat"</th>
                        <th>"Status"</th>
                        <th>"Created"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        state
                            .with(|s| s.data.clone().unwrap_or_default())
                            .into_iter()
                            .map(|product| {
                                let id = product.id;
                                let next = toggled_status(product.status);
                                let on_toggle = move |_| {
                                    let api = console.get_value();
                                    let update = ProductUpdate { status: Some(next), ..ProductUpdate::default() };
                                    spawn_action(
                                        async move { api.admin().update_product(id, &update).await.map(|_| ()) },
                                        reload_or_report,
                                    );
                                };
                                let on_delete = move |_| {
                                    let api = console.get_value();
                                    spawn_action(async move { api.admin().delete_product(id).await }, reload_or_report);
                                };
                                view! {
                                    <tr>
                                        <td>{product.product_code}</td>
                                        <td>{product.name}</td>
                                        <td>{product.heartbeat_interval.map(|s| format!("{s}s")).unwrap_or_default()}</td>
                                        <td>{product.status.map(|s| s.as_str()).unwrap_or("-")}</td>
                                        <td>{product.created_at}</td>
                                        <td class="table__actions">
                                            <button on:click=on_toggle>
                                                {if next == ProductStatus::Enabled { "Enable" } else { "Disable" }}
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
