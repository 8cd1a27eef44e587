//! Licenses: filter by status and product, issue, revoke.

#[cfg(test)]
#[path = "licenses_test.rs"]
mod licenses_test;

use gate::admin::{License, LicenseCreate, LicenseFilter, LicenseStatus};
use leptos::prelude::*;

use crate::app::Console;
use crate::state::resource::Loadable;
use crate::util::load::{spawn_action, spawn_load};

/// Raw text of the issue-license form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LicenseForm {
    pub license_key: String,
    pub product_code: String,
    pub max_devices: String,
    pub expire_at: String,
    pub remark: String,
}

impl LicenseForm {
    /// Validate against the backend's bounds before sending.
    pub fn parse(&self) -> Result<LicenseCreate, &'static str> {
        let license_key = self.license_key.trim();
        if !(10..=50).contains(&license_key.chars().count()) {
            return Err("License key must be 10 to 50 characters.");
        }
        let product_code = self.product_code.trim();
        if product_code.is_empty() {
            return Err("Product code is required.");
        }
        let max_devices = match self.max_devices.trim().parse::<u32>() {
            Ok(n) if (1..=100).contains(&n) => n,
            _ => return Err("Max devices must be between 1 and 100."),
        };
        let expire_at = self.expire_at.trim();
        if !is_iso_date(expire_at) {
            return Err("Expiry must be a YYYY-MM-DD date.");
        }
        let remark = self.remark.trim();
        Ok(LicenseCreate {
            license_key: license_key.to_owned(),
            product_code: product_code.to_owned(),
            max_devices,
            expire_at: expire_at.to_owned(),
            remark: (!remark.is_empty()).then(|| remark.to_owned()),
        })
    }
}

/// Shape check for `YYYY-MM-DD`; the backend validates the calendar.
pub fn is_iso_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
}

#[component]
pub fn LicensesPage() -> impl IntoView {
    let console = StoredValue::new(expect_context::<Console>());
    let state = RwSignal::new(Loadable::<Vec<License>>::default());
    let status = RwSignal::new(None::<LicenseStatus>);
    let product_code = RwSignal::new(String::new());
    let version = RwSignal::new(0_u32);
    let notice = RwSignal::new(String::new());
    let form = RwSignal::new(LicenseForm::default());

    Effect::new(move || {
        version.track();
        let code = product_code.get();
        let filter = LicenseFilter {
            status: status.get(),
            product_code: (!code.trim().is_empty()).then(|| code.trim().to_owned()),
            ..LicenseFilter::default()
        };
        let api = console.get_value();
        spawn_load(state, async move { api.admin().licenses(&filter).await });
    });

    let reload_or_report = move |result: Result<(), gate::ApiError>| match result {
        Ok(()) => version.update(|v| *v += 1),
        Err(err) => notice.set(err.display_message()),
    };

    let on_issue = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let license = match form.with(LicenseForm::parse) {
            Ok(license) => license,
            Err(msg) => {
                notice.set(msg.to_owned());
                return;
            }
        };
        notice.set(String::new());
        let api = console.get_value();
        spawn_action(async move { api.admin().create_license(&license).await.map(|_| ()) }, move |result| {
            if result.is_ok() {
                form.set(LicenseForm::default());
            }
            reload_or_report(result);
        });
    };

    let field = move |placeholder: &'static str, get: fn(&LicenseForm) -> String, set: fn(&mut LicenseForm, String)| {
        view! {
            <input
                placeholder=placeholder
                prop:value=move || form.with(get)
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        }
    };

    view! {
        <section class="page page--licenses">
            <h2>"Licenses"</h2>
            <div class="page__toolbar">
                <select on:change=move |ev| status.set(event_target_value(&ev).parse().ok())>
                    <option value="">"All statuses"</option>
                    <option value="unactivated">"Unactivated"</option>
                    <option value="activated">"Activated"</option>
                    <option value="expired">"Expired"</option>
                    <option value="revoked">"Revoked"</option>
                </select>
                <input
                    placeholder="Product code"
                    prop:value=move || product_code.get()
                    on:change=move |ev| product_code.set(event_target_value(&ev))
                />
            </div>
            <form class="page__form" on:submit=on_issue>
                {field("License key", |f| f.license_key.clone(), |f, v| f.license_key = v)}
                {field("Product code", |f| f.product_code.clone(), |f, v| f.product_code = v)}
                {field("Max devices", |f| f.max_devices.clone(), |f, v| f.max_devices = v)}
                {field("Expires (YYYY-MM-DD)", |f| f.expire_at.clone(), |f, v| f.expire_at = v)}
                {field("Remark", |f| f.remark.clone(), |f, v| f.remark = v)}
                <button type="submit">"Issue"</button>
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
                        <th>"Key"</th>
                        <th>"Product"</th>
                        <th>"Devices"</th>
                        <th>"Expires"</th>
                        <th>"Status"</th>
                        <th>"Remark"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        state
                            .with(|s| s.data.clone().unwrap_or_default())
                            .into_iter()
                            .map(|license| {
                                let id = license.id;
                                let revocable = license.status != LicenseStatus::Revoked;
                                let on_revoke = move |_| {
                                    let api = console.get_value();
                                    spawn_action(
                                        async move { api.admin().revoke_license(id).await.map(|_| ()) },
                                        reload_or_report,
                                    );
                                };
                                view! {
                                    <tr>
                                        <td class="mono">{license.license_key}</td>
                                        <td>{license.product_code}</td>
                                        <td>{license.max_devices}</td>
                                        <td>{license.expire_at}</td>
                                        <td>{license.status.as_str()}</td>
                                        <td>{license.remark.unwrap_or_default()}</td>
                                        <td class="table__actions">
                                            {revocable
                                                .then(|| {
                                                    view! {
                                                        <button class="danger" on:click=on_revoke>
                                                            "Revoke"
                                                        </button>
                                                    }
                                                })}
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
