//! Audit log: filter by admin, action, and target; clear selected entries.

#[cfg(test)]
#[path = "audit_logs_test.rs"]
mod audit_logs_test;

use gate::admin::{AuditFilter, AuditLog};
use leptos::prelude::*;
use serde_json::Value;

use crate::app::Console;
use crate::state::resource::Loadable;
use crate::util::load::{spawn_action, spawn_load};

/// Add `id` to the selection, or remove it if already selected.
pub fn toggle_selection(selected: &mut Vec<i64>, id: i64) {
    if let Some(pos) = selected.iter().position(|s| *s == id) {
        selected.remove(pos);
    } else {
        selected.push(id);
    }
}

/// One-line rendering of an entry's free-form detail payload.
pub fn detail_summary(detail: Option<&Value>) -> String {
    match detail {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

#[component]
pub fn AuditLogsPage() -> impl IntoView {
    let console = StoredValue::new(expect_context::<Console>());
    let state = RwSignal::new(Loadable::<Vec<AuditLog>>::default());
    let admin_username = RwSignal::new(String::new());
    let action = RwSignal::new(String::new());
    let target_type = RwSignal::new(String::new());
    let selected = RwSignal::new(Vec::<i64>::new());
    let version = RwSignal::new(0_u32);
    let notice = RwSignal::new(String::new());

    Effect::new(move || {
        version.track();
        let filter = AuditFilter {
            admin_username: non_blank(&admin_username.get()),
            action: non_blank(&action.get()),
            target_type: non_blank(&target_type.get()),
            ..AuditFilter::default()
        };
        selected.set(Vec::new());
        let api = console.get_value();
        spawn_load(state, async move { api.admin().audit_logs(&filter).await });
    });

    let on_clear = move |_| {
        let ids = selected.get();
        if ids.is_empty() {
            notice.set("Select at least one entry.".to_owned());
            return;
        }
        notice.set(String::new());
        let api = console.get_value();
        spawn_action(async move { api.admin().clear_audit_logs(&ids).await }, move |result| match result {
            Ok(_) => version.update(|v| *v += 1),
            Err(err) => notice.set(err.display_message()),
        });
    };

    let filter_input = move |placeholder: &'static str, signal: RwSignal<String>| {
        view! {
            <input
                placeholder=placeholder
                prop:value=move || signal.get()
                on:change=move |ev| signal.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <section class="page page--audit">
            <h2>"Audit Logs"</h2>
            <div class="page__toolbar">
                {filter_input("Admin", admin_username)}
                {filter_input("Action", action)}
                {filter_input("Target type", target_type)}
                <button class="danger" on:click=on_clear disabled=move || selected.with(Vec::is_empty)>
                    {move || format!("Clear selected ({})", selected.with(Vec::len))}
                </button>
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
                        <th></th>
                        <th>"When"</th>
                        <th>"Admin"</th>
                        <th>"Action"</th>
                        <th>"Target"</th>
                        <th>"Detail"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        state
                            .with(|s| s.data.clone().unwrap_or_default())
                            .into_iter()
                            .map(|entry| {
                                let id = entry.id;
                                view! {
                                    <tr>
                                        <td>
                                            <input
                                                type="checkbox"
                                                prop:checked=move || selected.with(|s| s.contains(&id))
                                                on:change=move |_| selected.update(|s| toggle_selection(s, id))
                                            />
                                        </td>
                                        <td>{entry.created_at}</td>
                                        <td>{entry.admin_username}</td>
                                        <td>{entry.action}</td>
                                        <td>{format!("{} {}", entry.target_type, entry.target_id)}</td>
                                        <td class="mono">{detail_summary(entry.detail.as_ref())}</td>
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
