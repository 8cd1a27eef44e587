//! Login page: username + password exchanged for a session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route reachable without a session. A successful login stores the
//! token through the pipeline and moves on to the dashboard; rejected
//! credentials come back as `401`, which deauthenticates and reloads this view.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::Console;
use crate::util::load::spawn_action;

pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 50;
pub const PASSWORD_MIN: usize = 6;

/// Check the form before any request is made.
///
/// Returns the trimmed username and the password untouched.
pub fn validate_login(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Enter a username.");
    }
    let len = username.chars().count();
    if !(USERNAME_MIN..=USERNAME_MAX).contains(&len) {
        return Err("Username must be 3 to 50 characters.");
    }
    if password.is_empty() {
        return Err("Enter a password.");
    }
    if password.chars().count() < PASSWORD_MIN {
        return Err("Password must be at least 6 characters.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let console = StoredValue::new(expect_context::<Console>());
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user, pass) = match validate_login(&username.get(), &password.get()) {
            Ok(fields) => fields,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let api = console.get_value();
        let navigate = navigate.clone();
        spawn_action(async move { api.admin().login(&user, &pass).await }, move |result| {
            busy.set(false);
            match result {
                Ok(_) => navigate("/dashboard", NavigateOptions::default()),
                Err(err) => info.set(format!("Sign-in failed: {}", err.display_message())),
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"hexauth"</h1>
                <p class="login-card__subtitle">"License administration"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
