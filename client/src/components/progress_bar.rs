//! Thin bar across the top of the page while any pipeline call is in flight.

use leptos::prelude::*;

use crate::state::progress::ProgressState;

#[component]
pub fn ProgressBar() -> impl IntoView {
    let progress = expect_context::<RwSignal<ProgressState>>();

    view! {
        <div
            class="progress-bar"
            class:active=move || progress.get().is_busy()
            role="progressbar"
            aria-busy=move || progress.get().is_busy().to_string()
        ></div>
    }
}
