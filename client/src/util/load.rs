//! Run a pipeline call in the background and settle its page state.

use std::future::Future;

use gate::ApiError;
use leptos::prelude::*;

use crate::state::resource::Loadable;

/// Mark `state` loading, then settle it with the result of `call`.
pub fn spawn_load<T, F>(state: RwSignal<Loadable<T>>, call: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    state.update(Loadable::begin);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = call.await;
        let _ = state.try_update(|s| s.settle(result));
    });

    #[cfg(not(feature = "csr"))]
    {
        drop(call);
        state.update(|s| s.settle(Err(ApiError::Transport("not available outside the browser".to_owned()))));
    }
}

/// Fire-and-forget variant for row actions; reports the outcome to `done`.
pub fn spawn_action<T, F, D>(call: F, done: D)
where
    T: 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
    D: FnOnce(Result<T, ApiError>) + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        done(call.await);
    });

    #[cfg(not(feature = "csr"))]
    {
        drop(call);
        done(Err(ApiError::Transport("not available outside the browser".to_owned())));
    }
}
