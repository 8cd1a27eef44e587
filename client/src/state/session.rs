//! `localStorage`-backed session token store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Origin-scoped, synchronous, and durable across reloads, which is exactly
//! the contract the pipeline and the route gate rely on. Outside the browser
//! there is no storage, so reads return `None` and writes are dropped.

use gate::{SessionStore, TOKEN_KEY};

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

#[cfg(feature = "csr")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for LocalStorageStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            storage()?.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = storage() else {
                log::warn!("localStorage unavailable; session token not persisted");
                return;
            };
            let _ = storage.set_item(TOKEN_KEY, token);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}
