//! Hard redirect via `window.location`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used only by the pipeline's deauthentication path. Setting `href` reloads
//! the page, which discards in-memory state and any pending client-side
//! route, unlike the route gate's soft `navigate` redirect.

use gate::Navigator;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn force_navigate(&self, path: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
        }
    }
}
