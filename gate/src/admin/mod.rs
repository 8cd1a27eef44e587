//! Admin console endpoints and payloads.

pub mod api;
pub mod types;

pub use api::AdminApi;
pub use types::*;
