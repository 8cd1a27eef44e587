//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` and `progress` are the browser halves of the pipeline's
//! collaborators; `resource` is the per-page fetch state.

pub mod progress;
pub mod resource;
pub mod session;
