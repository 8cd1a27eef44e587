//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome (layout, progress bar) and the route
//! gate, reading shared state from Leptos context providers.

pub mod main_layout;
pub mod progress_bar;
pub mod route_gate;
