//! Networking for the console.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the browser transport plugged into the `gate` pipeline. Endpoint
//! paths and payload types live in `gate::admin`.

pub mod api;
