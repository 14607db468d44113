//! Weather gateway library.
//!
//! This crate defines:
//! - Startup configuration (upstream credential, CORS origin)
//! - The upstream weather provider client
//! - The in-memory record store keyed by generated id
//! - The HTTP API tying the three together
//!
//! It is used by the `weather-gateway` binary, but the router can also be
//! mounted by other binaries or test harnesses.

pub mod api;
pub mod config;
pub mod models;
pub mod store;
pub mod upstream;
