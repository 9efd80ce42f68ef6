//! Salescope Web - Server-rendered report views.
//!
//! Library crate backing the `salescope-web` binary. Exposes the routes,
//! API client, and configuration so the view tests can reuse them.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod filters;
pub mod routes;
pub mod state;
