//! Salescope API - Sales reporting REST service.
//!
//! Library crate backing the `salescope-api` binary. Exposes the route
//! handlers, store abstraction, and configuration so the router tests and
//! the CLI can reuse them.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod state;
