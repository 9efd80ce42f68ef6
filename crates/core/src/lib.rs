//! Salescope Core - Shared types library.
//!
//! This crate provides the record types shared by the Salescope components:
//! - `api` - Sales reporting REST service
//! - `web` - Server-rendered report views
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Sales record and aggregation result types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
