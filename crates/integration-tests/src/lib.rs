//! Integration tests for Salescope.
//!
//! The actual tests live in `tests/` and run against live services; see the
//! per-file docs for what each suite requires.

#![cfg_attr(not(test), forbid(unsafe_code))]
