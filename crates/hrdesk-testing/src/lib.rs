//! Test utilities for HRDesk services.
//!
//! Provides bearer-header builders and canned domain fixtures.
//! Import in tests only, never in production code.

pub mod auth;
pub mod fixture;
